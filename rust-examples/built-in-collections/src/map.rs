//! Map
//!
//! `map` transforms every element and keeps the order. Writing it by hand
//! is a short loop; the interesting part is that a small reusable helper
//! (`last_where`, `accumulate`) can replace a loop-and-mutable-variable
//! pattern at every call site.

use playground_common::Transcript;
use playground_common::sequence::{SequenceExt, map};

pub const NAMES: [&str; 3] = ["Paula", "Elena", "Zoe"];

/// What `map` does, spelled out: reserve, then push each transformed element.
pub fn map_by_hand<T, U>(items: &[T], transform: impl Fn(&T) -> U) -> Vec<U> {
    let mut result = Vec::with_capacity(items.len());
    for x in items {
        result.push(transform(x));
    }
    result
}

/// The loop version: walk backwards, remember the first hit, stop.
pub fn last_ending_in_a_by_loop(names: &[&str]) -> Option<String> {
    let mut last_name_ending_in_a = None;
    for name in names.iter().rev() {
        if name.ends_with('a') {
            last_name_ending_in_a = Some(name.to_string());
            break;
        }
    }
    last_name_ending_in_a
}

/// The same search through the reusable helper; no mutable state needed.
pub fn last_ending_in_a(names: &[&str]) -> Option<String> {
    names
        .last_where(|name| name.ends_with('a'))
        .map(|name| name.to_string())
}

pub fn running_totals(numbers: &[i64]) -> Vec<i64> {
    numbers.accumulate(0, |total, n| total + n)
}

pub fn tour() -> Transcript {
    let mut t = Transcript::new("Map");
    let numbers: Vec<i64> = (1..=10).collect();

    t.record("add one", &map(&numbers, |x| x + 1));
    t.record("add one by hand", &map_by_hand(&numbers, |x| x + 1));
    t.record("last ending in a (loop)", &last_ending_in_a_by_loop(&NAMES));
    t.record("last ending in a", &last_ending_in_a(&NAMES));
    let totals = running_totals(&[1, 2, 3, 4]);
    t.record("running totals of [1, 2, 3, 4]", &totals);
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_by_hand_matches_map() {
        let words = ["one", "three", "five"];
        assert_eq!(map_by_hand(&words, |w| w.len()), map(&words, |w| w.len()));
    }

    #[test]
    fn test_last_ending_in_a_is_elena() {
        assert_eq!(last_ending_in_a(&NAMES), Some("Elena".to_string()));
        assert_eq!(last_ending_in_a_by_loop(&NAMES), last_ending_in_a(&NAMES));
    }

    #[test]
    fn test_last_ending_in_a_none() {
        assert_eq!(last_ending_in_a(&["Zoe", "Kim"]), None);
        assert_eq!(last_ending_in_a(&[]), None);
    }

    #[test]
    fn test_running_totals() {
        assert_eq!(running_totals(&[1, 2, 3, 4]), vec![1, 3, 6, 10]);
    }

    #[test]
    fn test_tour() {
        let t = tour();
        assert_eq!(t.value_of("last ending in a"), Some("Some(\"Elena\")"));
        assert_eq!(
            t.value_of("running totals of [1, 2, 3, 4]"),
            Some("[1, 3, 6, 10]")
        );
    }
}
