//! Filter
//!
//! `filter` keeps the elements a predicate accepts. Chained after `map` it
//! reads as a pipeline. For yes/no questions about a sequence, `contains`
//! and `all_matching` say what they mean without building a new vector.

use std::num::ParseIntError;

use playground_common::Transcript;
use playground_common::sequence::{all_matching, filter, map, try_filter};

/// Squares of 1..10 that are even.
pub fn even_squares() -> Vec<u32> {
    let numbers: Vec<u32> = (1..10).collect();
    filter(&map(&numbers, |n| n * n), |n| n % 2 == 0)
}

/// What `filter` does, spelled out.
pub fn filter_by_hand<T: Clone>(items: &[T], is_included: impl Fn(&T) -> bool) -> Vec<T> {
    let mut result = Vec::new();
    for x in items {
        if is_included(x) {
            result.push(x.clone());
        }
    }
    result
}

/// Keeps the inputs that parse to a positive number.
///
/// One unparsable input fails the whole call; no partial result escapes.
pub fn positive_numbers<'a>(inputs: &[&'a str]) -> Result<Vec<&'a str>, ParseIntError> {
    try_filter(inputs, |s| s.trim().parse::<i64>().map(|n| n > 0))
}

pub fn tour() -> Transcript {
    let mut t = Transcript::new("Filter");
    let squares = even_squares();
    t.record("even squares", &squares);
    t.record("contains 36", &squares.contains(&36));
    t.record("all even", &all_matching(&squares, |n| n % 2 == 0));
    let positives = positive_numbers(&["3", "-1", "8"]);
    t.record("positive of [\"3\", \"-1\", \"8\"]", &positives);
    let unparsable = positive_numbers(&["3", "x"]).is_err();
    t.record("positive of [\"3\", \"x\"] fails", &unparsable);
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_squares() {
        assert_eq!(even_squares(), vec![4, 16, 36, 64]);
    }

    #[test]
    fn test_filter_by_hand_matches_filter() {
        let list: Vec<i32> = (-5..5).collect();
        assert_eq!(filter_by_hand(&list, |x| *x < 0), filter(&list, |x| *x < 0));
    }

    #[test]
    fn test_positive_numbers() {
        assert_eq!(positive_numbers(&["3", "-1", " 8 "]), Ok(vec!["3", " 8 "]));
        assert!(positive_numbers(&["3", "three"]).is_err());
        assert_eq!(positive_numbers(&[]), Ok(vec![]));
    }

    #[test]
    fn test_tour() {
        let t = tour();
        assert_eq!(t.value_of("contains 36"), Some("true"));
        assert_eq!(t.value_of("all even"), Some("true"));
    }
}
