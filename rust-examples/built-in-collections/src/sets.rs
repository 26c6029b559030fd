//! Sets
//!
//! A set is a map with keys and no values: membership tests are constant
//! time and duplicates cannot exist, but order is not kept. Set algebra
//! (difference, intersection, union) has a non-mutating form that returns a
//! new set and a mutating form that updates in place.
//!
//! [`IndexRanges`] stores integers as sorted, disjoint ranges, so a run of a
//! thousand selected rows costs two numbers instead of a thousand entries.
//!
//! A set used as a side table also gives order-preserving deduplication; see
//! `playground_common::unique`.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::ops::{Range, RangeInclusive};

use playground_common::Transcript;
use playground_common::unique::unique;

pub const IPODS: [&str; 5] = [
    "iPod touch",
    "iPod nano",
    "iPod mini",
    "iPod shuffle",
    "iPod Classic",
];
pub const DISCONTINUED_IPODS: [&str; 2] = ["iPod mini", "iPod Classic"];
pub const TOUCHSCREEN: [&str; 4] = ["iPhone", "iPad", "iPod touch", "iPod nano"];

pub fn set_of<'a>(items: &[&'a str]) -> HashSet<&'a str> {
    items.iter().copied().collect()
}

/// Set contents in a stable order, for display and comparison.
pub fn sorted<'a>(set: &HashSet<&'a str>) -> Vec<&'a str> {
    let mut items: Vec<_> = set.iter().copied().collect();
    items.sort_unstable();
    items
}

pub fn current_ipods() -> HashSet<&'static str> {
    set_of(&IPODS)
        .difference(&set_of(&DISCONTINUED_IPODS))
        .copied()
        .collect()
}

pub fn ipods_with_touch() -> HashSet<&'static str> {
    set_of(&IPODS)
        .intersection(&set_of(&TOUCHSCREEN))
        .copied()
        .collect()
}

/// Mutating union: grows `discontinued` in place.
pub fn form_union(discontinued: &mut HashSet<&'static str>, more: &[&'static str]) {
    discontinued.extend(more.iter().copied());
}

/// Sorted, disjoint, non-adjacent ranges of `u32`.
///
/// Ranges are stored inclusive, so every `u32` up to `u32::MAX` fits.
///
/// # Example
/// ```
/// use playground_collections::sets::IndexRanges;
///
/// let mut indices = IndexRanges::new();
/// indices.insert_range(1..5);
/// indices.insert_range(11..15);
///
/// assert_eq!(indices.filter(|i| i % 2 == 0), vec![2, 4, 12, 14]);
/// assert_eq!(indices.range_count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexRanges {
    ranges: Vec<RangeInclusive<u32>>,
}

impl IndexRanges {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every integer in the half-open `range`. Empty ranges are ignored.
    pub fn insert_range(&mut self, range: Range<u32>) {
        if range.is_empty() {
            return;
        }
        self.insert_inclusive(range.start..=range.end - 1);
    }

    /// Adds a single integer.
    pub fn insert(&mut self, value: u32) {
        self.insert_inclusive(value..=value);
    }

    /// Adds every integer in `range`, coalescing with overlapping or
    /// touching ranges. Empty ranges are ignored.
    pub fn insert_inclusive(&mut self, range: RangeInclusive<u32>) {
        if range.is_empty() {
            return;
        }
        self.ranges.push(range);
        self.ranges.sort_unstable_by_key(|r| *r.start());

        let mut merged: Vec<RangeInclusive<u32>> = Vec::with_capacity(self.ranges.len());
        for next in self.ranges.drain(..) {
            match merged.last_mut() {
                // saturating: a range ending at u32::MAX touches everything after it
                Some(last) if *next.start() <= last.end().saturating_add(1) => {
                    let end = (*last.end()).max(*next.end());
                    *last = *last.start()..=end;
                }
                _ => merged.push(next),
            }
        }
        self.ranges = merged;
    }

    #[must_use]
    pub fn contains(&self, value: u32) -> bool {
        self.ranges
            .binary_search_by(|r| {
                if *r.end() < value {
                    Ordering::Less
                } else if *r.start() > value {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            })
            .is_ok()
    }

    /// Number of integers stored. `u64` because all of `u32` can be stored.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.ranges
            .iter()
            .map(|r| u64::from(*r.end()) - u64::from(*r.start()) + 1)
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Number of stored ranges: the actual storage cost.
    #[must_use]
    pub fn range_count(&self) -> usize {
        self.ranges.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.ranges.iter().flat_map(|r| r.clone())
    }

    pub fn filter(&self, predicate: impl Fn(u32) -> bool) -> Vec<u32> {
        self.iter().filter(|i| predicate(*i)).collect()
    }
}

pub fn tour() -> Transcript {
    let mut t = Transcript::new("Sets");

    let naturals: HashSet<u32> = [1, 2, 3, 2].into_iter().collect();
    t.record("naturals size", &naturals.len());
    t.record("contains 3", &naturals.contains(&3));
    t.record("contains 0", &naturals.contains(&0));

    t.record("current iPods", &sorted(&current_ipods()));
    t.record("iPods with touch", &sorted(&ipods_with_touch()));

    let mut discontinued = set_of(&["iBook", "Powerbook", "Power Mac"]);
    let union: HashSet<&str> = discontinued
        .union(&set_of(&DISCONTINUED_IPODS))
        .copied()
        .collect();
    form_union(&mut discontinued, &DISCONTINUED_IPODS);
    t.record("union", &sorted(&union));
    t.record("form_union matches union", &(discontinued == union));

    let mut indices = IndexRanges::new();
    indices.insert_range(1..5);
    indices.insert_range(11..15);
    t.record("even indices", &indices.filter(|i| i % 2 == 0));
    t.record("stored ranges", &indices.range_count());

    t.record("unique", &unique(&[1, 2, 3, 12, 1, 3, 4, 5, 6, 4, 6]));
    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_algebra() {
        assert_eq!(
            sorted(&current_ipods()),
            vec!["iPod nano", "iPod shuffle", "iPod touch"]
        );
        assert_eq!(sorted(&ipods_with_touch()), vec!["iPod nano", "iPod touch"]);
    }

    #[test]
    fn test_form_union_in_place() {
        let mut discontinued = set_of(&["iBook"]);
        form_union(&mut discontinued, &["iPod mini", "iBook"]);
        assert_eq!(sorted(&discontinued), vec!["iBook", "iPod mini"]);
    }

    #[test]
    fn test_index_ranges_coalesce() {
        let mut indices = IndexRanges::new();
        indices.insert_range(11..15);
        indices.insert_range(1..5);
        indices.insert_range(5..8);
        indices.insert_range(3..4);
        indices.insert_range(9..9);

        assert_eq!(indices.range_count(), 2);
        assert_eq!(indices.len(), 11);
        assert_eq!(
            indices.iter().collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6, 7, 11, 12, 13, 14]
        );
    }

    #[test]
    fn test_index_ranges_contains() {
        let mut indices = IndexRanges::new();
        indices.insert_range(1..5);
        indices.insert_range(11..15);
        indices.insert(20);

        assert!(indices.contains(1));
        assert!(indices.contains(4));
        assert!(!indices.contains(5));
        assert!(!indices.contains(0));
        assert!(indices.contains(20));
        assert!(!indices.contains(21));
        assert_eq!(indices.filter(|i| i % 2 == 0), vec![2, 4, 12, 14, 20]);
    }

    #[test]
    fn test_index_ranges_hold_u32_max() {
        let mut indices = IndexRanges::new();
        indices.insert(u32::MAX);
        assert!(indices.contains(u32::MAX));
        assert_eq!(indices.len(), 1);

        indices.insert_range(u32::MAX - 2..u32::MAX);
        assert_eq!(indices.range_count(), 1);
        assert_eq!(indices.len(), 3);
        assert_eq!(
            indices.iter().collect::<Vec<_>>(),
            vec![u32::MAX - 2, u32::MAX - 1, u32::MAX]
        );
        assert!(!indices.contains(u32::MAX - 3));
    }

    #[test]
    fn test_index_ranges_inclusive_and_adjacent() {
        let mut indices = IndexRanges::new();
        indices.insert_inclusive(0..=0);
        indices.insert_inclusive(5..=u32::MAX);
        indices.insert_range(1..5);
        indices.insert_inclusive(3..=1);

        assert_eq!(indices.range_count(), 1);
        assert_eq!(indices.len(), u64::from(u32::MAX) + 1);
        assert!(indices.contains(0) && indices.contains(u32::MAX));
    }

    #[test]
    fn test_empty_index_ranges() {
        let indices = IndexRanges::new();
        assert!(indices.is_empty());
        assert_eq!(indices.len(), 0);
        assert!(!indices.contains(0));
    }

    #[test]
    fn test_tour() {
        let t = tour();
        assert_eq!(t.value_of("naturals size"), Some("3"));
        assert_eq!(t.value_of("form_union matches union"), Some("true"));
        assert_eq!(t.value_of("even indices"), Some("[2, 4, 12, 14]"));
        assert_eq!(t.value_of("unique"), Some("[1, 2, 3, 12, 4, 5, 6]"));
    }
}
