//! while-let loops
//!
//! A `for` loop is sugar for calling `next()` until it returns `None`.
//! Writing that out with `while let` works for any source of optional
//! values, such as popping a vector until it is empty.

use playground_common::{OwnedSeq, Transcript};

/// Pops from the back until empty; returns the popped values in order.
pub fn drain_from_back(items: Vec<i32>) -> Vec<i32> {
    let mut seq = OwnedSeq::from(items);
    let mut popped = Vec::new();
    while let Some(value) = seq.pop_last() {
        popped.push(value);
    }
    popped
}

/// Walks an iterator by hand, the way `for` does.
#[allow(clippy::while_let_on_iterator)]
pub fn walk_with_next(items: &[i32]) -> Vec<i32> {
    let mut iterator = items.iter();
    let mut seen = Vec::new();
    while let Some(i) = iterator.next() {
        seen.push(*i);
    }
    seen
}

/// Even numbers below `limit`, filtered inside the loop.
pub fn evens_below(limit: u32) -> Vec<u32> {
    let mut evens = Vec::new();
    for i in 0..limit {
        if i % 2 != 0 {
            continue;
        }
        evens.push(i);
    }
    evens
}

/// A `while` condition ends the loop the first time it fails, unlike a
/// filter, which only skips.
pub fn leading_evens(items: &[u32]) -> Vec<u32> {
    let mut iterator = items.iter().peekable();
    let mut evens = Vec::new();
    while let Some(i) = iterator.next_if(|i| *i % 2 == 0) {
        evens.push(*i);
    }
    evens
}

pub fn tour() -> Transcript {
    let mut t = Transcript::new("while let");
    let popped = drain_from_back(vec![1, 2, 3, 4]);
    t.record("popped from [1, 2, 3, 4]", &popped);
    t.record("walked [1, 2, 3]", &walk_with_next(&[1, 2, 3]));
    t.record("evens below 10", &evens_below(10));
    let leading = leading_evens(&[2, 4, 5, 6]);
    t.record("leading evens of [2, 4, 5, 6]", &leading);
    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_drain_and_walk() {
        assert_eq!(drain_from_back(vec![1, 2, 3, 4]), vec![4, 3, 2, 1]);
        assert!(drain_from_back(vec![]).is_empty());
        assert_eq!(walk_with_next(&[1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn test_evens_below() {
        assert_eq!(evens_below(10), vec![0, 2, 4, 6, 8]);
        assert!(evens_below(0).is_empty());
    }

    #[test]
    fn test_leading_evens_stops_at_first_odd() {
        assert_eq!(leading_evens(&[2, 4, 5, 6]), vec![2, 4]);
        assert!(leading_evens(&[1, 2]).is_empty());
    }
}
