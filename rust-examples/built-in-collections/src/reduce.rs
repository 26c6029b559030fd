//! Reduce
//!
//! `reduce` combines all elements into one value, strictly left to right.
//! With a non-commutative combiner, like string concatenation, that order
//! is visible in the result. `map` and `filter` can both be written as a
//! fold, at the cost of going from O(n) to O(n²).

use playground_common::Transcript;
use playground_common::sequence::{filter_via_reduce, map_via_reduce, reduce};

pub const FIBS: [u64; 6] = [0, 1, 1, 2, 3, 5];

pub fn sum(numbers: &[u64]) -> u64 {
    reduce(numbers, 0, |total, n| total + n)
}

pub fn digits(numbers: &[u64]) -> String {
    reduce(numbers, String::new(), |mut s, n| {
        s.push_str(&n.to_string());
        s
    })
}

/// What `reduce` does, spelled out.
pub fn reduce_by_hand<T, R>(items: &[T], initial: R, next_partial: impl Fn(R, &T) -> R) -> R {
    let mut result = initial;
    for x in items {
        result = next_partial(result, x);
    }
    result
}

pub fn tour() -> Transcript {
    let mut t = Transcript::new("Reduce");
    t.record("sum of fibs", &sum(&FIBS));
    t.record("fibs as string", &digits(&FIBS));
    let by_hand = reduce_by_hand(&FIBS, 0, |total, n| total + n);
    t.record("sum by hand", &by_hand);
    t.record("doubled via reduce", &map_via_reduce(&FIBS, |n| n * 2));
    t.record("odd via reduce", &filter_via_reduce(&FIBS, |n| n % 2 == 1));
    t
}
