//! # Sequence Operations
//!
//! Functional operations over ordered sequences, written against slices
//! (`&[T]`) so they work for `Vec<T>`, arrays and borrowed views alike.
//!
//! ## Conventions
//!
//! - The sequence comes first, the closure last.
//! - Pure transforms (`map`, `filter`, `reduce`, ...) take `Fn` closures:
//!   they cannot mutate captured state, so the order in which elements are
//!   visited is not part of their contract. The output order always is.
//! - `for_each` takes `FnMut` because side effects are its whole point.
//! - Absence is `None`. Out-of-range access is an `Err(CollectionError)`.
//!
//! ## Example
//!
//! ```
//! use playground_common::sequence::{accumulate, filter, map, reduce};
//!
//! let numbers = vec![1, 2, 3, 4];
//!
//! assert_eq!(map(&numbers, |x| x + 1), vec![2, 3, 4, 5]);
//! assert_eq!(filter(&numbers, |x| x % 2 == 0), vec![2, 4]);
//! assert_eq!(reduce(&numbers, 0, |total, x| total + x), 10);
//! assert_eq!(accumulate(&numbers, 0, |total, x| total + x), vec![1, 3, 6, 10]);
//! ```

use std::hash::Hash;
use std::ops::{ControlFlow, Range};

use crate::error::CollectionError;

/// Applies `transform` to every element, preserving order and length.
///
/// # Example
/// ```
/// use playground_common::sequence::map;
/// let squares = map(&[1, 2, 3], |x| x * x);
/// assert_eq!(squares, vec![1, 4, 9]);
/// ```
pub fn map<T, U, F>(seq: &[T], transform: F) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    seq.iter().map(transform).collect()
}

/// Keeps the elements for which `predicate` holds, in their original order.
///
/// # Example
/// ```
/// use playground_common::sequence::filter;
/// let evens = filter(&[1, 2, 3, 4], |x| x % 2 == 0);
/// assert_eq!(evens, vec![2, 4]);
/// ```
pub fn filter<T: Clone, P>(seq: &[T], predicate: P) -> Vec<T>
where
    P: Fn(&T) -> bool,
{
    seq.iter().filter(|x| predicate(x)).cloned().collect()
}

/// Like [`filter`], with a predicate that can fail.
///
/// The first error is returned as-is and everything collected before it is
/// dropped.
///
/// # Example
/// ```
/// use playground_common::sequence::try_filter;
///
/// let parsed = try_filter(&["1", "22", "333"], |s| s.parse::<u32>().map(|n| n > 5));
/// assert_eq!(parsed, Ok(vec!["22", "333"]));
///
/// let failed = try_filter(&["1", "two"], |s| s.parse::<u32>().map(|n| n > 0));
/// assert!(failed.is_err());
/// ```
pub fn try_filter<T: Clone, E, P>(seq: &[T], predicate: P) -> Result<Vec<T>, E>
where
    P: Fn(&T) -> Result<bool, E>,
{
    let mut kept = Vec::new();
    for x in seq {
        if predicate(x)? {
            kept.push(x.clone());
        }
    }
    Ok(kept)
}

/// Strict left fold: `combine(...combine(combine(initial, s[0]), s[1])..., s[n-1])`.
///
/// Order matters because `combine` need not be commutative.
///
/// # Example
/// ```
/// use playground_common::sequence::reduce;
/// let digits = reduce(&[0, 1, 1, 2, 3, 5], String::new(), |s, n| s + &n.to_string());
/// assert_eq!(digits, "011235");
/// ```
pub fn reduce<T, R, F>(seq: &[T], initial: R, combine: F) -> R
where
    F: Fn(R, &T) -> R,
{
    seq.iter().fold(initial, combine)
}

/// Left fold that stops at the first error returned by `combine`.
pub fn try_reduce<T, R, E, F>(seq: &[T], initial: R, combine: F) -> Result<R, E>
where
    F: Fn(R, &T) -> Result<R, E>,
{
    seq.iter().try_fold(initial, combine)
}

/// Maps each element to a sequence and concatenates the results, one level deep.
///
/// # Example
/// ```
/// use playground_common::sequence::flat_map;
/// let result = flat_map(&[1, 2, 3], |x| vec![*x, *x * 10]);
/// assert_eq!(result, vec![1, 10, 2, 20, 3, 30]);
/// ```
pub fn flat_map<T, U, I, F>(seq: &[T], transform: F) -> Vec<U>
where
    F: Fn(&T) -> I,
    I: IntoIterator<Item = U>,
{
    seq.iter().flat_map(transform).collect()
}

/// Runs `action` once per element, in order.
///
/// A `return` inside the closure only ends that one call; iteration carries
/// on with the next element. Use [`for_each_until`] to stop early.
///
/// # Example
/// ```
/// use playground_common::sequence::for_each;
///
/// let mut seen = Vec::new();
/// for_each(&[1, 2, 3, 4, 5], |n| {
///     seen.push(*n);
///     if *n > 2 {
///         return;
///     }
/// });
/// assert_eq!(seen, vec![1, 2, 3, 4, 5]);
/// ```
pub fn for_each<T, F>(seq: &[T], mut action: F)
where
    F: FnMut(&T),
{
    for x in seq {
        action(x);
    }
}

/// Runs `action` in order until it returns `ControlFlow::Break`.
///
/// Returns how many elements were visited, including the one that broke.
///
/// # Example
/// ```
/// use std::ops::ControlFlow;
/// use playground_common::sequence::for_each_until;
///
/// let visited = for_each_until(&[1, 2, 3, 4, 5], |n| {
///     if *n > 2 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
/// });
/// assert_eq!(visited, 3);
/// ```
pub fn for_each_until<T, F>(seq: &[T], mut action: F) -> usize
where
    F: FnMut(&T) -> ControlFlow<()>,
{
    let mut visited = 0;
    for x in seq {
        visited += 1;
        if action(x).is_break() {
            break;
        }
    }
    visited
}

/// Returns the last element matching `predicate`, scanning from the back.
///
/// Works on anything double-ended, so a lazy range stops as soon as the
/// match nearest the end is found.
///
/// # Example
/// ```
/// use playground_common::sequence::last_where;
///
/// let names = ["Paula", "Elena", "Zoe"];
/// assert_eq!(last_where(&names, |n| n.ends_with('a')), Some(&"Elena"));
/// assert_eq!(last_where(&names, |n| n.starts_with('X')), None);
///
/// assert_eq!(last_where(0..1_000_000_000u64, |n| n % 7 == 0), Some(999_999_994));
/// ```
pub fn last_where<I, P>(seq: I, predicate: P) -> Option<I::Item>
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
    P: FnMut(&I::Item) -> bool,
{
    seq.into_iter().rev().find(predicate)
}

/// Like [`reduce`], but returns every running total instead of only the last.
///
/// # Example
/// ```
/// use playground_common::sequence::accumulate;
/// assert_eq!(accumulate(&[1, 2, 3, 4], 0, |a, b| a + b), vec![1, 3, 6, 10]);
/// ```
pub fn accumulate<T, R, F>(seq: &[T], initial: R, combine: F) -> Vec<R>
where
    R: Clone,
    F: Fn(R, &T) -> R,
{
    let mut totals = Vec::with_capacity(seq.len());
    let mut running = initial;
    for x in seq {
        running = combine(running, x);
        totals.push(running.clone());
    }
    totals
}

/// True when no element is a counter-example. Stops at the first one found.
///
/// # Example
/// ```
/// use playground_common::sequence::all_matching;
/// assert!(all_matching(&[2, 4, 6], |n| n % 2 == 0));
/// assert!(!all_matching(&[2, 3, 6], |n| n % 2 == 0));
/// assert!(all_matching::<i32, _>(&[], |_| false));
/// ```
pub fn all_matching<T, P>(seq: &[T], predicate: P) -> bool
where
    P: Fn(&T) -> bool,
{
    !seq.iter().any(|x| !predicate(x))
}

/// `map` written as a fold. Rebuilds the vector at every step, so it is O(n²).
pub fn map_via_reduce<T, U: Clone, F>(seq: &[T], transform: F) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    reduce(seq, Vec::new(), |acc: Vec<U>, x| {
        [acc, vec![transform(x)]].concat()
    })
}

/// `filter` written as a fold. O(n²) for the same reason as [`map_via_reduce`].
pub fn filter_via_reduce<T: Clone, P>(seq: &[T], predicate: P) -> Vec<T>
where
    P: Fn(&T) -> bool,
{
    reduce(seq, Vec::new(), |acc: Vec<T>, x| {
        if predicate(x) {
            [acc, vec![x.clone()]].concat()
        } else {
            acc
        }
    })
}

/// Checked indexing.
///
/// # Example
/// ```
/// use playground_common::error::CollectionError;
/// use playground_common::sequence::element_at;
///
/// assert_eq!(element_at(&['a', 'b', 'c'], 1), Ok(&'b'));
/// assert_eq!(
///     element_at(&['a', 'b', 'c'], 5),
///     Err(CollectionError::IndexOutOfRange { index: 5, len: 3 })
/// );
/// ```
pub fn element_at<T>(seq: &[T], index: usize) -> Result<&T, CollectionError> {
    seq.get(index).ok_or(CollectionError::IndexOutOfRange {
        index,
        len: seq.len(),
    })
}

/// Checked sub-slice. The result borrows from `seq`; nothing is copied.
///
/// # Example
/// ```
/// use playground_common::sequence::slice;
///
/// let fibs = [0, 1, 1, 2, 3, 5];
/// assert_eq!(slice(&fibs, 1..fibs.len()), Ok(&[1, 1, 2, 3, 5][..]));
/// assert!(slice(&fibs, 4..9).is_err());
/// ```
pub fn slice<T>(seq: &[T], range: Range<usize>) -> Result<&[T], CollectionError> {
    let len = seq.len();
    seq.get(range.clone()).ok_or(CollectionError::InvalidRange {
        start: range.start,
        end: range.end,
        len,
    })
}

/// All but the first element. Empty input gives an empty slice.
#[inline]
pub fn drop_first<T>(seq: &[T]) -> &[T] {
    if seq.is_empty() { &[] } else { &seq[1..] }
}

/// All but the last `n` elements. Dropping more than there are gives an empty slice.
#[inline]
pub fn drop_last<T>(seq: &[T], n: usize) -> &[T] {
    &seq[..seq.len().saturating_sub(n)]
}

/// Index of the first element matching `predicate`.
pub fn position_where<T, P>(seq: &[T], predicate: P) -> Option<usize>
where
    P: Fn(&T) -> bool,
{
    seq.iter().position(|x| predicate(x))
}

/// Method-call forms of the sequence helpers.
///
/// # Example
/// ```
/// use playground_common::sequence::SequenceExt;
///
/// let names = vec!["Paula", "Elena", "Zoe"];
/// assert_eq!(names.last_where(|n| n.ends_with('a')), Some(&"Elena"));
/// assert_eq!([1, 2, 3, 4].accumulate(0, |a, b| a + b), vec![1, 3, 6, 10]);
/// assert_eq!([1, 1, 2, 1].unique(), vec![1, 2]);
/// ```
pub trait SequenceExt<T> {
    fn last_where<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool;

    fn accumulate<R, F>(&self, initial: R, combine: F) -> Vec<R>
    where
        R: Clone,
        F: Fn(R, &T) -> R;

    fn all_matching<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool;

    fn unique(&self) -> Vec<T>
    where
        T: Eq + Hash + Clone;
}

impl<T> SequenceExt<T> for [T] {
    fn last_where<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        last_where(self, |x: &&T| predicate(*x))
    }

    fn accumulate<R, F>(&self, initial: R, combine: F) -> Vec<R>
    where
        R: Clone,
        F: Fn(R, &T) -> R,
    {
        accumulate(self, initial, combine)
    }

    fn all_matching<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        all_matching(self, predicate)
    }

    fn unique(&self) -> Vec<T>
    where
        T: Eq + Hash + Clone,
    {
        crate::unique::unique(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_map_preserves_length_and_order() {
        let words = vec!["a", "bb", "ccc"];
        assert_eq!(map(&words, |w| w.len()), vec![1, 2, 3]);
        assert!(map(&[] as &[i32], |x| x * 2).is_empty());
    }

    #[test]
    fn test_filter_identity_and_empty() {
        let list = vec![3, 1, 4, 1, 5];
        assert_eq!(filter(&list, |_| true), list);
        assert!(filter(&list, |_| false).is_empty());
        assert_eq!(filter(&list, |x| *x > 2), vec![3, 4, 5]);
    }

    #[test]
    fn test_try_filter_stops_at_first_error() {
        let calls = Cell::new(0);
        let result: Result<Vec<i32>, String> = try_filter(&[1, 2, 3, 4], |x| {
            calls.set(calls.get() + 1);
            if *x == 3 {
                Err(format!("bad element {x}"))
            } else {
                Ok(true)
            }
        });
        assert_eq!(result, Err("bad element 3".to_string()));
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_reduce_is_a_left_fold() {
        assert_eq!(reduce(&[] as &[i32], 42, |acc, x| acc + x), 42);

        let order = reduce(&["a", "b", "c"], String::from(">"), |acc, x| acc + x);
        assert_eq!(order, ">abc");

        let sum = reduce(&[0, 1, 1, 2, 3, 5], 0, |total, n| total + n);
        assert_eq!(sum, 12);
    }

    #[test]
    fn test_try_reduce() {
        let ok: Result<i32, &str> = try_reduce(&[1, 2, 3], 0, |acc, x| Ok(acc + x));
        assert_eq!(ok, Ok(6));

        let overflow = try_reduce(&[100u8, 100, 100], 0u8, |acc, x| {
            acc.checked_add(*x).ok_or("overflow")
        });
        assert_eq!(overflow, Err("overflow"));
    }

    #[test]
    fn test_flat_map_one_level() {
        let nested = vec![vec![1, 2], vec![3], vec![]];
        assert_eq!(flat_map(&nested, |v| v.clone()), vec![1, 2, 3]);

        let deeper = vec![vec![vec![1], vec![2]], vec![vec![3]]];
        let once = flat_map(&deeper, |v| v.clone());
        assert_eq!(once, vec![vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn test_for_each_early_return_only_skips_current_call() {
        let mut before = Vec::new();
        let mut after = Vec::new();
        for_each(&[1, 2, 3, 4, 5, 6, 7, 8, 9], |n| {
            before.push(*n);
            if *n > 2 {
                return;
            }
            after.push(*n);
        });
        assert_eq!(before, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(after, vec![1, 2]);
    }

    #[test]
    fn test_for_each_until_breaks() {
        let mut seen = Vec::new();
        let visited = for_each_until(&[10, 20, 30, 40], |n| {
            seen.push(*n);
            if *n == 20 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(visited, 2);
        assert_eq!(seen, vec![10, 20]);

        assert_eq!(for_each_until(&[1, 2], |_| ControlFlow::Continue(())), 2);
    }

    #[test]
    fn test_last_where_scans_from_the_end() {
        let names = vec!["Paula", "Elena", "Zoe"];
        let checked = Cell::new(0);
        let found = last_where(&names, |n| {
            checked.set(checked.get() + 1);
            n.ends_with('a')
        });
        assert_eq!(found, Some(&"Elena"));
        // Zoe, then Elena; Paula is never looked at.
        assert_eq!(checked.get(), 2);
    }

    #[test]
    fn test_accumulate_running_totals() {
        let totals = accumulate(&[1, 2, 3, 4], 0, |a, b| a + b);
        assert_eq!(totals, vec![1, 3, 6, 10]);
        assert!(accumulate(&[] as &[i32], 0, |a, b| a + b).is_empty());

        let prefixes = accumulate(&['a', 'b', 'c'], String::new(), |mut s, c| {
            s.push(*c);
            s
        });
        assert_eq!(prefixes, vec!["a", "ab", "abc"]);
    }

    #[test]
    fn test_all_matching_short_circuits() {
        let checked = Cell::new(0);
        let result = all_matching(&[2, 3, 6, 8], |n| {
            checked.set(checked.get() + 1);
            n % 2 == 0
        });
        assert!(!result);
        assert_eq!(checked.get(), 2);
    }

    #[test]
    fn test_reduce_based_map_and_filter_agree() {
        let list: Vec<i32> = (1..10).collect();
        assert_eq!(map_via_reduce(&list, |x| x * 3), map(&list, |x| x * 3));
        assert_eq!(
            filter_via_reduce(&list, |x| x % 3 == 0),
            filter(&list, |x| x % 3 == 0)
        );
    }

    #[test]
    fn test_checked_access() {
        let list = vec![1, 2, 3];
        assert_eq!(element_at(&list, 2), Ok(&3));
        assert_eq!(
            element_at(&list, 3),
            Err(CollectionError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(slice(&list, 0..0), Ok(&[] as &[i32]));
        assert_eq!(
            slice(&list, 2..5),
            Err(CollectionError::InvalidRange {
                start: 2,
                end: 5,
                len: 3
            })
        );
    }

    #[test]
    fn test_drop_helpers() {
        let list: Vec<i32> = (1..=10).collect();
        assert_eq!(drop_first(&list), &list[1..]);
        assert_eq!(drop_last(&list, 5), &[1, 2, 3, 4, 5]);
        assert!(drop_last(&list, 50).is_empty());
        assert!(drop_first(&[] as &[i32]).is_empty());
        assert_eq!(position_where(&list, |x| *x == 4), Some(3));
        assert_eq!(position_where(&list, |x| *x == 40), None);
    }

    #[test]
    fn test_sequence_ext_methods() {
        let list = vec![2, 4, 6];
        assert!(list.all_matching(|n| n % 2 == 0));
        assert_eq!(list.last_where(|n| *n < 5), Some(&4));
        assert_eq!(list.accumulate(1, |a, b| a * b), vec![2, 8, 48]);
        assert_eq!(vec![3, 3, 1, 3].unique(), vec![3, 1]);
    }

    #[test]
    fn test_last_where_method_takes_stateful_closures() {
        let names = ["Paula", "Elena", "Zoe"];
        let mut checked = Vec::new();
        let found = names.last_where(|n| {
            checked.push(*n);
            n.ends_with('a')
        });
        assert_eq!(found, Some(&"Elena"));
        assert_eq!(checked, vec!["Zoe", "Elena"]);
    }
}
