//! # Order-Preserving Deduplication
//!
//! A `HashSet` of already-seen values turns "keep the first occurrence of
//! each value" into a single linear pass, instead of comparing every pair.

use std::collections::HashSet;
use std::hash::Hash;

/// Returns each distinct value once, in order of first occurrence.
///
/// # Example
/// ```
/// use playground_common::unique::unique;
/// let deduped = unique(&[1, 2, 3, 12, 1, 3, 4, 5, 6, 4, 6]);
/// assert_eq!(deduped, vec![1, 2, 3, 12, 4, 5, 6]);
/// ```
pub fn unique<T>(seq: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen: HashSet<&T> = HashSet::with_capacity(seq.len());
    seq.iter().filter(|x| seen.insert(*x)).cloned().collect()
}

/// Lazy iterator adapter yielding the first occurrence of each value.
///
/// Created by [`UniqueExt::first_occurrences`].
pub struct FirstOccurrences<I: Iterator> {
    iter: I,
    seen: HashSet<I::Item>,
}

impl<I> Iterator for FirstOccurrences<I>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let seen = &mut self.seen;
        self.iter.find(|item| seen.insert(item.clone()))
    }
}

/// Adds [`first_occurrences`](UniqueExt::first_occurrences) to every iterator.
///
/// # Example
/// ```
/// use playground_common::unique::UniqueExt;
///
/// // Works on an endless producer as long as only a prefix is taken.
/// let firsts: Vec<u32> = (0..).map(|n| n % 4).first_occurrences().take(4).collect();
/// assert_eq!(firsts, vec![0, 1, 2, 3]);
/// ```
pub trait UniqueExt: Iterator + Sized {
    fn first_occurrences(self) -> FirstOccurrences<Self>
    where
        Self::Item: Eq + Hash + Clone,
    {
        FirstOccurrences {
            iter: self,
            seen: HashSet::new(),
        }
    }
}

impl<I: Iterator> UniqueExt for I {}
