//! # Mapping Operations
//!
//! Helpers for building and combining `HashMap`s from key/value pairs.
//!
//! ## Key contract
//!
//! Keys must uphold the usual `Eq`/`Hash` agreement: equal keys hash
//! equally. Equal hashes do not imply equal keys; collisions are resolved
//! by the map. Changing the hash-relevant parts of a key while it is stored
//! (through interior mutability, say) leaves the map unable to find it, and
//! is not detected here.
//!
//! ## Example
//!
//! ```
//! use std::collections::HashMap;
//! use playground_common::mapping::{map_from_pairs, map_values, merge_into};
//!
//! let mut settings = map_from_pairs([("volume", 3), ("brightness", 7)]);
//! merge_into(&mut settings, [("volume", 10)]);
//!
//! let doubled = map_values(&settings, |v| v * 2);
//! assert_eq!(doubled, HashMap::from([("volume", 20), ("brightness", 14)]));
//! ```

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use log::trace;

/// Writes every `(key, value)` of `source` into `target`, overwriting
/// existing entries. Returns how many keys were already present.
///
/// # Example
/// ```
/// use std::collections::HashMap;
/// use playground_common::mapping::merge_into;
///
/// let mut defaults = HashMap::from([("name", "My iPhone"), ("mode", "airplane")]);
/// let overwritten = merge_into(&mut defaults, [("name", "Jane's iPhone")]);
///
/// assert_eq!(overwritten, 1);
/// assert_eq!(defaults["name"], "Jane's iPhone");
/// assert_eq!(defaults["mode"], "airplane");
/// ```
pub fn merge_into<K, V, S, I>(target: &mut HashMap<K, V, S>, source: I) -> usize
where
    K: Eq + Hash,
    S: BuildHasher,
    I: IntoIterator<Item = (K, V)>,
{
    let mut overwritten = 0;
    for (key, value) in source {
        if target.insert(key, value).is_some() {
            overwritten += 1;
        }
    }
    trace!(
        "merged into map of {} entries, {overwritten} overwritten",
        target.len()
    );
    overwritten
}

/// Like [`merge_into`], for a source that can fail part-way.
///
/// This is not atomic: entries merged before the first error stay in
/// `target`, and the error is returned unchanged.
///
/// # Example
/// ```
/// use std::collections::HashMap;
/// use playground_common::mapping::try_merge_into;
///
/// let mut target = HashMap::new();
/// let source = vec![Ok(("a", 1)), Err("broken pair"), Ok(("b", 2))];
///
/// assert_eq!(try_merge_into(&mut target, source), Err("broken pair"));
/// assert_eq!(target, HashMap::from([("a", 1)]));
/// ```
pub fn try_merge_into<K, V, S, E, I>(target: &mut HashMap<K, V, S>, source: I) -> Result<usize, E>
where
    K: Eq + Hash,
    S: BuildHasher,
    I: IntoIterator<Item = Result<(K, V), E>>,
{
    let mut overwritten = 0;
    for pair in source {
        let (key, value) = pair?;
        if target.insert(key, value).is_some() {
            overwritten += 1;
        }
    }
    Ok(overwritten)
}

/// Builds a map from pairs. Later duplicates win.
///
/// # Example
/// ```
/// use std::collections::HashMap;
/// use playground_common::mapping::map_from_pairs;
///
/// assert_eq!(map_from_pairs([("a", 1), ("a", 2)]), HashMap::from([("a", 2)]));
/// ```
pub fn map_from_pairs<K, V, I>(pairs: I) -> HashMap<K, V>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, V)>,
{
    let mut map = HashMap::new();
    merge_into(&mut map, pairs);
    map
}

/// Returns a map with the same keys and `transform` applied to each value.
pub fn map_values<K, V, U, S, F>(mapping: &HashMap<K, V, S>, transform: F) -> HashMap<K, U>
where
    K: Eq + Hash + Clone,
    F: Fn(&V) -> U,
{
    map_from_pairs(
        mapping
            .iter()
            .map(|(key, value)| (key.clone(), transform(value))),
    )
}

/// Sets `key` to `value`, returning the value it replaced (if any).
#[inline]
pub fn update_value<K, V, S>(target: &mut HashMap<K, V, S>, key: K, value: V) -> Option<V>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    target.insert(key, value)
}
