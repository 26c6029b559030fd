//! Built-in collections: arrays, dictionaries and sets
//!
//! Each module is one playground lesson:
//! - Value vs. reference semantics for arrays
//! - Slices as borrowed views
//! - The functional toolkit: map, filter, reduce, flat_map, for_each
//! - Dictionaries with a sum-typed value, merging and mapping values
//! - Custom hashable keys
//! - Sets, set algebra and order-preserving uniqueness

// Modules
pub mod array_slice; // Slices
pub mod arrays_and_mutability; // Arrays and Mutability
pub mod dictionaries; // Dictionaries
pub mod filter; // Filter
pub mod flat_map; // FlatMap
pub mod for_each; // forEach
pub mod hashable; // Hashable Keys
pub mod map; // Map
pub mod reduce; // Reduce
pub mod sets; // Sets

use playground_common::Transcript;

/// Every lesson in this crate, in teaching order.
pub fn tours() -> Vec<Transcript> {
    vec![
        arrays_and_mutability::tour(),
        array_slice::tour(),
        map::tour(),
        filter::tour(),
        reduce::tour(),
        flat_map::tour(),
        for_each::tour(),
        dictionaries::tour(),
        hashable::tour(),
        sets::tour(),
    ]
}
