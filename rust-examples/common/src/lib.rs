//! # Playground Common
//!
//! The reusable core behind the playground crates: functional collection
//! helpers plus the small types the lessons share.
//!
//! ## Modules
//!
//! - [`sequence`]: map, filter, reduce, flat_map, for_each, last_where,
//!   accumulate, all_matching and checked indexing over slices
//! - [`unique`]: order-preserving deduplication, eager and lazy
//! - [`mapping`]: merging, building and transforming `HashMap`s
//! - [`settings`]: the `Setting` sum type and a persistent layered settings map
//! - [`shared`]: value-semantics vs. reference-semantics sequences
//! - [`transcript`]: what a lesson records instead of printing
//! - [`error`]: caller-contract violations
//!
//! ## Design Principles
//!
//! 1. **Pure**: operations build fresh outputs; inputs are borrowed, not mutated
//!    (the in-place `merge_into` says so in its signature)
//! 2. **Absence is not failure**: misses are `Option`, contract violations `Result`
//! 3. **Explicit sharing**: aliasing a mutable buffer is always a named call

pub mod error;
pub mod mapping;
pub mod sequence;
pub mod settings;
pub mod shared;
pub mod transcript;
pub mod unique;

// Re-export main types for convenience
pub use error::{CollectionError, Result};
pub use sequence::SequenceExt;
pub use settings::{Setting, Settings};
pub use shared::{OwnedSeq, SharedSeq};
pub use transcript::Transcript;
pub use unique::UniqueExt;
