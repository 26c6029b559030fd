//! Optionals
//!
//! `Option<T>` makes "no value" a state the type system tracks instead of a
//! sentinel value that callers must remember to check:
//! - Loops that run while a value is present
//! - Optionals nested inside collections (and inside other optionals)
//! - Computed properties that may have nothing to return

// Modules
pub mod extension; // Optional-returning helpers
pub mod iteration; // while-let loops
pub mod nested; // Doubly wrapped optionals

use playground_common::Transcript;

pub fn tours() -> Vec<Transcript> {
    vec![iteration::tour(), nested::tour(), extension::tour()]
}
