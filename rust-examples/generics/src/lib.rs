//! Generics
//!
//! - One name implemented per type through a trait (`overloading`)
//! - Which function runs is chosen from the static type (`dispatch`)

// Modules
pub mod dispatch; // Static dispatch
pub mod overloading; // Overloading through traits

use playground_common::Transcript;

pub fn tours() -> Vec<Transcript> {
    vec![overloading::tour(), dispatch::tour()]
}
