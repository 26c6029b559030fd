//! Slices
//!
//! A range subscript gives back a slice: a borrowed view into the original
//! array, so nothing is copied. Turning it back into an owned vector is an
//! explicit `to_vec()`.

use playground_common::Transcript;
use playground_common::error::Result;
use playground_common::sequence::slice;

pub static FIBS: [u64; 6] = [0, 1, 1, 2, 3, 5];

/// Everything after the first element, borrowed from `fibs`.
pub fn tail(fibs: &[u64]) -> Result<&[u64]> {
    slice(fibs, 1..fibs.len())
}

/// Copies a slice back into an owned vector.
pub fn reconstruct<T: Clone>(view: &[T]) -> Vec<T> {
    view.to_vec()
}

pub fn tour() -> Transcript {
    let mut t = Transcript::new("Slices");
    match tail(&FIBS) {
        Ok(view) => {
            t.record("fibs[1..]", &view);
            t.record("reconstructed", &reconstruct(view));
        }
        Err(e) => {
            t.record("fibs[1..]", &e);
        }
    }
    t.record("fibs[4..9]", &slice(&FIBS, 4..9));
    t
}
