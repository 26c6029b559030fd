//! forEach
//!
//! `for_each` is handy when the work per element is a single call. The catch:
//! the body is a closure, so `return` inside it leaves the closure, not the
//! loop. Every element is still visited. To stop early, say so with
//! `ControlFlow::Break` through `for_each_until`, or use a plain `for` loop.

use std::ops::ControlFlow;

use playground_common::Transcript;
use playground_common::sequence::{for_each, for_each_until};

/// Collects what a `for_each` body observes, in order.
pub fn visit_all(numbers: &[i32]) -> Vec<i32> {
    let mut visited = Vec::new();
    for_each(numbers, |n| visited.push(*n));
    visited
}

/// Tries to "return" once a number exceeds 2.
///
/// Returns `(visited, reached_end_of_body)`: every number is visited, and
/// only 1 and 2 get past the `return`.
pub fn early_return_pitfall(numbers: &[i32]) -> (Vec<i32>, Vec<i32>) {
    let mut visited = Vec::new();
    let mut reached_end = Vec::new();
    for_each(numbers, |n| {
        visited.push(*n);
        if *n > 2 {
            return;
        }
        reached_end.push(*n);
    });
    (visited, reached_end)
}

/// The intended behaviour: stop after the first number above 2.
pub fn stop_after_first_above_two(numbers: &[i32]) -> Vec<i32> {
    let mut visited = Vec::new();
    for_each_until(numbers, |n| {
        visited.push(*n);
        if *n > 2 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    visited
}

pub fn tour() -> Transcript {
    let mut t = Transcript::new("forEach");
    let one_to_nine: Vec<i32> = (1..10).collect();

    t.record("visited [1, 2, 3]", &visit_all(&[1, 2, 3]));
    let (visited, reached_end) = early_return_pitfall(&one_to_nine);
    t.record("visited despite return", &visited);
    t.record("got past the return", &reached_end);
    let stopped = stop_after_first_above_two(&one_to_nine);
    t.record("with ControlFlow::Break", &stopped);
    t
}
