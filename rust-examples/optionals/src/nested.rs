//! Doubly wrapped optionals
//!
//! Parsing each string of a list gives `Vec<Option<i64>>`. Iterating that
//! with `next()` yields `Option<Option<i64>>`: the outer layer says whether
//! the list has more elements, the inner one whether that element parsed.
//! Pattern matching can pick out either layer.

use playground_common::Transcript;
use playground_common::sequence::map;

pub const STRING_NUMBERS: [&str; 3] = ["1", "2", "three"];

pub fn parse_all(inputs: &[&str]) -> Vec<Option<i64>> {
    map(inputs, |s| s.parse().ok())
}

/// Renders each element, using "No value" for the ones that did not parse.
#[allow(clippy::while_let_on_iterator)]
pub fn describe(maybe_ints: &[Option<i64>]) -> Vec<String> {
    let mut iterator = maybe_ints.iter();
    let mut lines = Vec::new();
    // `next()` is Option<&Option<i64>>; the loop ends on the outer None only.
    while let Some(maybe_int) = iterator.next() {
        lines.push(match maybe_int {
            Some(value) => value.to_string(),
            None => "No value".to_string(),
        });
    }
    lines
}

/// Only the values that are present.
pub fn present(maybe_ints: &[Option<i64>]) -> Vec<i64> {
    maybe_ints.iter().flatten().copied().collect()
}

/// How many elements are absent.
pub fn absent_count(maybe_ints: &[Option<i64>]) -> usize {
    maybe_ints.iter().filter(|m| m.is_none()).count()
}

pub fn tour() -> Transcript {
    let mut t = Transcript::new("Doubly Wrapped Optionals");
    let maybe_ints = parse_all(&STRING_NUMBERS);
    t.record("parsed", &maybe_ints);
    t.record("described", &describe(&maybe_ints));
    t.record("present", &present(&maybe_ints));
    t.record("absent", &absent_count(&maybe_ints));
    t.record("first of next()", &maybe_ints.iter().next());
    t.record("past the end", &maybe_ints.iter().nth(3));
    t
}
