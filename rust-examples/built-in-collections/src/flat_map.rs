//! FlatMap
//!
//! When the transform itself returns a sequence, `map` leaves a sequence of
//! sequences to be joined afterwards. `flat_map` does both in one step. Nesting
//! a `map` inside a `flat_map` pairs up the elements of two sequences.

use playground_common::Transcript;
use playground_common::sequence::{flat_map, map};

pub const FILES: [&str; 3] = ["File1", "File2", "File3"];
pub const SUITS: [&str; 4] = ["♠", "♥", "♣", "♦"];
pub const RANKS: [&str; 4] = ["J", "Q", "K", "A"];

/// Stand-in link extractor: every file links to three pages.
pub fn extract_links(markdown_file: &str) -> Vec<String> {
    (1..=3)
        .map(|n| format!("{markdown_file}/Link{n}"))
        .collect()
}

pub fn nested_links(files: &[&str]) -> Vec<Vec<String>> {
    map(files, |file| extract_links(file))
}

pub fn joined_links(files: &[&str]) -> Vec<String> {
    nested_links(files).concat()
}

pub fn links(files: &[&str]) -> Vec<String> {
    flat_map(files, |file| extract_links(file))
}

/// Every (suit, rank) combination, suits outermost.
pub fn deck<'a>(suits: &[&'a str], ranks: &[&'a str]) -> Vec<(&'a str, &'a str)> {
    flat_map(suits, |suit| map(ranks, |rank| (*suit, *rank)))
}

pub fn tour() -> Transcript {
    let mut t = Transcript::new("FlatMap");
    t.record("nested", &nested_links(&FILES));
    t.record("joined", &joined_links(&FILES));
    t.record("flat_map", &links(&FILES));
    let cards = deck(&SUITS, &RANKS);
    t.record("deck size", &cards.len());
    t.record("first cards", &&cards[..4]);
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_map_equals_map_then_join() {
        assert_eq!(links(&FILES), joined_links(&FILES));
        assert_eq!(links(&FILES).len(), 9);
        assert_eq!(links(&FILES)[3], "File2/Link1");
    }

    #[test]
    fn test_nested_keeps_structure() {
        let nested = nested_links(&["a", "b"]);
        assert_eq!(nested.len(), 2);
        assert_eq!(nested[1], vec!["b/Link1", "b/Link2", "b/Link3"]);
    }

    #[test]
    fn test_deck() {
        let cards = deck(&SUITS, &RANKS);
        assert_eq!(cards.len(), 16);
        assert_eq!(cards[0], ("♠", "J"));
        assert_eq!(cards[5], ("♥", "Q"));
        assert_eq!(cards[15], ("♦", "A"));
        assert!(deck(&[], &RANKS).is_empty());
    }
}
