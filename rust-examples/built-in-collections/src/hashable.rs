//! Hashable keys
//!
//! A map places each key by its hash, so a custom key type needs `Hash` and
//! `Eq` that agree: equal values must hash the same. The reverse does not
//! hold; different values may share a hash and the map resolves the
//! collision.
//!
//! XOR-ing field hashes is a tempting combiner, but `a ^ b == b ^ a`, so
//! values that differ only by swapping two same-typed fields always collide.
//! Rotating before XOR-ing breaks the symmetry. The standard `Hasher` avoids
//! the problem entirely by feeding fields in order.
//!
//! Keys should also not change while they sit in a map. A key mutated through
//! interior mutability ends up in the wrong bucket and can no longer be found.

use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use playground_common::Transcript;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

#[derive(Debug, Clone)]
pub struct Person {
    pub name: String,
    pub zip_code: u32,
    pub birthday: Birthday,
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.zip_code == other.zip_code
            && self.birthday == other.birthday
    }
}

impl Eq for Person {}

// Must hash exactly the fields compared in `eq`.
impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.zip_code.hash(state);
        self.birthday.hash(state);
    }
}

/// Two same-typed fields: the case where XOR combining goes wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

pub fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

pub fn xor_hash(span: &Span) -> u64 {
    hash_of(&span.start) ^ hash_of(&span.end)
}

pub fn rotating_hash(span: &Span) -> u64 {
    hash_of(&span.start).rotate_left(5) ^ hash_of(&span.end)
}

pub fn sample_people() -> Vec<Person> {
    vec![
        Person {
            name: "Ada".to_string(),
            zip_code: 10115,
            birthday: Birthday {
                year: 1815,
                month: 12,
                day: 10,
            },
        },
        Person {
            name: "Alan".to_string(),
            zip_code: 94043,
            birthday: Birthday {
                year: 1912,
                month: 6,
                day: 23,
            },
        },
    ]
}

/// Builds a phone book keyed by `Person`.
pub fn phone_book(people: &[Person]) -> HashMap<Person, String> {
    people
        .iter()
        .enumerate()
        .map(|(i, p)| (p.clone(), format!("555-010{i}")))
        .collect()
}

pub fn tour() -> Transcript {
    let mut t = Transcript::new("Hashable");
    let people = sample_people();
    let book = phone_book(&people);

    let lookup_copy = people[0].clone();
    t.record("lookup with an equal copy", &book.get(&lookup_copy));
    let same_hash = hash_of(&people[0]) == hash_of(&lookup_copy);
    t.record("equal values hash alike", &same_hash);

    let forward = Span { start: 1, end: 2 };
    let backward = Span { start: 2, end: 1 };
    let xor_collides = xor_hash(&forward) == xor_hash(&backward);
    let rotate_collides = rotating_hash(&forward) == rotating_hash(&backward);
    let derived_collides = hash_of(&forward) == hash_of(&backward);
    t.record("xor: swapped fields collide", &xor_collides);
    t.record("rotate: swapped fields collide", &rotate_collides);
    t.record("derived: swapped fields collide", &derived_collides);
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_people_hash_equally() {
        let people = sample_people();
        let copy = people[1].clone();
        assert_eq!(people[1], copy);
        assert_eq!(hash_of(&people[1]), hash_of(&copy));
    }

    #[test]
    fn test_phone_book_lookup() {
        let people = sample_people();
        let book = phone_book(&people);
        assert_eq!(book.get(&people[0]).map(String::as_str), Some("555-0100"));

        let mut stranger = people[0].clone();
        stranger.zip_code += 1;
        assert_eq!(book.get(&stranger), None);
    }

    #[test]
    fn test_xor_is_symmetric() {
        let a = Span { start: 7, end: 9 };
        let b = Span { start: 9, end: 7 };
        assert_ne!(a, b);
        assert_eq!(xor_hash(&a), xor_hash(&b));
        assert_ne!(rotating_hash(&a), rotating_hash(&b));
    }

    #[test]
    fn test_xor_of_equal_fields_is_zero() {
        let degenerate = Span { start: 4, end: 4 };
        assert_eq!(xor_hash(&degenerate), 0);
    }
}
