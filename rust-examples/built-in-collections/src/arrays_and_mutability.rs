//! Arrays and mutability
//!
//! Copying a value-semantics array gives an independent array; copying a
//! handle to a shared buffer gives another view of the same buffer. Here the
//! two behaviours are two different types, [`OwnedSeq`] and [`SharedSeq`],
//! and the aliasing case needs an explicit `alias()` call.
//!
//! The second half shows that an index is rarely needed: dropping a prefix
//! or suffix, numbering elements and finding a position all have direct
//! helpers.

use playground_common::error::Result;
use playground_common::sequence::{drop_first, drop_last, filter, map, position_where};
use playground_common::{OwnedSeq, SharedSeq, Transcript};

/// `y` starts as a copy of `x`; appending to `y` leaves `x` alone.
///
/// Returns `(x, y)` after the append.
pub fn value_copy() -> (OwnedSeq<i32>, OwnedSeq<i32>) {
    let x: OwnedSeq<i32> = OwnedSeq::from(vec![1, 2, 3]);
    let mut y = x.clone();
    y.push(4);
    (x, y)
}

/// `b` is an alias of `a`; inserting through `a` shows up in `b`.
pub fn aliased_mutation() -> Result<Vec<i32>> {
    let a = SharedSeq::new(vec![1, 2, 3]);
    let b = a.alias();
    a.insert(3, 4)?;
    Ok(b.snapshot())
}

/// `d` is detached from `c`; inserting through `c` does not reach `d`.
pub fn detached_copy() -> Result<Vec<i32>> {
    let c = SharedSeq::new(vec![1, 2, 3]);
    let d = c.detach();
    c.insert(3, 4)?;
    Ok(d.snapshot())
}

/// "index: i - element: x" for every element.
pub fn numbered<T: std::fmt::Display>(items: &[T]) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .map(|(index, element)| format!("index: {index} - element: {element}"))
        .collect()
}

pub fn tour() -> Transcript {
    let mut t = Transcript::new("Arrays and Mutability");

    let (x, y) = value_copy();
    t.record("x after y.push(4)", &x.iter().collect::<Vec<_>>());
    t.record("y after y.push(4)", &y.iter().collect::<Vec<_>>());
    t.record("x.get(3)", &x.get(3));
    t.record("y.get(3)", &y.get(3));

    match aliased_mutation() {
        Ok(b) => t.record("alias b after a.insert(4)", &b),
        Err(e) => t.record("alias b after a.insert(4)", &e),
    };
    match detached_copy() {
        Ok(d) => t.record("detached d after c.insert(4)", &d),
        Err(e) => t.record("detached d after c.insert(4)", &e),
    };

    let arr: Vec<i32> = (1..=10).collect();
    t.record("drop first", &drop_first(&arr));
    t.record("drop last 5", &drop_last(&arr, 5));
    t.record("numbered", &numbered(&arr[..3]));
    t.record("index of 4", &position_where(&arr, |x| *x == 4));
    t.record("add one", &map(&arr, |x| x + 1));
    t.record("evens", &filter(&arr, |x| x % 2 == 0));
    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_value_copy_is_independent() {
        let (x, y) = value_copy();
        assert_eq!(x.to_vec(), vec![1, 2, 3]);
        assert_eq!(y.to_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_alias_sees_change_detached_does_not() {
        assert_eq!(aliased_mutation(), Ok(vec![1, 2, 3, 4]));
        assert_eq!(detached_copy(), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn test_numbered() {
        assert_eq!(
            numbered(&['a', 'b']),
            vec!["index: 0 - element: a", "index: 1 - element: b"]
        );
    }

    #[test]
    fn test_tour_records() {
        let t = tour();
        assert_eq!(t.value_of("drop last 5"), Some("[1, 2, 3, 4, 5]"));
        assert_eq!(t.value_of("index of 4"), Some("Some(3)"));
        assert_eq!(t.value_of("x after y.push(4)"), Some("[1, 2, 3]"));
        assert_eq!(t.value_of("x.get(3)"), Some("None"));
        assert_eq!(t.value_of("y.get(3)"), Some("Some(4)"));
        assert_eq!(
            t.value_of("alias b after a.insert(4)"),
            Some("[1, 2, 3, 4]")
        );
        assert_eq!(
            t.value_of("detached d after c.insert(4)"),
            Some("[1, 2, 3]")
        );
    }
}
