//! # Owned and Shared Sequences
//!
//! Two ways to hold a sequence, chosen explicitly:
//!
//! - [`OwnedSeq`] has value semantics. Cloning is O(1) because storage is
//!   structurally shared (`im::Vector`), but a clone behaves as an
//!   independent copy: pushing to one never shows up in the other.
//! - [`SharedSeq`] has reference semantics. Every handle from
//!   [`alias`](SharedSeq::alias) sees the same storage; an independent copy
//!   requires [`detach`](SharedSeq::detach). It deliberately does not
//!   implement `Clone`, so aliasing is always spelled out.
//!
//! ## Example
//!
//! ```
//! use playground_common::shared::{OwnedSeq, SharedSeq};
//!
//! let x: OwnedSeq<i32> = OwnedSeq::from(vec![1, 2, 3]);
//! let mut y = x.clone();
//! y.push(4);
//! assert_eq!(x.to_vec(), vec![1, 2, 3]);
//! assert_eq!(y.to_vec(), vec![1, 2, 3, 4]);
//!
//! let a = SharedSeq::new(vec![1, 2, 3]);
//! let b = a.alias();
//! a.push(4).unwrap();
//! assert_eq!(b.snapshot(), vec![1, 2, 3, 4]);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use im::Vector;

use crate::error::{CollectionError, Result};

/// A sequence with value semantics and copy-on-write storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedSeq<T: Clone> {
    items: Vector<T>,
}

impl<T: Clone> Default for OwnedSeq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> OwnedSeq<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vector::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn push(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Removes and returns the last element, or `None` when empty.
    pub fn pop_last(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    /// Inserts `value` at `index`, shifting later elements right.
    ///
    /// `index == len()` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.items.len();
        if index > len {
            return Err(CollectionError::IndexOutOfRange { index, len });
        }
        self.items.insert(index, value);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T: Clone> From<Vec<T>> for OwnedSeq<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items: Vector::from(items),
        }
    }
}

impl<T: Clone> FromIterator<T> for OwnedSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// A sequence with reference semantics: handles share one mutable buffer.
///
/// Mutating while a borrow is outstanding returns
/// [`CollectionError::Borrowed`] instead of panicking.
#[derive(Debug)]
pub struct SharedSeq<T> {
    items: Rc<RefCell<Vec<T>>>,
}

impl<T> SharedSeq<T> {
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: Rc::new(RefCell::new(items)),
        }
    }

    /// Another handle to the same storage.
    #[must_use]
    pub fn alias(&self) -> Self {
        Self {
            items: Rc::clone(&self.items),
        }
    }

    /// True when more than one handle points at this storage.
    #[must_use]
    pub fn is_aliased(&self) -> bool {
        Rc::strong_count(&self.items) > 1
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    pub fn push(&self, value: T) -> Result<()> {
        let mut items = self
            .items
            .try_borrow_mut()
            .map_err(|_| CollectionError::Borrowed)?;
        items.push(value);
        Ok(())
    }

    /// Inserts `value` at `index`; `index == len()` appends.
    pub fn insert(&self, index: usize, value: T) -> Result<()> {
        let mut items = self
            .items
            .try_borrow_mut()
            .map_err(|_| CollectionError::Borrowed)?;
        let len = items.len();
        if index > len {
            return Err(CollectionError::IndexOutOfRange { index, len });
        }
        items.insert(index, value);
        Ok(())
    }

    /// Runs `f` with a read-only view of the current contents.
    pub fn with_items<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.items.borrow())
    }
}

impl<T: Clone> SharedSeq<T> {
    /// An independent copy: later changes to either side stay on that side.
    #[must_use]
    pub fn detach(&self) -> Self {
        Self::new(self.snapshot())
    }

    /// The current contents, copied out.
    #[must_use]
    pub fn snapshot(&self) -> Vec<T> {
        self.items.borrow().clone()
    }

    #[must_use]
    pub fn to_owned_seq(&self) -> OwnedSeq<T> {
        OwnedSeq::from(self.snapshot())
    }
}
