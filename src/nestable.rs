//! Access to the nesting structure of an item.

use crate::Value;

/// An item that may itself be a sequence of items.
///
/// The boundary codec, the nested merge and the deep delete work on any
/// item type implementing this trait. [`Value`] implements it through its
/// `Array` variant.
///
/// # Examples
///
/// ```rust
/// use seqmerge::{value, Nestable, Value};
///
/// let nested = value!([1, 2]);
/// assert_eq!(nested.as_sequence().map(|s| s.len()), Some(2));
/// assert!(Value::from("x").as_sequence().is_none());
/// ```
pub trait Nestable: Sized {
    /// Returns the children if this item is a sequence.
    fn as_sequence(&self) -> Option<&[Self]>;

    /// Returns the children mutably if this item is a sequence.
    fn as_sequence_mut(&mut self) -> Option<&mut Vec<Self>>;

    /// Wraps a sequence of items into a single item.
    fn from_sequence(items: Vec<Self>) -> Self;

    /// Returns `true` if this item is a sequence.
    fn is_sequence(&self) -> bool {
        self.as_sequence().is_some()
    }
}

impl Nestable for Value {
    fn as_sequence(&self) -> Option<&[Self]> {
        self.as_array().map(Vec::as_slice)
    }

    fn as_sequence_mut(&mut self) -> Option<&mut Vec<Self>> {
        self.as_array_mut()
    }

    fn from_sequence(items: Vec<Self>) -> Self {
        Value::Array(items)
    }
}
