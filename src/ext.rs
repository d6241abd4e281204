//! Method syntax for the sequence operations.
//!
//! ```rust
//! use seqmerge::{seq, SequenceExt};
//!
//! let list = seq![1, "a"];
//! assert_eq!(list.merged(&seq![3, 1, 2]), seq![3, 1, 2, "a"]);
//! ```

use crate::boundary::{encode, Token};
use crate::reference_sort::sort_missing_last;
use crate::{merge, merge_nested, merge_strict, Nestable};
use std::hash::Hash;

/// Sequence operations callable as methods on a `Vec`.
pub trait SequenceExt<T> {
    /// See [`merge`](crate::merge).
    fn merged(&self, update: &[T]) -> Vec<T>
    where
        T: Clone + Eq + Hash;

    /// See [`merge_strict`](crate::merge_strict).
    fn merged_strict(&self, update: &mut Vec<T>) -> Vec<T>
    where
        T: Clone + Eq + Hash;

    /// See [`merge_nested`](crate::merge_nested).
    fn merged_nested(&self, update: &[T]) -> Vec<T>
    where
        T: Nestable + Clone + Eq + Hash;

    /// See [`flatten_once`](crate::flatten_once).
    fn flatten_once(&self) -> Vec<T>
    where
        T: Nestable + Clone;

    /// See [`encode`](crate::boundary::encode).
    fn flatten_with_boundaries(&self) -> Vec<Token<T>>
    where
        T: Nestable + Clone;

    /// Sorts by the position of `key_fn(item)` in `reference`; items without
    /// one go last.
    fn sorted_by_reference<K, F>(&self, reference: &[K], key_fn: F) -> Vec<T>
    where
        T: Clone,
        K: Eq + Hash,
        F: Fn(&T) -> Option<K>;

    /// See [`delete_recursive`](crate::delete_recursive).
    fn delete_recursive(&mut self, value: &T) -> Option<T>
    where
        T: Nestable + PartialEq;
}

impl<T> SequenceExt<T> for Vec<T> {
    fn merged(&self, update: &[T]) -> Vec<T>
    where
        T: Clone + Eq + Hash,
    {
        merge(self, update)
    }

    fn merged_strict(&self, update: &mut Vec<T>) -> Vec<T>
    where
        T: Clone + Eq + Hash,
    {
        merge_strict(self, update)
    }

    fn merged_nested(&self, update: &[T]) -> Vec<T>
    where
        T: Nestable + Clone + Eq + Hash,
    {
        merge_nested(self, update)
    }

    fn flatten_once(&self) -> Vec<T>
    where
        T: Nestable + Clone,
    {
        crate::flatten_once(self)
    }

    fn flatten_with_boundaries(&self) -> Vec<Token<T>>
    where
        T: Nestable + Clone,
    {
        encode(self)
    }

    fn sorted_by_reference<K, F>(&self, reference: &[K], key_fn: F) -> Vec<T>
    where
        T: Clone,
        K: Eq + Hash,
        F: Fn(&T) -> Option<K>,
    {
        sort_missing_last(self, reference, key_fn)
    }

    fn delete_recursive(&mut self, value: &T) -> Option<T>
    where
        T: Nestable + PartialEq,
    {
        crate::delete_recursive(self, value)
    }
}
