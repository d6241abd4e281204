//! Sorting items by the position of their key in a reference order.
//!
//! The key of an item is found in one of three ways:
//!
//! - the item is its own key ([`KeyExtractor::Identity`])
//! - the item is a mapping and the key is one of its fields
//!   ([`KeyExtractor::Field`])
//! - the item is a record type; its serialized form is read by field name
//!   ([`sort_records_by_reference`])
//!
//! Sorting is stable. Keys absent from the reference order have no defined
//! position; by default such items go after all others, in their original
//! relative order. [`SortOptions::strict`] turns them into an error instead.
//!
//! ```rust
//! use seqmerge::{seq, sort_by_reference, KeyExtractor};
//!
//! let sorted = sort_by_reference(
//!     &seq!["two", "one", "three"],
//!     &seq!["one", "two", "three"],
//!     &KeyExtractor::Identity,
//! );
//! assert_eq!(sorted, seq!["one", "two", "three"]);
//! ```

use crate::{to_value, Error, MissingKey, Result, SortOptions, Value};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// How to find the sort key of a [`Value`] item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum KeyExtractor {
    /// The item is the key.
    #[default]
    Identity,
    /// The item is an object; the key is the value of this field.
    Field(String),
}

impl KeyExtractor {
    /// Creates a field extractor.
    pub fn field(name: impl Into<String>) -> Self {
        KeyExtractor::Field(name.into())
    }

    /// Returns the key of `item`, or `None` when the item has no such field.
    #[must_use]
    pub fn extract<'a>(&self, item: &'a Value) -> Option<&'a Value> {
        match self {
            KeyExtractor::Identity => Some(item),
            KeyExtractor::Field(name) => item.get(name),
        }
    }
}

/// Position in the reference order, or the key that has none.
type Rank<K> = std::result::Result<usize, Option<K>>;

fn rank_items<T, K, F>(items: &[T], reference: &[K], key_fn: F) -> Vec<Rank<K>>
where
    K: Eq + Hash,
    F: Fn(&T) -> Option<K>,
{
    let mut positions: HashMap<&K, usize> = HashMap::with_capacity(reference.len());
    for (i, key) in reference.iter().enumerate() {
        positions.entry(key).or_insert(i);
    }

    items
        .iter()
        .map(|item| {
            let key = key_fn(item);
            let position = key.as_ref().and_then(|k| positions.get(k).copied());
            match position {
                Some(position) => Ok(position),
                None => Err(key),
            }
        })
        .collect()
}

fn arrange<T: Clone, K>(items: &[T], ranks: &[Rank<K>]) -> Vec<T> {
    let missing = ranks.iter().filter(|rank| rank.is_err()).count();
    if missing > 0 {
        log::debug!(
            "reference sort: {} of {} items have no reference position, placing them last",
            missing,
            items.len()
        );
    }

    let mut ordered: Vec<(usize, &T)> = items
        .iter()
        .zip(ranks)
        .map(|(item, rank)| match rank {
            Ok(position) => (*position, item),
            Err(_) => (usize::MAX, item),
        })
        .collect();
    ordered.sort_by_key(|(position, _)| *position);
    ordered.into_iter().map(|(_, item)| item.clone()).collect()
}

/// Sorts with missing keys last; never fails.
pub(crate) fn sort_missing_last<T, K, F>(items: &[T], reference: &[K], key_fn: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> Option<K>,
{
    let ranks = rank_items(items, reference, key_fn);
    arrange(items, &ranks)
}

/// Sorts `items` by the position of `key_fn(item)` in `reference`.
///
/// Duplicate keys in `reference` take their first position.
///
/// # Errors
///
/// With [`MissingKey::Error`], returns [`Error::UndefinedOrdering`] for the
/// first item whose key is absent from `reference` or cannot be extracted.
///
/// # Examples
///
/// ```rust
/// use seqmerge::{sort_by_key_order, SortOptions};
///
/// let words = ["bb", "a", "ccc"];
/// let sorted = sort_by_key_order(&words, &[1, 2, 3], &SortOptions::new(), |w| Some(w.len()))
///     .unwrap();
/// assert_eq!(sorted, vec!["a", "bb", "ccc"]);
/// ```
pub fn sort_by_key_order<T, K, F>(
    items: &[T],
    reference: &[K],
    options: &SortOptions,
    key_fn: F,
) -> Result<Vec<T>>
where
    T: Clone,
    K: Eq + Hash + fmt::Debug,
    F: Fn(&T) -> Option<K>,
{
    let ranks = rank_items(items, reference, key_fn);
    if options.missing == MissingKey::Error {
        if let Some(Err(key)) = ranks.iter().find(|rank| rank.is_err()) {
            return Err(match key {
                Some(key) => Error::undefined_ordering(key),
                None => Error::UndefinedOrdering {
                    key: "<none>".to_string(),
                },
            });
        }
    }
    Ok(arrange(items, &ranks))
}

/// Sorts values by the position of their key in `reference`.
///
/// Items without a reference position go last.
#[must_use]
pub fn sort_by_reference(items: &[Value], reference: &[Value], key: &KeyExtractor) -> Vec<Value> {
    sort_missing_last(items, reference, |item| key.extract(item).cloned())
}

/// Sorts values by the position of their key in `reference`, following `options`.
///
/// # Errors
///
/// See [`sort_by_key_order`].
pub fn sort_by_reference_with_options(
    items: &[Value],
    reference: &[Value],
    key: &KeyExtractor,
    options: &SortOptions,
) -> Result<Vec<Value>> {
    sort_by_key_order(items, reference, options, |item| key.extract(item).cloned())
}

/// Sorts records by the position of one of their fields in `reference`.
///
/// Each record is converted with [`to_value`] and its `field` looked up.
///
/// # Errors
///
/// Returns the conversion error if a record cannot be represented as a
/// [`Value`], or the ordering error described in [`sort_by_key_order`].
///
/// # Examples
///
/// ```rust
/// use seqmerge::{seq, sort_records_by_reference, SortOptions};
/// use serde::Serialize;
///
/// #[derive(Serialize, Clone, Debug, PartialEq)]
/// struct Entry { n: String }
///
/// let entries = vec![Entry { n: "two".into() }, Entry { n: "one".into() }];
/// let sorted = sort_records_by_reference(&entries, &seq!["one", "two"], "n", &SortOptions::new())
///     .unwrap();
/// assert_eq!(sorted[0].n, "one");
/// ```
pub fn sort_records_by_reference<T>(
    items: &[T],
    reference: &[Value],
    field: &str,
    options: &SortOptions,
) -> Result<Vec<T>>
where
    T: Serialize + Clone,
{
    let keys = items
        .iter()
        .map(|item| to_value(item).map(|value| value.get(field).cloned()))
        .collect::<Result<Vec<_>>>()?;
    let indices: Vec<usize> = (0..items.len()).collect();
    let order = sort_by_key_order(&indices, reference, options, |&i| keys[i].clone())?;
    Ok(order.into_iter().map(|i| items[i].clone()).collect())
}
