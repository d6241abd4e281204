//! # seqmerge
//!
//! Order-preserving merging of sequences, and the small toolbox around it.
//!
//! ## What does it do?
//!
//! Given a `source` sequence and an `update` sequence, [`merge`] produces
//! their union such that:
//!
//! - items only in `source` keep their relative order
//! - items in both ("anchors") stay where `source` has them
//! - items only in `update` are slotted next to the anchors `update` puts
//!   them next to
//!
//! [`merge_nested`] extends this to sequences of sequences by encoding
//! group boundaries as out-of-band tokens ([`boundary`]) and merging those
//! like any other item.
//!
//! ## Key Features
//!
//! - **Generic**: every operation works on any `T: Clone + Eq + Hash`; the
//!   nested ones on any [`Nestable`] item
//! - **Dynamic values**: [`Value`] covers JSON-like data, and [`value!`] /
//!   [`seq!`] build it from literals
//! - **Reference sort**: order items, mappings or `Serialize` records by the
//!   position of a key in a reference list
//! - **Deep delete**: remove a value at every nesting depth, in place
//!
//! ## Quick Start
//!
//! ```rust
//! use seqmerge::{merge, merge_nested, seq};
//!
//! let merged = merge(&seq![2, "b", 1, "a"], &seq![3, 1, 2]);
//! assert_eq!(merged, seq![2, "b", 3, 1, "a"]);
//!
//! let nested = merge_nested(&seq![[]], &seq![[1], [2]]);
//! assert_eq!(nested, seq![[1, 2]]);
//! ```
//!
//! ### Consuming the update
//!
//! ```rust
//! use seqmerge::{merge_strict, seq};
//!
//! let mut update = seq![3, 1, 2];
//! let merged = merge_strict(&seq![1, "a"], &mut update);
//! assert_eq!(merged, seq![3, 1, 2, "a"]);
//! assert!(update.is_empty());
//! ```
//!
//! ### Sorting by a reference order
//!
//! ```rust
//! use seqmerge::{seq, sort_by_reference, KeyExtractor};
//!
//! let sorted = sort_by_reference(
//!     &seq![{ "n": "two" }, { "n": "one" }],
//!     &seq!["one", "two"],
//!     &KeyExtractor::field("n"),
//! );
//! assert_eq!(sorted, seq![{ "n": "one" }, { "n": "two" }]);
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through the `log` facade: `trace` for per-call figures,
//! `debug` when a policy kicks in (dropped markers, missing sort keys, a
//! strict merge without anchors). Install any logger to see them.
//!
//! ## Demos
//!
//! See the `demos/` directory:
//!
//! - **`merge.rs`** - flat merges, strict merges and reference sorting
//! - **`nested.rs`** - nested merges, the boundary codec and deep delete
//!
//! Run any demo with: `cargo run --example <name>`

pub mod boundary;
pub mod deep_delete;
pub mod error;
pub mod ext;
pub mod macros;
pub mod map;
pub mod merge;
pub mod nestable;
pub mod nested;
pub mod options;
pub mod query;
pub mod reference_sort;
pub mod ser;
pub mod text;
pub mod value;

pub use boundary::Token;
pub use deep_delete::delete_recursive;
pub use error::{Error, Result};
pub use ext::SequenceExt;
pub use map::ValueMap;
pub use merge::{merge, merge_strict, merge_with_options};
pub use nestable::Nestable;
pub use nested::{flatten_once, merge_nested};
pub use options::{MergeOptions, MissingKey, SortOptions};
pub use query::to_query;
pub use reference_sort::{
    sort_by_key_order, sort_by_reference, sort_by_reference_with_options,
    sort_records_by_reference, KeyExtractor,
};
pub use ser::ValueSerializer;
pub use text::{latinize, permalink, snip, strip_tags, strip_tags_in_place};
pub use value::{Number, Value};

use serde::Serialize;

/// Convert any `T: Serialize` to a [`Value`].
///
/// Useful for looking at records dynamically, e.g. to read a field by name.
///
/// # Examples
///
/// ```rust
/// use seqmerge::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(value.get("x"), Some(&Value::from(1)));
/// ```
///
/// # Errors
///
/// Returns an error if a map key cannot be used as a string key.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}
