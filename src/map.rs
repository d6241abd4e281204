//! Ordered map type for object values.
//!
//! This module provides [`ValueMap`], a wrapper around [`IndexMap`] that keeps
//! insertion order for object fields, together with the small set of mapping
//! helpers that sit next to the sequence algorithms: [`ValueMap::only`],
//! [`ValueMap::except`], [`ValueMap::has_keys`],
//! [`ValueMap::to_pairs_recursive`] and [`ValueMap::build`].
//!
//! ## Examples
//!
//! ```rust
//! use seqmerge::{ValueMap, Value};
//!
//! let mut map = ValueMap::new();
//! map.insert("name".to_string(), Value::from("rodrigo"));
//! map.insert("age".to_string(), Value::from(21));
//!
//! let only_name = map.only(["name"]);
//! assert_eq!(only_name.len(), 1);
//! assert!(map.has_keys(["name", "age"]));
//! ```

use crate::{flatten_once, Error, Result, Value};
use indexmap::IndexMap;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// An ordered map of string keys to values.
///
/// Equality ignores insertion order (two maps are equal when they hold the
/// same entries); iteration follows insertion order.
///
/// # Examples
///
/// ```rust
/// use seqmerge::{ValueMap, Value};
///
/// let mut map = ValueMap::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueMap(IndexMap<String, Value>);

impl ValueMap {
    /// Creates an empty `ValueMap`.
    #[must_use]
    pub fn new() -> Self {
        ValueMap(IndexMap::new())
    }

    /// Creates an empty `ValueMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ValueMap(IndexMap::with_capacity(capacity))
    }

    /// Builds a map from a loosely shaped value.
    ///
    /// - `Null` gives an empty map
    /// - an object is copied
    /// - an array is flattened once and read as consecutive key/value pairs
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when the flattened array has an odd
    /// number of elements, when a key is not a string, or when the value is
    /// any other shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmerge::{seq, value, ValueMap, Value};
    ///
    /// let map = ValueMap::build(&value!(["do", ["it"]])).unwrap();
    /// assert_eq!(map.get("do"), Some(&Value::from("it")));
    ///
    /// assert!(ValueMap::build(&value!(["do", ["it", ["now"]]])).is_err());
    /// ```
    pub fn build(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(ValueMap::new()),
            Value::Object(map) => Ok(map.clone()),
            Value::Array(items) => {
                let flat = flatten_once(items);
                if flat.len() % 2 != 0 {
                    return Err(Error::invalid_argument("odd number of arguments for map"));
                }
                let mut map = ValueMap::with_capacity(flat.len() / 2);
                let mut pairs = flat.into_iter();
                while let (Some(key), Some(value)) = (pairs.next(), pairs.next()) {
                    match key {
                        Value::String(key) => {
                            map.insert(key, value);
                        }
                        other => {
                            return Err(Error::invalid_argument(format!(
                                "map keys must be strings, found {}",
                                other
                            )))
                        }
                    }
                }
                Ok(map)
            }
            other => Err(Error::invalid_argument(format!(
                "cannot build a map from {}",
                other
            ))),
        }
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the key keeps its original position.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Removes a key, shifting later entries so insertion order is preserved.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Returns a copy holding only the given keys. Unknown keys are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmerge::value;
    ///
    /// let person = value!({ "name": "rodrigo", "age": 21 });
    /// let map = person.as_object().unwrap();
    /// assert_eq!(map.only(["name", "something"]).len(), 1);
    /// ```
    #[must_use]
    pub fn only<I, S>(&self, keys: I) -> ValueMap
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let wanted: Vec<S> = keys.into_iter().collect();
        self.iter()
            .filter(|(k, _)| wanted.iter().any(|w| w.as_ref() == k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Returns a copy without the given keys. Unknown keys are ignored.
    #[must_use]
    pub fn except<I, S>(&self, keys: I) -> ValueMap
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unwanted: Vec<S> = keys.into_iter().collect();
        self.iter()
            .filter(|(k, _)| !unwanted.iter().any(|w| w.as_ref() == k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Returns `true` if every given key is present.
    #[must_use]
    pub fn has_keys<I, S>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keys.into_iter().all(|k| self.contains_key(k.as_ref()))
    }

    /// Converts the map into a list of `[key, value]` pairs, recursively.
    ///
    /// Nested objects become pair lists as well, including objects found
    /// inside arrays.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmerge::value;
    ///
    /// let nested = value!({ "some": { "nested": "thing" } });
    /// assert_eq!(
    ///     nested.as_object().unwrap().to_pairs_recursive(),
    ///     value!([["some", [["nested", "thing"]]]])
    /// );
    /// ```
    #[must_use]
    pub fn to_pairs_recursive(&self) -> Value {
        Value::Array(
            self.iter()
                .map(|(k, v)| Value::Array(vec![Value::String(k.clone()), pairs_of(v)]))
                .collect(),
        )
    }
}

fn pairs_of(value: &Value) -> Value {
    match value {
        Value::Object(map) => map.to_pairs_recursive(),
        Value::Array(items) => Value::Array(items.iter().map(pairs_of).collect()),
        other => other.clone(),
    }
}

// Entries are combined with a commutative sum so the hash agrees with the
// order-insensitive equality of `IndexMap`.
impl Hash for ValueMap {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut combined: u64 = 0;
        for (key, value) in self.iter() {
            let mut entry = DefaultHasher::new();
            key.hash(&mut entry);
            value.hash(&mut entry);
            combined = combined.wrapping_add(entry.finish());
        }
        state.write_usize(self.len());
        state.write_u64(combined);
    }
}

impl Default for ValueMap {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HashMap<String, Value>> for ValueMap {
    fn from(map: HashMap<String, Value>) -> Self {
        ValueMap(map.into_iter().collect())
    }
}

impl From<ValueMap> for HashMap<String, Value> {
    fn from(map: ValueMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for ValueMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValueMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for ValueMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        ValueMap(IndexMap::from_iter(iter))
    }
}
