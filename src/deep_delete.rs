//! Recursive removal of a value from nested sequences.

use crate::Nestable;

/// Removes every element equal to `value`, at every depth, in place.
///
/// Elements equal to `value` are removed whole, nested sequences included.
/// Other nested sequences are searched recursively and kept, even if they
/// end up empty. Returns the first removed element, or `None` when nothing
/// matched.
///
/// # Examples
///
/// ```rust
/// use seqmerge::{delete_recursive, seq, Value};
///
/// let mut list = seq!["one", "two", ["one"]];
/// assert_eq!(delete_recursive(&mut list, &Value::from("one")), Some(Value::from("one")));
/// assert_eq!(list, seq!["two", []]);
/// ```
pub fn delete_recursive<T>(seq: &mut Vec<T>, value: &T) -> Option<T>
where
    T: Nestable + PartialEq,
{
    let mut removed = None;
    let mut kept = Vec::with_capacity(seq.len());
    for mut item in seq.drain(..) {
        if item == *value {
            removed.get_or_insert(item);
            continue;
        }
        if let Some(children) = item.as_sequence_mut() {
            if let Some(found) = delete_recursive(children, value) {
                removed.get_or_insert(found);
            }
        }
        kept.push(item);
    }
    *seq = kept;
    removed
}
