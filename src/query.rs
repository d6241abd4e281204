//! Form encoding of [`ValueMap`]s.

use crate::{Value, ValueMap};
use url::form_urlencoded::byte_serialize;

/// Encodes `map` as `application/x-www-form-urlencoded` pairs joined by `&`.
///
/// Nested objects use `outer[inner]` keys and arrays repeat `key[]`, in map
/// order. With a `namespace`, every top level key is nested under it.
///
/// ```rust
/// use seqmerge::{query::to_query, value};
///
/// let map = value!({ "some": { "nested": "thing" }, "another": "speciál" });
/// assert_eq!(
///     to_query(map.as_object().unwrap(), None),
///     "some%5Bnested%5D=thing&another=speci%C3%A1l"
/// );
/// ```
#[must_use]
pub fn to_query(map: &ValueMap, namespace: Option<&str>) -> String {
    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        let name = match namespace {
            Some(namespace) => format!("{}[{}]", namespace, key),
            None => key.clone(),
        };
        collect_pairs(&name, value, &mut pairs);
    }
    pairs.join("&")
}

fn collect_pairs(name: &str, value: &Value, pairs: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                collect_pairs(&format!("{}[{}]", name, key), nested, pairs);
            }
        }
        Value::Array(items) => {
            let name = format!("{}[]", name);
            for item in items {
                collect_pairs(&name, item, pairs);
            }
        }
        scalar => pairs.push(format!("{}={}", escape(name), escape(&scalar_text(scalar)))),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Date(dt) => dt.to_rfc3339(),
        Value::BigInt(bi) => bi.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn escape(s: &str) -> String {
    byte_serialize(s.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;
    use pretty_assertions::assert_eq;

    fn query(v: Value, namespace: Option<&str>) -> String {
        match v {
            Value::Object(map) => to_query(&map, namespace),
            other => panic!("expected an object, got {}", other),
        }
    }

    #[test]
    fn test_nested_and_escaped() {
        assert_eq!(
            query(value!({ "some": { "nested": "thing" }, "another": "speciál" }), None),
            "some%5Bnested%5D=thing&another=speci%C3%A1l"
        );
    }

    #[test]
    fn test_namespace() {
        assert_eq!(
            query(value!({ "a": 1, "b": true }), Some("ns")),
            "ns%5Ba%5D=1&ns%5Bb%5D=true"
        );
    }

    #[test]
    fn test_arrays_and_null() {
        assert_eq!(
            query(value!({ "ids": [1, 2], "empty": null }), None),
            "ids%5B%5D=1&ids%5B%5D=2&empty="
        );
    }

    #[test]
    fn test_spaces_become_plus() {
        assert_eq!(query(value!({ "q": "a b" }), None), "q=a+b");
    }

    #[test]
    fn test_empty_map() {
        assert_eq!(to_query(&ValueMap::new(), None), "");
    }
}
