/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// ```rust
/// use seqmerge::{value, Value};
///
/// let v = value!([2, "b", [1, null], { "n": true }]);
/// assert!(v.is_array());
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::ValueMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::ValueMap::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Anything else goes through `From`
    ($e:expr) => {
        $crate::Value::from($e)
    };
}

/// Builds a `Vec<Value>` sequence, the argument shape of the merge functions.
///
/// ```rust
/// use seqmerge::{merge, seq};
///
/// assert_eq!(merge(&seq![1, "a"], &seq![3, 1, 2]), seq![3, 1, 2, "a"]);
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };

    ($($elem:tt),+ $(,)?) => {
        vec![$($crate::value!($elem)),+]
    };
}

#[cfg(test)]
mod tests {
    use crate::{Number, Value, ValueMap};

    #[test]
    fn test_value_macro_primitives() {
        assert_eq!(value!(null), Value::Null);
        assert_eq!(value!(true), Value::Bool(true));
        assert_eq!(value!(false), Value::Bool(false));
        assert_eq!(value!(42), Value::Number(Number::Integer(42)));
        assert_eq!(value!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(value!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_value_macro_nested_arrays() {
        assert_eq!(value!([]), Value::Array(vec![]));
        assert_eq!(
            value!([[1], []]),
            Value::Array(vec![
                Value::Array(vec![Value::from(1)]),
                Value::Array(vec![]),
            ])
        );
    }

    #[test]
    fn test_value_macro_objects() {
        assert_eq!(value!({}), Value::Object(ValueMap::new()));

        let obj = value!({ "n": "two", "k": [1] });
        let map = obj.as_object().unwrap();
        assert_eq!(map.get("n"), Some(&Value::from("two")));
        assert_eq!(map.get("k"), Some(&Value::Array(vec![Value::from(1)])));
    }

    #[test]
    fn test_seq_macro() {
        assert!(seq![].is_empty());
        assert_eq!(seq![1, "a"], vec![Value::from(1), Value::from("a")]);
        assert_eq!(seq![[]], vec![Value::Array(vec![])]);
    }
}
