//! Canonical scalar join keys.

use serde_json::Value;

/// A derived join key: the hashable, value-compared form of a terminal
/// component.
///
/// JSON numbers have floating-point semantics, so `2` and `2.0` derive the
/// same key. Composite values (arrays, objects) are excluded by path
/// resolution and have no representation here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyScalar {
    Null,
    Bool(bool),
    /// Bit pattern of the `f64` value. `-0.0` is stored as `0.0` so the two
    /// compare equal, matching JSON numeric equality. NaN cannot occur in
    /// decoded JSON.
    Number(u64),
    String(String),
}

impl KeyScalar {
    /// The key for a terminal value, or `None` for arrays and objects.
    ///
    /// # Example
    ///
    /// ```
    /// use json_join_keypath::KeyScalar;
    /// use serde_json::json;
    ///
    /// assert_eq!(KeyScalar::from_value(&json!(null)), Some(KeyScalar::Null));
    /// assert_eq!(KeyScalar::from_value(&json!(2)), KeyScalar::from_value(&json!(2.0)));
    /// assert_eq!(KeyScalar::from_value(&json!([1])), None);
    /// ```
    pub fn from_value(value: &Value) -> Option<KeyScalar> {
        match value {
            Value::Null => Some(KeyScalar::Null),
            Value::Bool(b) => Some(KeyScalar::Bool(*b)),
            Value::Number(n) => n.as_f64().map(KeyScalar::number),
            Value::String(s) => Some(KeyScalar::String(s.clone())),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// The key for a numeric value.
    pub fn number(n: f64) -> KeyScalar {
        // Collapse -0.0 into 0.0 so the two bucket together.
        let n = if n == 0.0 { 0.0 } else { n };
        KeyScalar::Number(n.to_bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_map_by_value() {
        assert_eq!(KeyScalar::from_value(&json!(null)), Some(KeyScalar::Null));
        assert_eq!(KeyScalar::from_value(&json!(true)), Some(KeyScalar::Bool(true)));
        assert_eq!(
            KeyScalar::from_value(&json!("id-1")),
            Some(KeyScalar::String("id-1".to_string()))
        );
    }

    #[test]
    fn composites_have_no_key() {
        assert_eq!(KeyScalar::from_value(&json!([])), None);
        assert_eq!(KeyScalar::from_value(&json!({})), None);
        assert_eq!(KeyScalar::from_value(&json!({"a": 1})), None);
    }

    #[test]
    fn integer_and_float_unify() {
        assert_eq!(
            KeyScalar::from_value(&json!(2)),
            KeyScalar::from_value(&json!(2.0))
        );
        assert_ne!(
            KeyScalar::from_value(&json!(2)),
            KeyScalar::from_value(&json!(3))
        );
    }

    #[test]
    fn negative_zero_unifies_with_zero() {
        assert_eq!(KeyScalar::number(-0.0), KeyScalar::number(0.0));
    }

    #[test]
    fn null_key_is_distinct_from_other_scalars() {
        assert_ne!(KeyScalar::Null, KeyScalar::Bool(false));
        assert_ne!(KeyScalar::Null, KeyScalar::number(0.0));
        assert_ne!(KeyScalar::Null, KeyScalar::String(String::new()));
    }
}
