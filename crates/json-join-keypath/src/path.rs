//! Dotted key-path parsing and resolution.

use serde_json::Value;

/// An ordered, possibly-empty sequence of field names describing how to
/// descend through nested JSON objects.
///
/// The empty path is the identity key: the whole value is the key. A path is
/// immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Parse a dotted path expression.
    ///
    /// Parsing is total and never fails:
    /// - The literal expression `"."` parses to the identity path.
    /// - A single leading `.` is stripped before splitting.
    /// - The remainder splits on `.` into one segment per field name.
    ///
    /// An expression like `"a..b"` yields an empty-string segment, which never
    /// matches a real field; the path simply never resolves.
    ///
    /// # Example
    ///
    /// ```
    /// use json_join_keypath::KeyPath;
    ///
    /// assert!(KeyPath::parse(".").is_identity());
    /// assert_eq!(KeyPath::parse(".a.b").segments(), &["a", "b"]);
    /// assert_eq!(KeyPath::parse("a.b").segments(), &["a", "b"]);
    /// assert_eq!(KeyPath::parse("a..b").segments(), &["a", "", "b"]);
    /// ```
    pub fn parse(expression: &str) -> KeyPath {
        if expression == "." {
            return KeyPath { segments: Vec::new() };
        }
        let expression = expression.strip_prefix('.').unwrap_or(expression);
        KeyPath {
            segments: expression.split('.').map(str::to_string).collect(),
        }
    }

    /// Whether this is the identity path (the whole value is the key).
    pub fn is_identity(&self) -> bool {
        self.segments.is_empty()
    }

    /// The field names of this path, in descent order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Resolve this path against a value.
    ///
    /// Every step requires the current value to be an object holding the
    /// segment as a key; anything else fails resolution. Arrays are not
    /// traversed. The terminal value must be a scalar or null; a path that
    /// lands on an array or object does not resolve, since composite values
    /// are never usable as join keys.
    ///
    /// Returns `Some(&Value::Null)` for a real null terminal, which is
    /// distinct from `None` (the path did not resolve at all).
    ///
    /// # Example
    ///
    /// ```
    /// use json_join_keypath::KeyPath;
    /// use serde_json::json;
    ///
    /// let doc = json!({"a": {"b": 1, "c": [2], "d": null}});
    ///
    /// assert_eq!(KeyPath::parse(".a.b").resolve(&doc), Some(&json!(1)));
    /// assert_eq!(KeyPath::parse(".a.c").resolve(&doc), None);
    /// assert_eq!(KeyPath::parse(".a.d").resolve(&doc), Some(&json!(null)));
    /// assert_eq!(KeyPath::parse(".a.x").resolve(&doc), None);
    /// ```
    pub fn resolve<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        let mut current = value;
        for segment in &self.segments {
            match current {
                Value::Object(map) => current = map.get(segment)?,
                _ => return None,
            }
        }
        match current {
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Some(current),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Whether this path resolves to a terminal component of `value`.
    pub fn exists(&self, value: &Value) -> bool {
        self.resolve(value).is_some()
    }

    /// The terminal component of `value`, or null when resolution fails.
    ///
    /// A failed lookup is indistinguishable from a real null key; callers
    /// must check [`exists`](KeyPath::exists) first.
    pub fn value<'a>(&self, value: &'a Value) -> &'a Value {
        self.resolve(value).unwrap_or(&Value::Null)
    }
}
