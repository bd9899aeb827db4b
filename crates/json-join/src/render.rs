//! Output rendering for joined pairs.

use serde_json::{json, Value};

use crate::join::JoinedPair;

/// Render a pair as a two-field `{"left": …, "right": …}` document, with
/// JSON null standing in for an absent side. Pretty-printed with two-space
/// indentation.
pub fn render_pair(pair: &JoinedPair) -> Result<String, serde_json::Error> {
    let doc = json!({
        "left": pair.left.cloned().unwrap_or(Value::Null),
        "right": pair.right.cloned().unwrap_or(Value::Null),
    });
    serde_json::to_string_pretty(&doc)
}

/// Render only the left record of a pair, unwrapped. Used by the subtract
/// mode, which discards the right component entirely at render time.
pub fn render_left(pair: &JoinedPair) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(pair.left.unwrap_or(&Value::Null))
}
