//! Dotted key-path extraction over JSON values.
//!
//! This crate implements the key model used by the `json-join` tool: a
//! [`KeyPath`] describes how to descend through nested JSON objects to reach
//! a scalar, and a [`KeyScalar`] is the hashable, value-compared form of that
//! scalar used to group records.
//!
//! # Example
//!
//! ```
//! use json_join_keypath::{KeyPath, KeyScalar};
//! use serde_json::json;
//!
//! let path = KeyPath::parse(".user.id");
//! let record = json!({"user": {"id": 7}, "name": "ada"});
//!
//! assert!(path.exists(&record));
//! assert_eq!(path.value(&record), &json!(7));
//! assert_eq!(
//!     KeyScalar::from_value(path.value(&record)),
//!     Some(KeyScalar::number(7.0)),
//! );
//! ```

pub mod path;
pub mod scalar;

pub use path::KeyPath;
pub use scalar::KeyScalar;
