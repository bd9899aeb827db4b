//! Relational-style joins over JSON streams.
//!
//! Two streams of JSON values are partitioned by a key path extracted from
//! each record, and the six join variants (inner, full/left/right outer,
//! symmetric difference, subtract) are all expressed as one primitive driven
//! by three boolean switches over the partition result.
//!
//! # Example
//!
//! ```
//! use json_join::{join, JoinFlags, Partition};
//! use json_join_keypath::KeyPath;
//! use serde_json::json;
//!
//! let key = KeyPath::parse(".id");
//! let left = vec![json!({"id": 1, "v": "a"}), json!({"id": 2, "v": "b"})];
//! let right = vec![json!({"id": 2, "v": "x"}), json!({"id": 3, "v": "y"})];
//!
//! let left = Partition::build(&key, &left);
//! let right = Partition::build(&key, &right);
//!
//! let pairs = join(&left, &right, JoinFlags::INNER);
//! assert_eq!(pairs.len(), 1);
//! assert_eq!(pairs[0].left, Some(&json!({"id": 2, "v": "b"})));
//! ```

pub mod cli;
pub mod join;
pub mod partition;
pub mod render;
pub mod stream;

pub use cli::{Cli, CliError};
pub use join::{join, union_keys, JoinFlags, JoinedPair};
pub use partition::Partition;
