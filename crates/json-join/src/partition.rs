//! Grouping of records by derived key.

use indexmap::map::Keys;
use indexmap::IndexMap;
use json_join_keypath::{KeyPath, KeyScalar};
use serde_json::Value;

/// A mapping from derived key to the records that produced it.
///
/// Buckets keep the relative source order of their records, and the map
/// itself iterates in first-seen key order. Records whose key path does not
/// resolve are dropped entirely; they appear in no bucket and raise no error.
/// Every bucket is non-empty by construction.
#[derive(Debug, Default)]
pub struct Partition<'a> {
    buckets: IndexMap<KeyScalar, Vec<&'a Value>>,
}

impl<'a> Partition<'a> {
    /// Partition `records` by the terminal component `path` derives from
    /// each one.
    pub fn build(path: &KeyPath, records: &'a [Value]) -> Partition<'a> {
        let mut buckets: IndexMap<KeyScalar, Vec<&'a Value>> = IndexMap::new();
        for record in records {
            let Some(key) = path.resolve(record).and_then(KeyScalar::from_value) else {
                continue;
            };
            buckets.entry(key).or_default().push(record);
        }
        Partition { buckets }
    }

    /// Derived keys, in first-seen order.
    pub fn keys(&self) -> Keys<'_, KeyScalar, Vec<&'a Value>> {
        self.buckets.keys()
    }

    /// The records bucketed under `key`, or an empty slice.
    pub fn get(&self, key: &KeyScalar) -> &[&'a Value] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &KeyScalar) -> bool {
        self.buckets.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of bucketed records across all keys.
    pub fn record_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}
