//! JSON stream decoding.

use std::io::Read;

use serde_json::{Deserializer, Value};

/// Decode a stream of whitespace-separated JSON documents to exhaustion.
///
/// The whole stream is materialized before any join logic runs. Invalid
/// syntax partway through aborts the decode; no partial result is returned.
pub fn decode_stream(reader: impl Read) -> Result<Vec<Value>, serde_json::Error> {
    Deserializer::from_reader(reader).into_iter::<Value>().collect()
}
