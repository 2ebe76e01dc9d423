//! Canonical JSON serialization.
//!
//! Deterministic, order-independent string encoding of structured values.
//! Two logically equal values produce identical output regardless of the
//! key insertion order they were built with. This is the sole basis for
//! every digest in the crate; without it, identical content with different
//! key order would hash differently and checksum verification would break.
//!
//! ## Encoding rules
//!
//! - Object keys are sorted lexicographically before encoding
//! - Array element order is preserved (arrays are order-sensitive)
//! - Scalars use their standard JSON encoding

use crate::errors::Result;
use serde::Serialize;
use serde_json::Value;

/// Encode a JSON value canonically.
///
/// Object keys are emitted in sorted order at every nesting depth; arrays
/// keep their element order.
pub fn canonical_json(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => value.to_string(),
        Value::Array(items) => {
            let encoded: Vec<String> = items.iter().map(canonical_json).collect();
            format!("[{}]", encoded.join(","))
        }
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let pairs: Vec<String> = keys
                .iter()
                .map(|key| {
                    let encoded_key = Value::String((*key).clone()).to_string();
                    format!("{}:{}", encoded_key, canonical_json(&map[*key]))
                })
                .collect();
            format!("{{{}}}", pairs.join(","))
        }
    }
}

/// Serialize any value to its canonical JSON encoding.
///
/// Converts through `serde_json::Value` first so that struct field order
/// never influences the output.
///
/// # Errors
///
/// Returns `BrandingError::Serialization` if the value cannot be converted
/// to JSON.
pub fn to_canonical_json<T: Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_value(value)?;
    Ok(canonical_json(&json))
}
