//! Content digests over canonical serialization.
//!
//! Stateless SHA-256 digest helpers used for context fingerprints, snapshot
//! identifiers, and snapshot checksums. Every digest runs over the canonical
//! JSON encoding from [`crate::canonical`], so logically equal inputs always
//! produce the same digest.
//!
//! ## Digest types
//!
//! - **Fingerprint**: full 64-hex digest of a value (context hash)
//! - **Snapshot ID**: digest of `{context, timestamp}` truncated to 32 hex
//!   characters; content-addressing for tamper detection, not a database key
//! - **Checksum**: full 64-hex digest used for snapshot integrity

use crate::canonical::to_canonical_json;
use crate::errors::Result;
use serde::Serialize;
use serde_json::json;
use sha2::{Digest, Sha256};

/// Length of a truncated snapshot identifier, in hex characters.
pub const SNAPSHOT_ID_LEN: usize = 32;

/// Length of a full SHA-256 digest, in hex characters.
pub const DIGEST_HEX_LEN: usize = 64;

/// Compute the full-length fingerprint of a value.
///
/// # Errors
///
/// Returns `BrandingError::Serialization` if the value cannot be serialized.
pub fn fingerprint<T: Serialize>(value: &T) -> Result<String> {
    Ok(hash_string(&to_canonical_json(value)?))
}

/// Derive a snapshot identifier from a context and a generation timestamp.
///
/// The identifier is the SHA-256 digest of the canonical encoding of
/// `{"context": …, "timestamp": …}`, truncated to [`SNAPSHOT_ID_LEN`] hex
/// characters. Truncation is deliberate: the identifier exists for
/// content-addressed tamper detection, not collision-free indexing.
///
/// # Errors
///
/// Returns `BrandingError::Serialization` if the context cannot be serialized.
pub fn snapshot_id<T: Serialize>(context: &T, timestamp: &str) -> Result<String> {
    let canonical = to_canonical_json(&json!({
        "context": serde_json::to_value(context)?,
        "timestamp": timestamp,
    }))?;
    let mut digest = hash_string(&canonical);
    digest.truncate(SNAPSHOT_ID_LEN);
    Ok(digest)
}

/// Compute the integrity checksum of a value.
///
/// # Errors
///
/// Returns `BrandingError::Serialization` if the value cannot be serialized.
pub fn checksum<T: Serialize>(value: &T) -> Result<String> {
    Ok(hash_string(&to_canonical_json(value)?))
}

/// Hash a string with SHA-256, hex-encoded.
fn hash_string(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fingerprint_deterministic() {
        let value = json!({"a": 1, "b": [true, null]});
        let first = fingerprint(&value).unwrap();
        let second = fingerprint(&value).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), DIGEST_HEX_LEN);
    }

    #[test]
    fn test_fingerprint_key_order_independent() {
        // Equal content with different insertion order must fingerprint equal
        let mut first = serde_json::Map::new();
        first.insert("x".into(), json!(1));
        first.insert("y".into(), json!(2));

        let mut second = serde_json::Map::new();
        second.insert("y".into(), json!(2));
        second.insert("x".into(), json!(1));

        assert_eq!(
            fingerprint(&serde_json::Value::Object(first)).unwrap(),
            fingerprint(&serde_json::Value::Object(second)).unwrap()
        );
    }

    #[test]
    fn test_snapshot_id_truncated() {
        let id = snapshot_id(&json!({"tenantId": "t1"}), "2026-01-01T00:00:00Z").unwrap();
        assert_eq!(id.len(), SNAPSHOT_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_snapshot_id_varies_with_timestamp() {
        let ctx = json!({"tenantId": "t1"});
        let a = snapshot_id(&ctx, "2026-01-01T00:00:00Z").unwrap();
        let b = snapshot_id(&ctx, "2026-01-02T00:00:00Z").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_checksum_format() {
        let digest = checksum(&json!(["a", "b"])).unwrap();
        assert_eq!(digest.len(), DIGEST_HEX_LEN);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
