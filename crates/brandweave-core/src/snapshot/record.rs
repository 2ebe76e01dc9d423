//! Snapshot generation and schema.
//!
//! A branding snapshot is a self-describing, tamper-evident capture of one
//! resolution. Its identity and checksum derive from its own content, so a
//! second independent computation over the same context and layers yields a
//! byte-identical snapshot.
//!
//! ## Checksum coverage
//!
//! The checksum covers `{version, context, resolved, layerIds, generatedAt}`
//! and deliberately excludes `snapshotId`, `checksum`, and `expiresAt`.
//! Excluding the expiry lets an operator stamp one after generation without
//! invalidating the checksum.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::digest;
use crate::engine::resolve_branding;
use crate::errors::{BrandingError, Result};
use crate::model::{BrandingContext, BrandingLayer, ResolvedBranding};

/// Snapshot wire-format version tag.
pub const SNAPSHOT_VERSION: &str = "1.0";

/// A persisted, self-describing capture of one resolution
///
/// Never mutated after generation; it becomes *invalid* (not deleted) once
/// its checksum or identifier no longer match recomputation, or once
/// evaluation time passes its expiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingSnapshot {
    /// Content-derived identifier (32 hex characters)
    pub snapshot_id: String,

    /// Format version tag (always "1.0")
    pub version: String,

    /// The context the resolution was performed for
    pub context: BrandingContext,

    /// The embedded resolution result
    pub resolved: ResolvedBranding,

    /// The full candidate layer set, unfiltered, for audit
    pub layer_ids: Vec<String>,

    /// Generation timestamp; equals the context's evaluation time
    pub generated_at: String,

    /// Optional expiry timestamp (RFC 3339)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,

    /// Integrity checksum (64 hex characters)
    pub checksum: String,
}

impl BrandingSnapshot {
    /// Stamp an expiry timestamp onto this snapshot.
    ///
    /// The expiry is outside checksum coverage, so the snapshot still
    /// verifies afterwards.
    pub fn with_expiry(mut self, expires_at: impl Into<String>) -> Self {
        self.expires_at = Some(expires_at.into());
        self
    }

    /// The checksum-covered body: this snapshot as a JSON value with
    /// `snapshotId`, `checksum`, and `expiresAt` removed.
    pub(crate) fn body_value(&self) -> Result<Value> {
        let mut value = serde_json::to_value(self)?;
        if let Some(object) = value.as_object_mut() {
            object.remove("snapshotId");
            object.remove("checksum");
            object.remove("expiresAt");
        }
        Ok(value)
    }
}

/// Resolve and freeze the result into a verifiable snapshot.
///
/// `generated_at` is the context's evaluation time, never the wall clock, so
/// generating twice from identical inputs yields byte-identical `checksum`,
/// `snapshot_id`, and `generated_at`.
///
/// # Errors
///
/// Same failure modes as [`resolve_branding`], plus
/// `BrandingError::Serialization` if digest computation fails.
pub fn generate_branding_snapshot(
    context: &BrandingContext,
    layers: &[BrandingLayer],
) -> Result<BrandingSnapshot> {
    let generated_at = context
        .evaluation_time
        .clone()
        .ok_or_else(|| BrandingError::MissingEvaluationTime {
            op: "snapshot generation".to_string(),
        })?;

    let resolved = resolve_branding(context, layers)?;

    // The full candidate set, not the filtered one: audits need to see every
    // layer that was considered
    let layer_ids: Vec<String> = layers.iter().map(|layer| layer.id.clone()).collect();

    let mut snapshot = BrandingSnapshot {
        snapshot_id: String::new(),
        version: SNAPSHOT_VERSION.to_string(),
        context: context.clone(),
        resolved,
        layer_ids,
        generated_at: generated_at.clone(),
        expires_at: None,
        checksum: String::new(),
    };

    snapshot.checksum = digest::checksum(&snapshot.body_value()?)?;
    snapshot.snapshot_id = digest::snapshot_id(context, &generated_at)?;

    Ok(snapshot)
}
