//! Snapshot verification and offline replay.
//!
//! Verification is the one total, non-throwing operation in the crate: it
//! accumulates every integrity problem it finds so an audit surface can show
//! all defects at once instead of stopping at the first. Offline replay
//! (`resolve_from_snapshot`) builds on it and *does* fail fatally, returning
//! the embedded resolution unchanged on success, with no recomputation and
//! no need for the original layer set.

use crate::digest::{self, DIGEST_HEX_LEN, SNAPSHOT_ID_LEN};
use crate::errors::{BrandingError, Result};
use crate::model::context::parse_rfc3339;
use crate::model::ResolvedBranding;

use super::record::{BrandingSnapshot, SNAPSHOT_VERSION};

/// A single integrity problem found during verification
#[derive(Debug, Clone, PartialEq)]
pub enum VerificationIssue {
    /// The snapshot shape is structurally invalid; nothing else is computable
    MalformedSnapshot(String),
    /// Recomputed checksum differs from the stored one
    ChecksumMismatch,
    /// Recomputed snapshot identifier differs from the stored one
    SnapshotIdMismatch,
    /// The supplied evaluation time is past the snapshot's expiry
    Expired,
    /// The supplied evaluation time could not be parsed
    UnparsableEvaluationTime(String),
}

impl std::fmt::Display for VerificationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerificationIssue::MalformedSnapshot(reason) => {
                write!(f, "malformed snapshot: {}", reason)
            }
            VerificationIssue::ChecksumMismatch => {
                write!(f, "checksum mismatch: snapshot content has been tampered with")
            }
            VerificationIssue::SnapshotIdMismatch => {
                write!(f, "snapshot ID mismatch: snapshot metadata has been modified")
            }
            VerificationIssue::Expired => write!(f, "snapshot has expired"),
            VerificationIssue::UnparsableEvaluationTime(value) => {
                write!(f, "evaluation time is not valid RFC 3339: {}", value)
            }
        }
    }
}

/// Outcome of snapshot verification
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotVerification {
    /// True iff no issues were found
    pub valid: bool,
    /// Every issue found, in check order
    pub errors: Vec<VerificationIssue>,
}

impl SnapshotVerification {
    fn from_issues(errors: Vec<VerificationIssue>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Human-readable rendering of every issue
    pub fn error_strings(&self) -> Vec<String> {
        self.errors.iter().map(|issue| issue.to_string()).collect()
    }
}

/// Verify a snapshot's integrity against a supplied evaluation time.
///
/// Total function: never fails, never panics. Checks run in order (shape,
/// checksum, identifier, expiry) and apart from the shape check (which
/// returns alone, since nothing else is computable over a malformed record)
/// they do not short-circuit, so several issues can surface together.
pub fn verify_branding_snapshot(
    snapshot: &BrandingSnapshot,
    evaluation_time: &str,
) -> SnapshotVerification {
    if let Err(reason) = validate_shape(snapshot) {
        return SnapshotVerification::from_issues(vec![VerificationIssue::MalformedSnapshot(
            reason,
        )]);
    }

    let mut errors = Vec::new();

    match snapshot
        .body_value()
        .and_then(|body| digest::checksum(&body))
    {
        Ok(computed) if computed == snapshot.checksum => {}
        Ok(_) => errors.push(VerificationIssue::ChecksumMismatch),
        Err(err) => errors.push(VerificationIssue::MalformedSnapshot(err.to_string())),
    }

    match digest::snapshot_id(&snapshot.context, &snapshot.generated_at) {
        Ok(expected) if expected == snapshot.snapshot_id => {}
        Ok(_) => errors.push(VerificationIssue::SnapshotIdMismatch),
        Err(err) => errors.push(VerificationIssue::MalformedSnapshot(err.to_string())),
    }

    if let Some(expires_at) = &snapshot.expires_at {
        match (
            parse_rfc3339("evaluationTime", evaluation_time),
            parse_rfc3339("expiresAt", expires_at),
        ) {
            (Ok(evaluated), Ok(expiry)) => {
                if evaluated > expiry {
                    errors.push(VerificationIssue::Expired);
                }
            }
            (Err(_), _) => errors.push(VerificationIssue::UnparsableEvaluationTime(
                evaluation_time.to_string(),
            )),
            // Unparsable expiry is unreachable here: the shape check above
            // already rejected it
            (_, Err(_)) => {}
        }
    }

    SnapshotVerification::from_issues(errors)
}

/// Structural validity of the snapshot record.
fn validate_shape(snapshot: &BrandingSnapshot) -> std::result::Result<(), String> {
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(format!(
            "unsupported version '{}', expected '{}'",
            snapshot.version, SNAPSHOT_VERSION
        ));
    }
    if snapshot.snapshot_id.len() != SNAPSHOT_ID_LEN
        || !snapshot.snapshot_id.chars().all(|c| c.is_ascii_hexdigit())
    {
        return Err(format!(
            "snapshotId must be {} hex characters",
            SNAPSHOT_ID_LEN
        ));
    }
    if snapshot.checksum.len() != DIGEST_HEX_LEN
        || !snapshot.checksum.chars().all(|c| c.is_ascii_hexdigit())
    {
        return Err(format!("checksum must be {} hex characters", DIGEST_HEX_LEN));
    }
    if snapshot.context.tenant_id.is_empty() {
        return Err("context tenantId is empty".to_string());
    }
    if snapshot.resolved.tenant_id.is_empty() {
        return Err("resolved tenantId is empty".to_string());
    }
    if parse_rfc3339("generatedAt", &snapshot.generated_at).is_err() {
        return Err(format!(
            "generatedAt is not valid RFC 3339: {}",
            snapshot.generated_at
        ));
    }
    if let Some(expires_at) = &snapshot.expires_at {
        if parse_rfc3339("expiresAt", expires_at).is_err() {
            return Err(format!("expiresAt is not valid RFC 3339: {}", expires_at));
        }
    }
    Ok(())
}

/// Replay a resolution from a snapshot without the original layer set.
///
/// Verifies the snapshot, enforces the consumer-side tenant check, and
/// rejects evaluation times outside the snapshot's valid interval. On
/// success the embedded [`ResolvedBranding`] is returned unchanged; this is
/// the offline-evaluation guarantee.
///
/// # Errors
///
/// - `BrandingError::InvalidSnapshot` carrying every verification issue
/// - `BrandingError::SnapshotTenantMismatch` if `context_tenant_id` is
///   supplied and differs from the snapshot's tenant
/// - `BrandingError::InvalidTimestamp` if `evaluation_time` is malformed
/// - `BrandingError::EvaluationBeforeGeneration` on backward time travel
/// - `BrandingError::SnapshotExpired` past the expiry
pub fn resolve_from_snapshot(
    snapshot: &BrandingSnapshot,
    evaluation_time: &str,
    context_tenant_id: Option<&str>,
) -> Result<ResolvedBranding> {
    let verification = verify_branding_snapshot(snapshot, evaluation_time);
    if !verification.valid {
        return Err(BrandingError::InvalidSnapshot {
            issues: verification.error_strings(),
        });
    }

    if let Some(tenant_id) = context_tenant_id {
        if tenant_id != snapshot.context.tenant_id {
            return Err(BrandingError::SnapshotTenantMismatch {
                snapshot_tenant_id: snapshot.context.tenant_id.clone(),
                context_tenant_id: tenant_id.to_string(),
            });
        }
    }

    let evaluated = parse_rfc3339("evaluationTime", evaluation_time)?;
    let generated = parse_rfc3339("generatedAt", &snapshot.generated_at)?;

    if evaluated < generated {
        return Err(BrandingError::EvaluationBeforeGeneration {
            evaluation_time: evaluation_time.to_string(),
            generated_at: snapshot.generated_at.clone(),
        });
    }

    if let Some(expires_at) = &snapshot.expires_at {
        if evaluated > parse_rfc3339("expiresAt", expires_at)? {
            return Err(BrandingError::SnapshotExpired {
                evaluation_time: evaluation_time.to_string(),
                expires_at: expires_at.clone(),
            });
        }
    }

    Ok(snapshot.resolved.clone())
}
