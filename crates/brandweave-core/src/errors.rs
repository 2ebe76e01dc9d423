use thiserror::Error;

/// Result type alias using BrandingError
pub type Result<T> = std::result::Result<T, BrandingError>;

/// Canonical error kind taxonomy
///
/// Stable classification of every failure the engine and snapshot subsystem
/// can produce. Each kind maps to a stable error code usable for programmatic
/// handling, testing, and external API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandingErrorKind {
    /// Context is missing the mandatory evaluation time
    MissingEvaluationTime,
    /// A timestamp field could not be parsed as RFC 3339
    InvalidTimestamp,
    /// A tenant-scoped layer belongs to a different tenant (security boundary)
    CrossTenantAccess,
    /// Snapshot belongs to a different tenant than the caller requested
    SnapshotTenantMismatch,
    /// Snapshot failed integrity verification
    InvalidSnapshot,
    /// Evaluation time precedes the snapshot's generation time
    EvaluationBeforeGeneration,
    /// Evaluation time is past the snapshot's expiry
    SnapshotExpired,
    /// JSON serialization failed during canonicalization or hashing
    Serialization,
}

impl BrandingErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            BrandingErrorKind::MissingEvaluationTime => "ERR_MISSING_EVALUATION_TIME",
            BrandingErrorKind::InvalidTimestamp => "ERR_INVALID_TIMESTAMP",
            BrandingErrorKind::CrossTenantAccess => "ERR_CROSS_TENANT_ACCESS",
            BrandingErrorKind::SnapshotTenantMismatch => "ERR_SNAPSHOT_TENANT_MISMATCH",
            BrandingErrorKind::InvalidSnapshot => "ERR_INVALID_SNAPSHOT",
            BrandingErrorKind::EvaluationBeforeGeneration => "ERR_EVALUATION_BEFORE_GENERATION",
            BrandingErrorKind::SnapshotExpired => "ERR_SNAPSHOT_EXPIRED",
            BrandingErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Comprehensive error taxonomy for Brandweave operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BrandingError {
    /// Context has no evaluation time; resolution must never fall back to
    /// wall-clock time
    #[error("evaluation time is required in context for deterministic {op}")]
    MissingEvaluationTime { op: String },

    /// A timestamp string failed RFC 3339 parsing
    #[error("invalid timestamp in field '{field}': {value}")]
    InvalidTimestamp { field: String, value: String },

    /// Tenant isolation boundary: a tenant-level layer owned by another tenant
    /// appeared in the resolution walk
    #[error(
        "cross-tenant access violation: layer belongs to tenant '{layer_tenant_id}' \
         but context specifies tenant '{context_tenant_id}'"
    )]
    CrossTenantAccess {
        layer_tenant_id: String,
        context_tenant_id: String,
    },

    /// Consumer-side isolation check: the snapshot embeds a different tenant
    /// than the caller requested (distinct from CrossTenantAccess)
    #[error(
        "snapshot tenant mismatch: snapshot belongs to tenant '{snapshot_tenant_id}' \
         but caller requested tenant '{context_tenant_id}'"
    )]
    SnapshotTenantMismatch {
        snapshot_tenant_id: String,
        context_tenant_id: String,
    },

    /// Snapshot failed verification; carries every accumulated issue
    #[error("invalid snapshot: {}", issues.join(", "))]
    InvalidSnapshot { issues: Vec<String> },

    /// Snapshots cannot be used to time-travel backward
    #[error(
        "evaluation time '{evaluation_time}' precedes snapshot generation time '{generated_at}'"
    )]
    EvaluationBeforeGeneration {
        evaluation_time: String,
        generated_at: String,
    },

    /// Evaluation time is past the snapshot's expiry
    #[error("snapshot expired at '{expires_at}' for evaluation time '{evaluation_time}'")]
    SnapshotExpired {
        evaluation_time: String,
        expires_at: String,
    },

    /// JSON serialization failure during canonicalization or hashing
    #[error("serialization failed: {message}")]
    Serialization { message: String },
}

impl BrandingError {
    /// Get the error kind for this error
    pub fn kind(&self) -> BrandingErrorKind {
        match self {
            BrandingError::MissingEvaluationTime { .. } => BrandingErrorKind::MissingEvaluationTime,
            BrandingError::InvalidTimestamp { .. } => BrandingErrorKind::InvalidTimestamp,
            BrandingError::CrossTenantAccess { .. } => BrandingErrorKind::CrossTenantAccess,
            BrandingError::SnapshotTenantMismatch { .. } => {
                BrandingErrorKind::SnapshotTenantMismatch
            }
            BrandingError::InvalidSnapshot { .. } => BrandingErrorKind::InvalidSnapshot,
            BrandingError::EvaluationBeforeGeneration { .. } => {
                BrandingErrorKind::EvaluationBeforeGeneration
            }
            BrandingError::SnapshotExpired { .. } => BrandingErrorKind::SnapshotExpired,
            BrandingError::Serialization { .. } => BrandingErrorKind::Serialization,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

impl From<serde_json::Error> for BrandingError {
    fn from(err: serde_json::Error) -> Self {
        BrandingError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        let err = BrandingError::CrossTenantAccess {
            layer_tenant_id: "tenant-a".into(),
            context_tenant_id: "tenant-b".into(),
        };
        assert_eq!(err.code(), "ERR_CROSS_TENANT_ACCESS");
        assert_eq!(err.kind(), BrandingErrorKind::CrossTenantAccess);
    }

    #[test]
    fn test_cross_tenant_message_carries_both_tenants() {
        let err = BrandingError::CrossTenantAccess {
            layer_tenant_id: "tenant-a".into(),
            context_tenant_id: "tenant-b".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("tenant-a"));
        assert!(msg.contains("tenant-b"));
    }

    #[test]
    fn test_invalid_snapshot_joins_issues() {
        let err = BrandingError::InvalidSnapshot {
            issues: vec!["checksum mismatch".into(), "snapshot ID mismatch".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("checksum mismatch"));
        assert!(msg.contains("snapshot ID mismatch"));
    }

    #[test]
    fn test_tenant_mismatch_is_distinct_from_cross_tenant() {
        let mismatch = BrandingError::SnapshotTenantMismatch {
            snapshot_tenant_id: "a".into(),
            context_tenant_id: "b".into(),
        };
        assert_ne!(mismatch.kind(), BrandingErrorKind::CrossTenantAccess);
    }
}
