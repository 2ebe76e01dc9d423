//! Snapshot integrity subsystem.
//!
//! Wraps one resolution in a tamper-evident, offline-verifiable record.
//!
//! ## Responsibilities
//!
//! - Deterministic snapshot identity and checksum computation
//! - Integrity verification (total, error-accumulating)
//! - Offline replay without the original layer set
//!
//! ## Non-Responsibilities
//!
//! - Running the resolution itself (handled by `crate::engine`)
//! - Persistence or transport of snapshots (caller-owned)

pub mod record;
pub mod verify;

pub use record::{generate_branding_snapshot, BrandingSnapshot, SNAPSHOT_VERSION};
pub use verify::{
    resolve_from_snapshot, verify_branding_snapshot, SnapshotVerification, VerificationIssue,
};
