//! Brandweave Core - deterministic branding resolution and snapshots
//!
//! This crate resolves a layered branding/theming configuration into a single
//! deterministic set of key-value tokens for a tenant context, and produces
//! tamper-evident, offline-verifiable snapshots of that resolution:
//! - Hierarchy-ordered layer merging with tenant/partner/suite/component scoping
//! - Time-bounded layer validity and semantic token dereferencing
//! - Canonical (key-order-independent) JSON serialization as the hashing basis
//! - Content-derived snapshot identity, checksum verification, offline replay
//!
//! Everything is pure and synchronous: inputs arrive wholesale in memory,
//! results are returned by value, and the evaluation time always comes from
//! the caller's context, never the wall clock.

pub mod canonical;
pub mod digest;
pub mod engine;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod snapshot;

// Re-export commonly used types
pub use engine::resolve_branding;
pub use errors::{BrandingError, BrandingErrorKind, Result};
pub use model::{
    BrandingContext, BrandingLayer, HierarchyLevel, ResolvedBranding, ResolvedToken, TokenValue,
};
pub use snapshot::{
    generate_branding_snapshot, resolve_from_snapshot, verify_branding_snapshot, BrandingSnapshot,
    SnapshotVerification, VerificationIssue,
};
