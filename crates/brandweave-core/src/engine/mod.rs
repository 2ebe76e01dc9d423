//! Resolution engine.
//!
//! ## Responsibilities
//!
//! - Filter layers to the active + applicable subset for a context
//! - Order by hierarchy level and priority; merge last-writer-wins
//! - Enforce the tenant-ownership boundary during the walk
//! - Dereference semantic token chains
//!
//! ## Non-Responsibilities
//!
//! - Snapshot identity and integrity (handled by `crate::snapshot`)
//! - Persistence or transport of layers (caller-owned)

pub mod resolver;

pub use resolver::resolve_branding;
