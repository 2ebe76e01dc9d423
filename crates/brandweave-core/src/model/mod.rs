//! Domain models for branding resolution.

pub mod context;
pub mod layer;
pub mod level;
pub mod resolved;
pub mod token;

pub use context::BrandingContext;
pub use layer::BrandingLayer;
pub use level::{HierarchyLevel, HIERARCHY_ORDER};
pub use resolved::ResolvedBranding;
pub use token::{ResolvedToken, TokenValue};
