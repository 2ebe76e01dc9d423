use brandweave_core::{BrandingContext, BrandingLayer, HierarchyLevel};

/// Fixed evaluation time used across the suites; determinism tests rely on
/// every resolution in a test sharing it.
#[allow(dead_code)]
pub const EVAL_TIME: &str = "2026-03-01T12:00:00Z";

/// Create a context for the given tenant at the shared evaluation time
#[allow(dead_code)]
pub fn test_context(tenant_id: &str) -> BrandingContext {
    BrandingContext::new(tenant_id, EVAL_TIME)
}

/// Create an enabled, unscoped test layer
#[allow(dead_code)]
pub fn test_layer(id: &str, level: HierarchyLevel, priority: u32) -> BrandingLayer {
    BrandingLayer::new(id, format!("def-{id}"), level, priority)
}
