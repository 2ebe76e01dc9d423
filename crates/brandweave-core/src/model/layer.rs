use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::context::{parse_rfc3339, BrandingContext};
use super::level::HierarchyLevel;
use super::token::TokenValue;
use crate::errors::Result;

/// A named, prioritized bundle of tokens scoped to hierarchy dimensions
///
/// Layers are immutable once constructed; the engine takes a read-only slice
/// per resolution call and never mutates it. An unset scoping field means
/// "applies regardless of that dimension". The optional validity window
/// `[valid_from, valid_until]` has inclusive bounds; an absent bound is
/// unbounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingLayer {
    /// Layer identifier
    pub id: String,

    /// Identifier of the defining branding template
    pub definition_id: String,

    /// Hierarchy level; primary ordering key during resolution
    pub level: HierarchyLevel,

    /// Tie-break priority within a level (ascending; later wins)
    pub priority: u32,

    /// Token key → raw value. BTreeMap keeps key iteration deterministic.
    pub tokens: BTreeMap<String, TokenValue>,

    /// Start of validity window (RFC 3339, inclusive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<String>,

    /// End of validity window (RFC 3339, inclusive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,

    /// Tenant scope; on a tenant-level layer this is an ownership claim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,

    /// Partner scope
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<String>,

    /// Suite scope
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suite_id: Option<String>,

    /// Component scope
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,

    /// Disabled layers contribute nothing, regardless of other fields
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl BrandingLayer {
    /// Create an enabled, unscoped layer with no validity window
    pub fn new(
        id: impl Into<String>,
        definition_id: impl Into<String>,
        level: HierarchyLevel,
        priority: u32,
    ) -> Self {
        Self {
            id: id.into(),
            definition_id: definition_id.into(),
            level,
            priority,
            tokens: BTreeMap::new(),
            valid_from: None,
            valid_until: None,
            tenant_id: None,
            partner_id: None,
            suite_id: None,
            component_id: None,
            enabled: true,
        }
    }

    /// Add a token to this layer
    pub fn with_token(mut self, key: impl Into<String>, value: impl Into<TokenValue>) -> Self {
        self.tokens.insert(key.into(), value.into());
        self
    }

    /// Scope this layer to a tenant
    pub fn with_tenant(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self
    }

    /// Scope this layer to a partner
    pub fn with_partner(mut self, partner_id: impl Into<String>) -> Self {
        self.partner_id = Some(partner_id.into());
        self
    }

    /// Scope this layer to a suite
    pub fn with_suite(mut self, suite_id: impl Into<String>) -> Self {
        self.suite_id = Some(suite_id.into());
        self
    }

    /// Scope this layer to a component
    pub fn with_component(mut self, component_id: impl Into<String>) -> Self {
        self.component_id = Some(component_id.into());
        self
    }

    /// Set the validity window; either bound may be `None` for unbounded
    pub fn with_window(mut self, valid_from: Option<String>, valid_until: Option<String>) -> Self {
        self.valid_from = valid_from;
        self.valid_until = valid_until;
        self
    }

    /// Whether the layer is active at the given evaluation instant.
    ///
    /// Active means: enabled, and the inclusive `[valid_from, valid_until]`
    /// window contains the instant.
    ///
    /// # Errors
    ///
    /// Returns `BrandingError::InvalidTimestamp` if a window bound is not
    /// valid RFC 3339.
    pub fn is_active(&self, at: DateTime<Utc>) -> Result<bool> {
        if !self.enabled {
            return Ok(false);
        }
        if let Some(from) = &self.valid_from {
            if at < parse_rfc3339("validFrom", from)? {
                return Ok(false);
            }
        }
        if let Some(until) = &self.valid_until {
            if at > parse_rfc3339("validUntil", until)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Whether every set scoping field matches the context.
    ///
    /// Silent filtering only; the hard tenant-ownership check lives in the
    /// resolution walk, not here.
    pub fn is_applicable(&self, context: &BrandingContext) -> bool {
        if let Some(tenant_id) = &self.tenant_id {
            if *tenant_id != context.tenant_id {
                return false;
            }
        }
        if let Some(partner_id) = &self.partner_id {
            if Some(partner_id) != context.partner_id.as_ref() {
                return false;
            }
        }
        if let Some(suite_id) = &self.suite_id {
            if Some(suite_id) != context.suite_id.as_ref() {
                return false;
            }
        }
        if let Some(component_id) = &self.component_id {
            if Some(component_id) != context.component_id.as_ref() {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval_at(s: &str) -> DateTime<Utc> {
        parse_rfc3339("test", s).unwrap()
    }

    #[test]
    fn test_disabled_layer_never_active() {
        let mut layer = BrandingLayer::new("l1", "d1", HierarchyLevel::System, 0);
        layer.enabled = false;
        assert!(!layer.is_active(eval_at("2026-01-15T00:00:00Z")).unwrap());
    }

    #[test]
    fn test_window_bounds_inclusive() {
        let layer = BrandingLayer::new("l1", "d1", HierarchyLevel::System, 0).with_window(
            Some("2026-01-10T00:00:00Z".into()),
            Some("2026-01-20T00:00:00Z".into()),
        );
        // Both bounds count as inside the window
        assert!(layer.is_active(eval_at("2026-01-10T00:00:00Z")).unwrap());
        assert!(layer.is_active(eval_at("2026-01-20T00:00:00Z")).unwrap());
        assert!(layer.is_active(eval_at("2026-01-15T00:00:00Z")).unwrap());
        assert!(!layer.is_active(eval_at("2026-01-09T23:59:59Z")).unwrap());
        assert!(!layer.is_active(eval_at("2026-01-20T00:00:01Z")).unwrap());
    }

    #[test]
    fn test_absent_bounds_unbounded() {
        let layer = BrandingLayer::new("l1", "d1", HierarchyLevel::System, 0);
        assert!(layer.is_active(eval_at("1990-01-01T00:00:00Z")).unwrap());
        assert!(layer.is_active(eval_at("2090-01-01T00:00:00Z")).unwrap());
    }

    #[test]
    fn test_invalid_window_bound_is_an_error() {
        let layer = BrandingLayer::new("l1", "d1", HierarchyLevel::System, 0)
            .with_window(Some("soon".into()), None);
        assert!(layer.is_active(eval_at("2026-01-15T00:00:00Z")).is_err());
    }

    #[test]
    fn test_applicability_unset_fields_match_anything() {
        let layer = BrandingLayer::new("l1", "d1", HierarchyLevel::System, 0);
        let ctx = BrandingContext::new("tenant-1", "2026-01-15T00:00:00Z")
            .with_partner("p1")
            .with_suite("s1");
        assert!(layer.is_applicable(&ctx));
    }

    #[test]
    fn test_applicability_set_fields_must_match() {
        let ctx = BrandingContext::new("tenant-1", "2026-01-15T00:00:00Z").with_suite("crm");

        let matching =
            BrandingLayer::new("l1", "d1", HierarchyLevel::Suite, 0).with_suite("crm");
        assert!(matching.is_applicable(&ctx));

        let mismatched =
            BrandingLayer::new("l2", "d1", HierarchyLevel::Suite, 0).with_suite("billing");
        assert!(!mismatched.is_applicable(&ctx));

        // A layer scoped to a suite does not apply when the context has none
        let unscoped_ctx = BrandingContext::new("tenant-1", "2026-01-15T00:00:00Z");
        assert!(!matching.is_applicable(&unscoped_ctx));
    }

    #[test]
    fn test_enabled_defaults_true_on_deserialize() {
        let json = r#"{
            "id": "l1",
            "definitionId": "d1",
            "level": "system",
            "priority": 0,
            "tokens": {}
        }"#;
        let layer: BrandingLayer = serde_json::from_str(json).unwrap();
        assert!(layer.enabled);
    }
}
