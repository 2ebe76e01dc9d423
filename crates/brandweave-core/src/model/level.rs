use serde::{Deserialize, Serialize};

/// Hierarchy level of a branding layer
///
/// A fixed, totally ordered enumeration. Order defines override precedence:
/// later (more specific) levels win over earlier ones for the same token key.
/// The set is closed; there are no dynamic levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HierarchyLevel {
    /// Platform-wide defaults, lowest precedence
    System,
    /// Partner-wide branding
    Partner,
    /// Tenant branding (the tenant-isolation boundary)
    Tenant,
    /// Product-suite branding within a tenant
    Suite,
    /// Individual component overrides
    Component,
    /// Request-specific overrides, highest precedence
    Contextual,
}

/// All hierarchy levels in precedence order, least specific first.
pub const HIERARCHY_ORDER: [HierarchyLevel; 6] = [
    HierarchyLevel::System,
    HierarchyLevel::Partner,
    HierarchyLevel::Tenant,
    HierarchyLevel::Suite,
    HierarchyLevel::Component,
    HierarchyLevel::Contextual,
];

impl HierarchyLevel {
    /// Numeric rank of this level within the fixed precedence order
    pub fn rank(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for HierarchyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            HierarchyLevel::System => "system",
            HierarchyLevel::Partner => "partner",
            HierarchyLevel::Tenant => "tenant",
            HierarchyLevel::Suite => "suite",
            HierarchyLevel::Component => "component",
            HierarchyLevel::Contextual => "contextual",
        };
        write!(f, "{}", name)
    }
}
