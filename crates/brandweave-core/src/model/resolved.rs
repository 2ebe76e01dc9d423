use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::token::ResolvedToken;

/// The full result of one branding resolution
///
/// A pure function of `(context, layers)` at a fixed evaluation time. Token
/// keys are held in sorted order (BTreeMap) so serialization is stable, which
/// downstream hashing depends on. Returned by value; the engine keeps no
/// alias, so no caller can mutate a result another caller observes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedBranding {
    /// Fingerprint of the input context (full SHA-256, hex)
    pub context_hash: String,

    /// Tenant the resolution was performed for
    pub tenant_id: String,

    /// Resolved tokens, keyed in sorted order
    pub tokens: BTreeMap<String, ResolvedToken>,

    /// Identifiers of the layers actually walked, in application order
    pub applied_layers: Vec<String>,

    /// Evaluation timestamp the resolution was computed at (RFC 3339)
    pub resolved_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::level::HierarchyLevel;
    use crate::model::token::TokenValue;

    #[test]
    fn test_tokens_serialize_in_sorted_key_order() {
        let mut tokens = BTreeMap::new();
        for key in ["zeta", "alpha", "mid"] {
            tokens.insert(
                key.to_string(),
                ResolvedToken {
                    key: key.to_string(),
                    value: TokenValue::from("v"),
                    source_layer: "l1".into(),
                    source_level: HierarchyLevel::System,
                    resolved_from: None,
                },
            );
        }
        let resolved = ResolvedBranding {
            context_hash: "00".repeat(32),
            tenant_id: "tenant-1".into(),
            tokens,
            applied_layers: vec!["l1".into()],
            resolved_at: "2026-01-15T00:00:00Z".into(),
        };

        let json = serde_json::to_string(&resolved).unwrap();
        let alpha = json.find("\"alpha\"").unwrap();
        let mid = json.find("\"mid\"").unwrap();
        let zeta = json.find("\"zeta\"").unwrap();
        assert!(alpha < mid && mid < zeta);
    }
}
