use serde::{Deserialize, Serialize};

use super::level::HierarchyLevel;

/// Raw token value supplied by a layer
///
/// A closed sum over the scalar types branding tokens may carry. Values are
/// opaque to the engine except for one case: a string of the exact form
/// `{key}` is a semantic reference to another resolved token.
///
/// Numbers are held as `serde_json::Number` so numeric values round-trip
/// through JSON without loss; checksum verification depends on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// Boolean token (e.g. a feature toggle)
    Bool(bool),
    /// Numeric token (e.g. spacing, opacity, duration)
    Number(serde_json::Number),
    /// String token; may be a literal or a `{key}` semantic reference
    String(String),
}

impl TokenValue {
    /// If this value is a semantic reference of the form `{key}`, return the
    /// referenced key.
    pub fn as_reference(&self) -> Option<&str> {
        match self {
            TokenValue::String(s) if s.len() >= 2 && s.starts_with('{') && s.ends_with('}') => {
                Some(&s[1..s.len() - 1])
            }
            _ => None,
        }
    }
}

impl From<&str> for TokenValue {
    fn from(s: &str) -> Self {
        TokenValue::String(s.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(s: String) -> Self {
        TokenValue::String(s)
    }
}

impl From<bool> for TokenValue {
    fn from(b: bool) -> Self {
        TokenValue::Bool(b)
    }
}

impl From<i64> for TokenValue {
    fn from(n: i64) -> Self {
        TokenValue::Number(serde_json::Number::from(n))
    }
}

/// A token after resolution
///
/// Carries the final value together with the layer and hierarchy level that
/// contributed it, and, when the value came through a semantic reference,
/// the key it was ultimately resolved from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedToken {
    /// Token key
    pub key: String,

    /// Final resolved value
    pub value: TokenValue,

    /// Identifier of the layer that contributed the value
    pub source_layer: String,

    /// Hierarchy level of the contributing layer
    pub source_level: HierarchyLevel,

    /// Immediate reference key the value was substituted from, when the raw
    /// value was a semantic reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_from: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_detection() {
        assert_eq!(
            TokenValue::from("{color.primary}").as_reference(),
            Some("color.primary")
        );
        assert_eq!(TokenValue::from("#ff0000").as_reference(), None);
        assert_eq!(TokenValue::from("{unclosed").as_reference(), None);
        assert_eq!(TokenValue::from(true).as_reference(), None);
        assert_eq!(TokenValue::from(12).as_reference(), None);
    }

    #[test]
    fn test_empty_braces_is_a_reference_to_empty_key() {
        // "{}" parses as a reference to the empty key; it can never resolve
        // because layers cannot define an empty token key
        assert_eq!(TokenValue::from("{}").as_reference(), Some(""));
    }

    #[test]
    fn test_untagged_serde_round_trip() {
        let values = vec![
            TokenValue::from("#102030"),
            TokenValue::from(true),
            TokenValue::from(8),
            TokenValue::Number(serde_json::Number::from_f64(0.25).unwrap()),
        ];
        for value in values {
            let json = serde_json::to_string(&value).unwrap();
            let back: TokenValue = serde_json::from_str(&json).unwrap();
            assert_eq!(back, value);
        }
    }

    #[test]
    fn test_resolved_token_camel_case_wire_format() {
        let token = ResolvedToken {
            key: "color.primary".into(),
            value: TokenValue::from("#102030"),
            source_layer: "layer-1".into(),
            source_level: HierarchyLevel::Tenant,
            resolved_from: None,
        };
        let json = serde_json::to_value(&token).unwrap();
        assert!(json.get("sourceLayer").is_some());
        assert!(json.get("sourceLevel").is_some());
        // Absent resolvedFrom is omitted entirely, not serialized as null
        assert!(json.get("resolvedFrom").is_none());
    }
}
