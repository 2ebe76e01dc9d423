use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{BrandingError, Result};

/// The request for one branding resolution
///
/// Scopes the resolution to a tenant (mandatory) and optionally to a partner,
/// suite, and component. The evaluation time is mandatory for resolution:
/// the engine never falls back to wall-clock time, since that would break
/// reproducibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingContext {
    /// Tenant identifier (mandatory)
    pub tenant_id: String,

    /// Optional partner scope
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<String>,

    /// Optional suite scope
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suite_id: Option<String>,

    /// Optional component scope
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,

    /// Evaluation timestamp (RFC 3339); required for resolution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_time: Option<String>,

    /// Optional locale hint, carried through opaquely
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl BrandingContext {
    /// Create a context for a tenant with an evaluation time
    pub fn new(tenant_id: impl Into<String>, evaluation_time: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            partner_id: None,
            suite_id: None,
            component_id: None,
            evaluation_time: Some(evaluation_time.into()),
            locale: None,
        }
    }

    /// Add a partner scope
    pub fn with_partner(mut self, partner_id: impl Into<String>) -> Self {
        self.partner_id = Some(partner_id.into());
        self
    }

    /// Add a suite scope
    pub fn with_suite(mut self, suite_id: impl Into<String>) -> Self {
        self.suite_id = Some(suite_id.into());
        self
    }

    /// Add a component scope
    pub fn with_component(mut self, component_id: impl Into<String>) -> Self {
        self.component_id = Some(component_id.into());
        self
    }

    /// Add a locale hint
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Parse the evaluation time once for use throughout a resolution.
    ///
    /// # Errors
    ///
    /// - `BrandingError::MissingEvaluationTime` if the context has none
    /// - `BrandingError::InvalidTimestamp` if it is not valid RFC 3339
    pub fn evaluation_instant(&self, op: &str) -> Result<DateTime<Utc>> {
        let raw = self
            .evaluation_time
            .as_deref()
            .ok_or_else(|| BrandingError::MissingEvaluationTime { op: op.to_string() })?;
        parse_rfc3339("evaluationTime", raw)
    }
}

/// Parse an RFC 3339 timestamp, naming the offending field on failure.
pub(crate) fn parse_rfc3339(field: &str, value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| BrandingError::InvalidTimestamp {
            field: field.to_string(),
            value: value.to_string(),
        })
}
