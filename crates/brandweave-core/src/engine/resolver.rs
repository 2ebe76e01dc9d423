//! Hierarchy-ordered layer resolution.
//!
//! Filters a candidate layer set down to the active and applicable subset for
//! a context, orders it by (hierarchy level, priority), merges token maps
//! last-writer-wins, and dereferences semantic token chains. Pure and
//! synchronous: the only inputs are the context and the layer slice, and the
//! evaluation time comes from the context, never from the wall clock.

use std::collections::BTreeMap;

use crate::digest::fingerprint;
use crate::errors::{BrandingError, Result};
use crate::model::{
    BrandingContext, BrandingLayer, ResolvedBranding, ResolvedToken,
};

/// Ceiling on semantic dereference passes.
///
/// Bounds reference-chain resolution and defends against cyclic references.
/// A cycle or a chain deeper than this simply stays bracketed in the output;
/// it is not an error.
const MAX_REFERENCE_PASSES: usize = 10;

/// Resolve a layered branding configuration into a single token map.
///
/// # Errors
///
/// - `BrandingError::MissingEvaluationTime` if the context carries none
/// - `BrandingError::InvalidTimestamp` on a malformed context or window
///   timestamp
/// - `BrandingError::CrossTenantAccess` if a tenant-level layer owned by a
///   different tenant reaches the resolution walk
pub fn resolve_branding(
    context: &BrandingContext,
    layers: &[BrandingLayer],
) -> Result<ResolvedBranding> {
    let evaluation_time = context.evaluation_instant("resolution")?;

    let mut candidates: Vec<&BrandingLayer> = Vec::with_capacity(layers.len());
    for layer in layers {
        if layer.is_active(evaluation_time)? && layer.is_applicable(context) {
            candidates.push(layer);
        }
    }

    // Stable sort: input order breaks remaining ties deterministically.
    candidates.sort_by_key(|layer| (layer.level.rank(), layer.priority));

    let mut tokens: BTreeMap<String, ResolvedToken> = BTreeMap::new();
    let mut applied_layers: Vec<String> = Vec::with_capacity(candidates.len());

    for layer in candidates {
        validate_tenant_ownership(layer, context)?;
        applied_layers.push(layer.id.clone());

        for (key, value) in &layer.tokens {
            tokens.insert(
                key.clone(),
                ResolvedToken {
                    key: key.clone(),
                    value: value.clone(),
                    source_layer: layer.id.clone(),
                    source_level: layer.level,
                    resolved_from: None,
                },
            );
        }
    }

    dereference_semantic_tokens(&mut tokens);

    Ok(ResolvedBranding {
        context_hash: fingerprint(context)?,
        tenant_id: context.tenant_id.clone(),
        tokens,
        applied_layers,
        resolved_at: evaluation_time.to_rfc3339(),
    })
}

/// Hard tenant-isolation boundary.
///
/// Applicability filtering already removed mismatched layers as a last-resort
/// defense; a tenant-level layer owned by another tenant surviving to the
/// walk is a protocol violation, never a silent exclusion.
fn validate_tenant_ownership(layer: &BrandingLayer, context: &BrandingContext) -> Result<()> {
    if layer.level == crate::model::HierarchyLevel::Tenant {
        if let Some(tenant_id) = &layer.tenant_id {
            if *tenant_id != context.tenant_id {
                return Err(BrandingError::CrossTenantAccess {
                    layer_tenant_id: tenant_id.clone(),
                    context_tenant_id: context.tenant_id.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Iteratively substitute `{key}` references with their referenced values.
///
/// Each pass rewrites every token whose value is a bracketed reference to an
/// existing key with a different value, recording the reference key as
/// `resolved_from`. Stops when a pass makes no substitution or after
/// [`MAX_REFERENCE_PASSES`]; whatever is still bracketed then stays bracketed.
fn dereference_semantic_tokens(tokens: &mut BTreeMap<String, ResolvedToken>) {
    let keys: Vec<String> = tokens.keys().cloned().collect();

    for _ in 0..MAX_REFERENCE_PASSES {
        let mut substituted = false;

        for key in &keys {
            let reference = match tokens.get(key).and_then(|t| t.value.as_reference()) {
                Some(r) => r.to_string(),
                None => continue,
            };
            let referenced_value = match tokens.get(&reference) {
                Some(t) if t.value != tokens[key].value => t.value.clone(),
                _ => continue,
            };
            if let Some(token) = tokens.get_mut(key) {
                token.value = referenced_value;
                token.resolved_from = Some(reference);
                substituted = true;
            }
        }

        if !substituted {
            break;
        }
    }
}
