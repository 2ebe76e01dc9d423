//! Correlation span helpers
//!
//! Callers wrap engine invocations in a correlation span so every event
//! logged inside carries the request and trace identifiers.

use brandweave_core_types::RequestContext;
use tracing::info_span;

/// Create a span for an operation, tagged with correlation identifiers.
///
/// # Example
///
/// ```
/// use brandweave_core::logging_facility::correlation_span;
/// use brandweave_core_types::RequestContext;
///
/// let ctx = RequestContext::new();
/// let span = correlation_span("resolve_branding", &ctx);
/// let _guard = span.enter();
/// // events emitted here carry request_id (and trace_id when present)
/// ```
pub fn correlation_span(op: &str, ctx: &RequestContext) -> tracing::Span {
    match &ctx.trace_id {
        Some(trace_id) => info_span!(
            "op",
            op = op,
            request_id = %ctx.request_id,
            trace_id = %trace_id,
        ),
        None => info_span!(
            "op",
            op = op,
            request_id = %ctx.request_id,
            trace_id = tracing::field::Empty,
        ),
    }
}
