//! In-memory event capture for logging assertions
//!
//! Installs a subscriber layer that records every event, with its fields
//! rendered to strings, into a shared buffer tests can inspect. Installed
//! once per process; tests distinguish their own events by unique op names.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// One recorded event with its fields rendered to strings
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    /// The `component` field, when the event carried one
    pub component: Option<String>,
    /// The `op` field, when the event carried one
    pub op: Option<String>,
    /// The `event` field, when the event carried one
    pub event: Option<String>,
    pub fields: HashMap<String, String>,
}

#[derive(Default)]
struct StringFields(HashMap<String, String>);

impl StringFields {
    fn put(&mut self, field: &Field, rendered: String) {
        self.0.insert(field.name().to_string(), rendered);
    }
}

impl Visit for StringFields {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.put(field, format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, value.to_string());
    }
}

struct CaptureLayer {
    buffer: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = StringFields::default();
        event.record(&mut fields);
        let fields = fields.0;

        let captured = CapturedEvent {
            level: *event.metadata().level(),
            component: fields.get("component").cloned(),
            op: fields.get("op").cloned(),
            event: fields.get("event").cloned(),
            fields,
        };

        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(captured);
        }
    }
}

/// Shared handle over the capture buffer
#[derive(Clone)]
pub struct TestCapture {
    buffer: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    /// Snapshot of every event captured so far
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.buffer
            .lock()
            .map(|buffer| buffer.clone())
            .unwrap_or_default()
    }

    /// Events carrying the given `op` field, in emission order
    pub fn events_for(&self, op: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.op.as_deref() == Some(op))
            .collect()
    }

    /// Assert that some captured event carries the given op and event type
    ///
    /// # Panics
    ///
    /// Panics if no such event was captured
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let found = self
            .events_for(op)
            .iter()
            .any(|e| e.event.as_deref() == Some(event));
        assert!(found, "no captured event with op={op} event={event}");
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer (first call) and return the shared handle.
///
/// # Example
///
/// ```
/// use brandweave_core::logging_facility::test_capture::init_test_capture;
/// use brandweave_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("my_operation");
/// capture.assert_event_exists("my_operation", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            let layer = CaptureLayer {
                buffer: buffer.clone(),
            };
            tracing_subscriber::registry().with(layer).init();
            TestCapture { buffer }
        })
        .clone()
}
