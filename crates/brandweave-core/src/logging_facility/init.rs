//! Subscriber initialization
//!
//! One entry point, profile-selected output format, env-filter overridable
//! via `RUST_LOG`.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Output profile for the global subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output, debug level
    Development,
    /// JSON lines, info level
    Production,
    /// No output; tests install a capture layer instead
    Test,
}

impl Profile {
    fn default_directive(self) -> &'static str {
        match self {
            Profile::Development => "brandweave=debug",
            Profile::Production => "brandweave=info",
            Profile::Test => "off",
        }
    }
}

fn env_filter(profile: Profile) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(profile.default_directive()))
}

static INIT_ONCE: Once = Once::new();

/// Install the global subscriber for the given profile.
///
/// Call once at application startup; repeated calls are no-ops. Under the
/// `Test` profile nothing is emitted; use
/// [`super::test_capture::init_test_capture`] to capture events instead.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(profile))
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(env_filter(profile))
                .init();
        }
        Profile::Test => {
            tracing_subscriber::registry().init();
        }
    });
}
