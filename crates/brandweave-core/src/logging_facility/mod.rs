//! Structured logging facility for Brandweave
//!
//! The engine and snapshot subsystem are pure and never log from the hot
//! path; these tools are for the service layer calling them:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Correlation propagation via spans
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use brandweave_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod span;
pub mod test_capture;

pub use init::{init, Profile};
pub use span::correlation_span;
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
