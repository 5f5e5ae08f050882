//! HTTP middleware for request processing.
//!
//! - [`tracing`] - Request spans and latency logging
//! - [`timeout`] - Per-request time limits

pub mod timeout;
pub mod tracing;
