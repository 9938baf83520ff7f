//! Observability helpers.
//!
//! Tracing spans are emitted by the transport and services directly; this
//! module holds the redaction helpers that keep tokens out of log output.

pub mod logging;

pub use logging::{redact_form_fields, redact_token, Redacted};
