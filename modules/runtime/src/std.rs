//! Integrations that need the standard library.

/// `tracing` bridge for runtime log events.
pub mod logging;
