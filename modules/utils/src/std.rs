//! Standard-library backed implementations.

/// Wall-clock backed timer clocks.
pub mod time;
