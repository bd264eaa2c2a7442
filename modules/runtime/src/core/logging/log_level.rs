//! Log severity levels used by the runtime.

/// Severity levels recognised by the runtime logger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
  /// Detailed trace information.
  Trace,
  /// Debug information useful during development.
  Debug,
  /// General informational messages.
  Info,
  /// Warnings indicating potential issues.
  Warn,
  /// Errors signalling failures that require attention.
  Error,
}
