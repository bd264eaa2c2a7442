//! Failure reported by an executor callback.

use alloc::{borrow::Cow, string::String};
use core::fmt;

/// Failure raised by a callback running on an executor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskError {
  reason: Cow<'static, str>,
}

impl TaskError {
  /// Creates a task error with the provided reason.
  #[must_use]
  pub fn new(reason: impl Into<Cow<'static, str>>) -> Self {
    Self { reason: reason.into() }
  }

  /// Returns the failure reason.
  #[must_use]
  pub fn reason(&self) -> &str {
    &self.reason
  }
}

impl From<&'static str> for TaskError {
  fn from(reason: &'static str) -> Self {
    Self::new(reason)
  }
}

impl From<String> for TaskError {
  fn from(reason: String) -> Self {
    Self::new(reason)
  }
}

impl fmt::Display for TaskError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "task failed: {}", self.reason)
  }
}

impl core::error::Error for TaskError {}
