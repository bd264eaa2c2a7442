//! Rejection reasons carried by promises.

use alloc::{borrow::Cow, string::String};
use core::fmt;

/// Reason a promise was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromiseError {
  /// Rejected explicitly or by a failing handler.
  Rejected(Cow<'static, str>),
  /// The promise returned by [`Promise::timeout`](super::Promise::timeout) expired first.
  TimedOut {
    /// Delay that elapsed.
    delay: u64,
  },
  /// The promise was asked to adopt itself.
  Cycle,
}

impl PromiseError {
  /// Creates a [`PromiseError::Rejected`] with the provided reason.
  #[must_use]
  pub fn rejected(reason: impl Into<Cow<'static, str>>) -> Self {
    Self::Rejected(reason.into())
  }
}

impl From<&'static str> for PromiseError {
  fn from(reason: &'static str) -> Self {
    Self::rejected(reason)
  }
}

impl From<String> for PromiseError {
  fn from(reason: String) -> Self {
    Self::rejected(reason)
  }
}

impl fmt::Display for PromiseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Rejected(reason) => write!(f, "promise rejected: {reason}"),
      | Self::TimedOut { delay } => write!(f, "promise timed out after {delay}"),
      | Self::Cycle => write!(f, "promise cannot adopt itself"),
    }
  }
}

impl core::error::Error for PromiseError {}
