//! Failure returned by actor handlers.

use alloc::{borrow::Cow, string::String};
use core::fmt;

/// Failure raised while an actor handles a message or a signal.
///
/// The failure never escapes the mailbox: message failures are handed to the supervisor, signal
/// failures are logged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActorFailure {
  reason: Cow<'static, str>,
}

impl ActorFailure {
  /// Creates a failure with the provided reason.
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

impl From<&'static str> for ActorFailure {
  fn from(reason: &'static str) -> Self {
    Self::new(reason)
  }
}

impl From<String> for ActorFailure {
  fn from(reason: String) -> Self {
    Self::new(reason)
  }
}

impl fmt::Display for ActorFailure {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.reason)
  }
}

impl core::error::Error for ActorFailure {}
