use core::fmt;

use super::PromiseStatus;

/// Misuse of a promise's settlement API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromiseStateError {
  /// The promise is no longer in progress.
  AlreadySettled(PromiseStatus),
  /// The promise is following another promise and may only be settled by it.
  AlreadyAdopted,
}

impl fmt::Display for PromiseStateError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::AlreadySettled(status) => write!(f, "promise already {status}"),
      | Self::AlreadyAdopted => write!(f, "promise is locked to an adopted promise"),
    }
  }
}

impl core::error::Error for PromiseStateError {}
