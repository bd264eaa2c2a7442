use core::fmt;

use crate::core::actor::Pid;

/// Errors returned when queueing onto a mailbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MailboxError {
  /// The mailbox reached its terminal state.
  Stopped(Pid),
}

impl fmt::Display for MailboxError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Stopped(pid) => write!(f, "mailbox of {pid} is stopped"),
    }
  }
}

impl core::error::Error for MailboxError {}
