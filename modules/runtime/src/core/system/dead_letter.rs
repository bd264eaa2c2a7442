use super::DeadLetterReason;
use crate::core::{actor::Pid, messaging::ActorMessage};

/// Message that could not be delivered or handled.
#[derive(Clone, Debug)]
pub struct DeadLetter {
  recipient: Pid,
  message:   ActorMessage,
  reason:    DeadLetterReason,
}

impl DeadLetter {
  pub(crate) const fn new(recipient: Pid, message: ActorMessage, reason: DeadLetterReason) -> Self {
    Self { recipient, message, reason }
  }

  /// Returns the intended recipient.
  #[must_use]
  pub const fn recipient(&self) -> Pid {
    self.recipient
  }

  /// Returns the undelivered message.
  #[must_use]
  pub const fn message(&self) -> &ActorMessage {
    &self.message
  }

  /// Returns why the message was dropped.
  #[must_use]
  pub const fn reason(&self) -> DeadLetterReason {
    self.reason
  }
}
