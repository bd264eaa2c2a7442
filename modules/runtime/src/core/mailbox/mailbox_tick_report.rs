use alloc::vec::Vec;

use crate::core::messaging::ActorMessage;

/// Outcome of one mailbox tick, consumed by the dispatcher.
#[derive(Default)]
pub(crate) struct MailboxTickReport {
  pub(crate) signals:   usize,
  pub(crate) messages:  usize,
  pub(crate) unhandled: Vec<ActorMessage>,
  pub(crate) dropped:   Vec<ActorMessage>,
  pub(crate) stopped:   bool,
  pub(crate) busy:      bool,
}
