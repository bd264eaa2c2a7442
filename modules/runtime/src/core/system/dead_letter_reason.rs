/// Why a message ended up in the dead-letter log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeadLetterReason {
  /// The actor returned `Ok(false)` for it.
  Unhandled,
  /// The recipient was already stopped or never existed.
  RecipientStopped,
  /// The message was still queued when the recipient stopped.
  MailboxStopped,
}
