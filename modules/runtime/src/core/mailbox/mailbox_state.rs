/// Lifecycle state of an actor mailbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MailboxState {
  /// Spawned; the `Started` signal has not been handled yet.
  Starting,
  /// Idle and accepting message dispatch.
  Alive,
  /// Dispatching messages.
  Running,
  /// Running a stop or restart handler.
  Suspended,
  /// Waiting for children to terminate before stopping.
  Stopping,
  /// Waiting for children to terminate before restarting.
  Restarting,
  /// Terminal. Nothing is accepted any more.
  Stopped,
}

impl MailboxState {
  /// Returns `true` in the terminal state.
  #[must_use]
  pub const fn is_stopped(self) -> bool {
    matches!(self, Self::Stopped)
  }
}

impl core::fmt::Display for MailboxState {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let label = match self {
      | Self::Starting => "starting",
      | Self::Alive => "alive",
      | Self::Running => "running",
      | Self::Suspended => "suspended",
      | Self::Stopping => "stopping",
      | Self::Restarting => "restarting",
      | Self::Stopped => "stopped",
    };
    f.write_str(label)
  }
}
