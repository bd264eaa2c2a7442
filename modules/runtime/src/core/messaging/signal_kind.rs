/// Discriminant of an [`ActorSignal`](super::ActorSignal), used to key signal handlers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignalKind {
  /// See [`ActorSignal::Started`](super::ActorSignal::Started).
  Started,
  /// See [`ActorSignal::Stopping`](super::ActorSignal::Stopping).
  Stopping,
  /// See [`ActorSignal::Restarting`](super::ActorSignal::Restarting).
  Restarting,
  /// See [`ActorSignal::Stopped`](super::ActorSignal::Stopped).
  Stopped,
  /// See [`ActorSignal::Terminated`](super::ActorSignal::Terminated).
  Terminated,
}

impl SignalKind {
  /// Number of signal kinds.
  pub const COUNT: usize = 5;

  /// Returns a dense index in `0..COUNT`.
  #[must_use]
  pub const fn index(self) -> usize {
    self as usize
  }
}
