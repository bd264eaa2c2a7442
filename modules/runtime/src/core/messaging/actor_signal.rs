use super::SignalKind;
use crate::core::actor::ActorRef;

/// Lifecycle notification delivered ahead of user messages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActorSignal {
  /// A fresh actor instance was created.
  Started,
  /// The actor was asked to stop.
  Stopping,
  /// The actor was asked to restart.
  Restarting,
  /// The actor finished stopping; its instance is destroyed afterwards.
  Stopped,
  /// A child or watched actor stopped.
  Terminated(ActorRef),
}

impl ActorSignal {
  /// Returns the discriminant of this signal.
  #[must_use]
  pub const fn kind(&self) -> SignalKind {
    match self {
      | Self::Started => SignalKind::Started,
      | Self::Stopping => SignalKind::Stopping,
      | Self::Restarting => SignalKind::Restarting,
      | Self::Stopped => SignalKind::Stopped,
      | Self::Terminated(_) => SignalKind::Terminated,
    }
  }
}
