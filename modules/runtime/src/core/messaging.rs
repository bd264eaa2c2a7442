mod actor_message;
mod actor_signal;
mod signal_kind;

pub use actor_message::ActorMessage;
pub use actor_signal::ActorSignal;
pub use signal_kind::SignalKind;
