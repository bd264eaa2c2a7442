use super::{ActorContext, ActorFailure};
use crate::core::messaging::{ActorMessage, ActorSignal};

/// Message and signal handler driven by a mailbox.
pub trait Actor {
  /// Handles a user message.
  ///
  /// Returns `Ok(false)` when the message is not understood; it is then recorded as a dead
  /// letter.
  ///
  /// # Errors
  ///
  /// A failure is passed to the actor's supervisor, which decides how the mailbox proceeds.
  fn receive(&mut self, ctx: &mut ActorContext<'_>, message: &ActorMessage) -> Result<bool, ActorFailure>;

  /// Handles a lifecycle signal. Ignores every signal by default.
  ///
  /// # Errors
  ///
  /// A failure on `Started` stops the actor. Failures on `Restarting` go to the supervisor.
  /// Other failures are logged and the lifecycle proceeds.
  fn signal(&mut self, ctx: &mut ActorContext<'_>, signal: &ActorSignal) -> Result<(), ActorFailure> {
    let _ = (ctx, signal);
    Ok(())
  }
}
