//! Built-in supervisors.


use alloc::rc::Rc;
use core::fmt;

use cadence_utils_rs::core::sync::RcShared;

use super::{Supervisor, SupervisorDirective};
use crate::core::actor::{ActorContext, ActorFailure};

/// Supervisor attached to an actor through its props.
#[derive(Clone, Default)]
pub enum SupervisorStrategy {
  /// Stop the failed actor. Queued messages become dead letters.
  #[default]
  Stop,
  /// Skip the failed message.
  Resume,
  /// Retry the failed message on the next tick.
  Retry,
  /// Restart the actor with a fresh instance and redeliver the failed message to it.
  Restart,
  /// User-provided supervisor.
  Custom(RcShared<dyn Supervisor>),
}

impl SupervisorStrategy {
  /// Wraps a user-provided supervisor.
  #[must_use]
  pub fn custom<S: Supervisor + 'static>(supervisor: S) -> Self {
    let supervisor: Rc<dyn Supervisor> = Rc::new(supervisor);
    Self::Custom(RcShared::from_rc(supervisor))
  }

  /// Wraps a supervising closure.
  #[must_use]
  pub fn from_fn<F>(supervisor: F) -> Self
  where
    F: Fn(&mut ActorContext<'_>, &ActorFailure) -> SupervisorDirective + 'static, {
    Self::custom(supervisor)
  }
}

impl Supervisor for SupervisorStrategy {
  fn supervise(&self, ctx: &mut ActorContext<'_>, failure: &ActorFailure) -> SupervisorDirective {
    match self {
      | Self::Stop => {
        ctx.stop_self();
        SupervisorDirective::Halt
      },
      | Self::Resume => SupervisorDirective::Resume,
      | Self::Retry => SupervisorDirective::Retry,
      | Self::Restart => {
        ctx.restart();
        SupervisorDirective::Halt
      },
      | Self::Custom(supervisor) => supervisor.supervise(ctx, failure),
    }
  }
}

impl fmt::Debug for SupervisorStrategy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Stop => f.write_str("Stop"),
      | Self::Resume => f.write_str("Resume"),
      | Self::Retry => f.write_str("Retry"),
      | Self::Restart => f.write_str("Restart"),
      | Self::Custom(_) => f.write_str("Custom"),
    }
  }
}
