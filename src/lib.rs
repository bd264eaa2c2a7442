#![deny(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![no_std]

//! Facade over the cadence workspace crates.
//!
//! ```
//! use cadence_rs::prelude::*;
//!
//! let executor = Executor::new();
//! let promise = Promise::new(&executor);
//! let doubled = promise.map(|x: u32| x * 2);
//! promise.resolve(21).unwrap();
//! executor.run().unwrap();
//! assert_eq!(doubled.value(), Some(42));
//! ```

#[cfg(test)]
mod tests;

pub use cadence_runtime_rs as runtime;
pub use cadence_utils_rs as utils;

/// Types needed by most programs.
pub mod prelude {
  pub use cadence_runtime_rs::core::{
    actor::{Actor, ActorContext, ActorFailure, ActorRef, Behavior, BehaviorActor, Pid},
    config::ActorSystemConfig,
    dispatch::{Executor, ScheduledExecutor},
    error::{ExecutorError, TaskError},
    futures::{Promise, PromiseError, PromiseStatus, Resolution},
    logging::{LogLevel, Logger, LoggerWriter},
    messaging::{ActorMessage, ActorSignal, SignalKind},
    props::Props,
    supervision::{Supervisor, SupervisorDirective, SupervisorStrategy},
    system::{ActorSystem, DeadLetter, DeadLetterReason},
  };
  #[cfg(feature = "std")]
  pub use cadence_runtime_rs::std::logging::TracingLoggerWriter;
  pub use cadence_utils_rs::core::time::{ClockKind, ManualClock, TimerClock, TimerId};
  #[cfg(feature = "std")]
  pub use cadence_utils_rs::std::time::StdClock;
}

/// Returns the version of this crate.
#[must_use]
pub const fn crate_version() -> &'static str {
  env!("CARGO_PKG_VERSION")
}
