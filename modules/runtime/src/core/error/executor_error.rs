//! Errors surfaced by executor operations.

use core::fmt;

use super::TaskError;

/// Errors returned by [`Executor`](crate::core::dispatch::Executor) operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExecutorError {
  /// A callback failed. Callbacks that had not run yet stay queued.
  TaskFailed(TaskError),
  /// Linking the executors would make the downstream chain cyclic.
  CycleDetected,
  /// The executor does not own a timer queue.
  NotScheduled,
}

impl fmt::Display for ExecutorError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::TaskFailed(error) => write!(f, "{error}"),
      | Self::CycleDetected => write!(f, "executor chain would contain a cycle"),
      | Self::NotScheduled => write!(f, "executor has no timer queue"),
    }
  }
}

impl core::error::Error for ExecutorError {
  fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
    match self {
      | Self::TaskFailed(error) => Some(error),
      | _ => None,
    }
  }
}

impl From<TaskError> for ExecutorError {
  fn from(error: TaskError) -> Self {
    Self::TaskFailed(error)
  }
}
