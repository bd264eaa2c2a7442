use cadence_utils_rs::core::sync::WeakShared;

use super::{Executor, ExecutorShared};

/// Non-owning executor handle.
///
/// Continuations that must not keep an executor alive (promises, actor references) hold one of
/// these and upgrade it on use.
#[derive(Clone, Default)]
pub struct WeakExecutor {
  shared: WeakShared<ExecutorShared>,
}

impl WeakExecutor {
  /// Returns a handle that never upgrades.
  #[must_use]
  pub const fn new() -> Self {
    Self { shared: WeakShared::new() }
  }

  pub(crate) const fn from_shared(shared: WeakShared<ExecutorShared>) -> Self {
    Self { shared }
  }

  /// Returns the executor if it is still alive.
  #[must_use]
  pub fn upgrade(&self) -> Option<Executor> {
    self.shared.upgrade().map(Executor::from_shared)
  }
}

impl core::fmt::Debug for WeakExecutor {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("WeakExecutor").field("alive", &(self.shared.strong_count() > 0)).finish()
  }
}
