//! Non-owning counterpart of [`RcShared`].

use alloc::rc::Weak;
use core::fmt;

use super::RcShared;

#[cfg(test)]
mod tests;

/// Weak reference wrapper backed by [`alloc::rc::Weak`].
pub struct WeakShared<T: ?Sized>(Weak<T>);

impl<T> WeakShared<T> {
  /// Creates a `WeakShared` that points to nothing.
  #[must_use]
  pub const fn new() -> Self {
    Self(Weak::new())
  }
}

impl<T: ?Sized> WeakShared<T> {
  /// Wraps an existing [`Weak`] inside the shared wrapper.
  #[must_use]
  pub const fn from_weak(inner: Weak<T>) -> Self {
    Self(inner)
  }

  /// Attempts to upgrade the weak reference to an [`RcShared`].
  ///
  /// Returns `None` if the inner value has been dropped.
  #[must_use]
  pub fn upgrade(&self) -> Option<RcShared<T>> {
    self.0.upgrade().map(RcShared::from_rc)
  }

  /// Returns `true` when both handles point at the same allocation.
  #[must_use]
  pub fn ptr_eq(&self, other: &Self) -> bool {
    Weak::ptr_eq(&self.0, &other.0)
  }

  /// Returns the number of strong handles pointing to this allocation.
  ///
  /// Returns 0 if the value has been dropped.
  #[must_use]
  pub fn strong_count(&self) -> usize {
    self.0.strong_count()
  }
}

impl<T> Default for WeakShared<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: ?Sized> Clone for WeakShared<T> {
  fn clone(&self) -> Self {
    Self(self.0.clone())
  }
}

impl<T: ?Sized> fmt::Debug for WeakShared<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("WeakShared").field("strong", &self.strong_count()).finish()
  }
}
