use alloc::rc::Rc;
use core::{fmt, ops::Deref};

use super::WeakShared;


/// Shared ownership wrapper backed by `alloc::rc::Rc`.
///
/// The runtime is strictly single-threaded, so this handle deliberately omits any thread-safety
/// guarantees. Equality is identity: two handles are equal when they point at the same
/// allocation.
pub struct RcShared<T: ?Sized>(Rc<T>);

impl<T> RcShared<T> {
  /// Creates a new `RcShared` by wrapping the provided value.
  #[must_use]
  pub fn new(value: T) -> Self {
    Self(Rc::new(value))
  }

  /// Returns the inner value if this is the only strong handle.
  ///
  /// # Errors
  ///
  /// Returns the handle unchanged when other strong handles are still alive.
  pub fn try_unwrap(self) -> Result<T, Self> {
    Rc::try_unwrap(self.0).map_err(Self)
  }
}

impl<T: ?Sized> RcShared<T> {
  /// Wraps an existing `Rc` in the shared wrapper.
  ///
  /// This is the way to build trait-object handles: `RcShared::from_rc(Rc::new(v) as Rc<dyn Trait>)`.
  #[must_use]
  pub const fn from_rc(inner: Rc<T>) -> Self {
    Self(inner)
  }

  /// Creates a non-owning handle to the same allocation.
  #[must_use]
  pub fn downgrade(&self) -> WeakShared<T> {
    WeakShared::from_weak(Rc::downgrade(&self.0))
  }

  /// Returns `true` when both handles point at the same allocation.
  #[must_use]
  pub fn ptr_eq(&self, other: &Self) -> bool {
    Rc::ptr_eq(&self.0, &other.0)
  }

  /// Returns the number of strong handles pointing at this allocation.
  #[must_use]
  pub fn strong_count(&self) -> usize {
    Rc::strong_count(&self.0)
  }
}

impl<T: ?Sized> Clone for RcShared<T> {
  fn clone(&self) -> Self {
    Self(self.0.clone())
  }
}

impl<T: ?Sized> Deref for RcShared<T> {
  type Target = T;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl<T: ?Sized> PartialEq for RcShared<T> {
  fn eq(&self, other: &Self) -> bool {
    self.ptr_eq(other)
  }
}

impl<T: ?Sized> Eq for RcShared<T> {}

impl<T: ?Sized> fmt::Debug for RcShared<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("RcShared").field("strong", &self.strong_count()).finish()
  }
}
