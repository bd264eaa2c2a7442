use super::Promise;

/// Outcome of a successful promise handler.
///
/// Returning [`Resolution::Adopt`] makes the derived promise follow another promise instead of
/// resolving with the promise object itself.
pub enum Resolution<T> {
  /// Resolve with a plain value.
  Value(T),
  /// Follow the given promise.
  Adopt(Promise<T>),
}

impl<T> From<Promise<T>> for Resolution<T> {
  fn from(promise: Promise<T>) -> Self {
    Self::Adopt(promise)
  }
}
