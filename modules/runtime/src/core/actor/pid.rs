use core::fmt;

/// Unique actor identifier within one actor system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pid(u64);

impl Pid {
  /// Creates a pid from its raw value.
  #[must_use]
  pub const fn new(value: u64) -> Self {
    Self(value)
  }

  /// Returns the raw value.
  #[must_use]
  pub const fn value(&self) -> u64 {
    self.0
  }
}

impl fmt::Display for Pid {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "pid-{}", self.0)
  }
}
