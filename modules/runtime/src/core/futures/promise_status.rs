/// Observable state of a promise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PromiseStatus {
  /// Not settled yet.
  InProgress,
  /// Settled with a value.
  Resolved,
  /// Settled with an error.
  Rejected,
}

impl core::fmt::Display for PromiseStatus {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let label = match self {
      | Self::InProgress => "in progress",
      | Self::Resolved => "resolved",
      | Self::Rejected => "rejected",
    };
    f.write_str(label)
  }
}
