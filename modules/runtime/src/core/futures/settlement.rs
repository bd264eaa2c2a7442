use super::{PromiseError, PromiseStatus};

#[derive(Clone)]
pub(crate) enum Settlement<T> {
  Pending,
  Resolved(T),
  Rejected(PromiseError),
}

impl<T> Settlement<T> {
  pub(crate) const fn status(&self) -> PromiseStatus {
    match self {
      | Self::Pending => PromiseStatus::InProgress,
      | Self::Resolved(_) => PromiseStatus::Resolved,
      | Self::Rejected(_) => PromiseStatus::Rejected,
    }
  }
}
