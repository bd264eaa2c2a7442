mod rc_shared;
mod weak_shared;

pub use rc_shared::RcShared;
pub use weak_shared::WeakShared;
