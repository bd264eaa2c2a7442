//! Timer primitives shared by the scheduled executors.

mod clock_kind;
mod manual_clock;
mod timer_clock;
mod timer_id;
mod timer_queue;

pub use clock_kind::ClockKind;
pub use manual_clock::ManualClock;
pub use timer_clock::TimerClock;
pub use timer_id::TimerId;
pub use timer_queue::TimerQueue;
