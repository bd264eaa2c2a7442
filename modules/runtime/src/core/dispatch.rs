mod executor;
mod executor_shared;
mod scheduled_executor;
mod task;
mod timer_state;
mod weak_executor;

pub use executor::Executor;
use executor_shared::ExecutorShared;
pub use scheduled_executor::ScheduledExecutor;
pub use task::Task;
use timer_state::TimerState;
pub use weak_executor::WeakExecutor;

const LOG_ORIGIN: &str = "executor";
