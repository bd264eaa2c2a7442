mod executor_error;
mod task_error;

pub use executor_error::ExecutorError;
pub use task_error::TaskError;
