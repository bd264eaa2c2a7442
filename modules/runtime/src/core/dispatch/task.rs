use alloc::boxed::Box;

use crate::core::error::TaskError;

/// Deferred unit of work queued on an executor.
pub type Task = Box<dyn FnOnce() -> Result<(), TaskError>>;
