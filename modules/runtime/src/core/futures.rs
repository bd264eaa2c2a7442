mod promise;
mod promise_error;
mod promise_state_error;
mod promise_status;
mod resolution;
mod settlement;

pub use promise::Promise;
pub use promise_error::PromiseError;
pub use promise_state_error::PromiseStateError;
pub use promise_status::PromiseStatus;
pub use resolution::Resolution;
use settlement::Settlement;

const LOG_ORIGIN: &str = "promise";
