mod supervisor_directive;
mod supervisor_strategy;
mod supervisor_trait;

pub use supervisor_directive::SupervisorDirective;
pub use supervisor_strategy::SupervisorStrategy;
pub use supervisor_trait::Supervisor;
