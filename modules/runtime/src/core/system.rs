mod actor_system;
mod dead_letter;
mod dead_letter_reason;
mod dispatch_policy;
mod name_registry;
mod round_robin_policy;
mod spawn_error;
mod system_state;

pub use actor_system::ActorSystem;
pub use dead_letter::DeadLetter;
pub use dead_letter_reason::DeadLetterReason;
pub use dispatch_policy::DispatchPolicy;
use name_registry::NameRegistry;
pub use round_robin_policy::RoundRobinPolicy;
pub use spawn_error::SpawnError;
pub(crate) use system_state::SystemState;
