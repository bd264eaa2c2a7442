mod actor_system_config;
mod config_error;

pub use actor_system_config::ActorSystemConfig;
pub use config_error::ConfigError;
