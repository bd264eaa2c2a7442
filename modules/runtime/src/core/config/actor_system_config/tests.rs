use crate::core::{
  config::{ActorSystemConfig, ConfigError},
  logging::LogLevel,
};

#[test]
fn test_actor_system_config_default() {
  let config = ActorSystemConfig::default();
  assert_eq!(config.system_name(), "cadence");
  assert_eq!(config.throughput(), 64);
  assert_eq!(config.dead_letter_capacity(), 256);
  assert_eq!(config.log_level(), LogLevel::Info);
  assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_actor_system_config_builders() {
  let config = ActorSystemConfig::default()
    .with_system_name("orders")
    .with_throughput(1)
    .with_dead_letter_capacity(8)
    .with_log_level(LogLevel::Trace);
  assert_eq!(config.system_name(), "orders");
  assert_eq!(config.throughput(), 1);
  assert_eq!(config.dead_letter_capacity(), 8);
  assert_eq!(config.log_level(), LogLevel::Trace);
}

#[test]
fn test_actor_system_config_validation() {
  assert_eq!(ActorSystemConfig::default().with_system_name("").validate(), Err(ConfigError::EmptySystemName));
  assert_eq!(ActorSystemConfig::default().with_throughput(0).validate(), Err(ConfigError::ZeroThroughput));
  assert_eq!(
    ActorSystemConfig::default().with_dead_letter_capacity(0).validate(),
    Err(ConfigError::ZeroDeadLetterCapacity)
  );
}
