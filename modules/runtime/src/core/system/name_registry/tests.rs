use super::NameRegistry;
use crate::core::{actor::Pid, system::SpawnError};

#[test]
fn register_and_resolve_alias() {
  let mut registry = NameRegistry::new();
  assert!(registry.register("worker", Pid::new(1)).is_ok());
  assert_eq!(registry.resolve("worker"), Some(Pid::new(1)));
  assert_eq!(registry.resolve("other"), None);
}

#[test]
fn duplicate_registration_fails() {
  let mut registry = NameRegistry::new();
  registry.register("worker", Pid::new(1)).unwrap();
  let error = registry.register("worker", Pid::new(2)).unwrap_err();
  assert!(matches!(error, SpawnError::AliasTaken(alias) if alias == "worker"));
}

#[test]
fn empty_alias_is_invalid() {
  let mut registry = NameRegistry::new();
  assert_eq!(registry.register("", Pid::new(1)), Err(SpawnError::InvalidAlias));
}

#[test]
fn remove_only_clears_matching_owner() {
  let mut registry = NameRegistry::new();
  registry.register("worker", Pid::new(1)).unwrap();
  assert!(!registry.remove("worker", Pid::new(2)));
  assert!(registry.remove("worker", Pid::new(1)));
  assert!(registry.register("worker", Pid::new(2)).is_ok());
}
