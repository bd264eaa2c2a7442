use alloc::string::String;
use core::fmt;

/// Errors returned when spawning an actor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpawnError {
  /// The requested alias is empty.
  InvalidAlias,
  /// Another live actor already uses the alias.
  AliasTaken(String),
}

impl fmt::Display for SpawnError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::InvalidAlias => write!(f, "actor alias must not be empty"),
      | Self::AliasTaken(alias) => write!(f, "actor alias '{alias}' is already registered"),
    }
  }
}

impl core::error::Error for SpawnError {}
