//! Tracks actor aliases within one actor system.

#[cfg(test)]
mod tests;

use alloc::{borrow::ToOwned, string::String};

use ahash::RandomState;
use hashbrown::{HashMap, hash_map::Entry};

use super::SpawnError;
use crate::core::actor::Pid;

/// Maintains the mapping between aliases and pids of live actors.
pub(crate) struct NameRegistry {
  entries: HashMap<String, Pid, RandomState>,
}

impl Default for NameRegistry {
  fn default() -> Self {
    Self { entries: HashMap::with_hasher(RandomState::new()) }
  }
}

impl NameRegistry {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  /// Registers `alias` for `pid` unless another actor already holds it.
  pub(crate) fn register(&mut self, alias: &str, pid: Pid) -> Result<(), SpawnError> {
    if alias.is_empty() {
      return Err(SpawnError::InvalidAlias);
    }
    match self.entries.entry(alias.to_owned()) {
      | Entry::Occupied(entry) => Err(SpawnError::AliasTaken(entry.key().clone())),
      | Entry::Vacant(entry) => {
        entry.insert(pid);
        Ok(())
      },
    }
  }

  pub(crate) fn resolve(&self, alias: &str) -> Option<Pid> {
    self.entries.get(alias).copied()
  }

  /// Removes `alias` if it still points at `pid`.
  pub(crate) fn remove(&mut self, alias: &str, pid: Pid) -> bool {
    if self.resolve(alias) == Some(pid) {
      self.entries.remove(alias);
      true
    } else {
      false
    }
  }
}
