use alloc::{boxed::Box, collections::VecDeque, vec::Vec};
use core::{
  cell::{Cell, RefCell},
  cmp,
};

use ahash::RandomState;
use cadence_utils_rs::core::sync::RcShared;
use hashbrown::HashMap;

use super::{DeadLetter, DispatchPolicy, NameRegistry};
use crate::core::{
  actor::{ActorRef, Pid},
  config::ActorSystemConfig,
  dispatch::ScheduledExecutor,
  logging::Logger,
  mailbox::ActorMailbox,
};

/// Shared core of an actor system. Actor references hold it weakly.
pub(crate) struct SystemState {
  pub(crate) config:           ActorSystemConfig,
  pub(crate) executor:         ScheduledExecutor,
  pub(crate) logger:           Logger,
  pub(crate) mailboxes:        RefCell<HashMap<Pid, RcShared<ActorMailbox>, RandomState>>,
  pub(crate) names:            RefCell<NameRegistry>,
  pub(crate) policy:           RefCell<Box<dyn DispatchPolicy>>,
  pub(crate) top_level:        RefCell<Vec<ActorRef>>,
  pub(crate) dead_letters:     RefCell<VecDeque<DeadLetter>>,
  pub(crate) next_pid:         Cell<u64>,
  pub(crate) dispatch_pending: Cell<bool>,
}

impl SystemState {
  pub(crate) fn new(executor: &ScheduledExecutor, config: ActorSystemConfig, policy: Box<dyn DispatchPolicy>) -> Self {
    let level = cmp::max(executor.logger().level(), config.log_level());
    let logger = executor.logger().with_level(level);
    Self {
      config,
      executor: executor.clone(),
      logger,
      mailboxes: RefCell::new(HashMap::with_hasher(RandomState::new())),
      names: RefCell::new(NameRegistry::new()),
      policy: RefCell::new(policy),
      top_level: RefCell::new(Vec::new()),
      dead_letters: RefCell::new(VecDeque::new()),
      next_pid: Cell::new(1),
      dispatch_pending: Cell::new(false),
    }
  }
}
