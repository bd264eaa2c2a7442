use alloc::vec::Vec;

use crate::core::{actor::ActorRef, props::Props, supervision::SupervisorStrategy};

/// Mailbox data that actor handlers may touch through their context.
pub(crate) struct MailboxCore {
  pub(crate) self_ref:       ActorRef,
  pub(crate) parent:         Option<ActorRef>,
  pub(crate) props:          Props,
  pub(crate) children:       Vec<ActorRef>,
  pub(crate) supervisor:     SupervisorStrategy,
  pub(crate) stop_requested: bool,
}

impl MailboxCore {
  pub(crate) fn new(self_ref: ActorRef, parent: Option<ActorRef>, props: Props) -> Self {
    let supervisor = props.supervisor().clone();
    Self { self_ref, parent, props, children: Vec::new(), supervisor, stop_requested: false }
  }

  pub(crate) fn remove_child(&mut self, child: &ActorRef) -> bool {
    let before = self.children.len();
    self.children.retain(|candidate| candidate != child);
    self.children.len() != before
  }
}
