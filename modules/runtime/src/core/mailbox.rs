mod actor_mailbox;
mod mailbox_core;
mod mailbox_error;
mod mailbox_state;
mod mailbox_tick_report;

pub use actor_mailbox::ActorMailbox;
pub(crate) use mailbox_core::MailboxCore;
pub use mailbox_error::MailboxError;
pub use mailbox_state::MailboxState;
pub(crate) use mailbox_tick_report::MailboxTickReport;
