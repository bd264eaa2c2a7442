//! `no_std` + `alloc` runtime: executors, promises and actors.

/// Actor trait, references, contexts and behaviors.
pub mod actor;
/// Actor system configuration.
pub mod config;
/// Callback executors and the timer-driven scheduled executor.
pub mod dispatch;
/// Error types shared by the executors.
pub mod error;
/// Promises layered on executors.
pub mod futures;
/// Runtime log events and sinks.
pub mod logging;
/// Actor mailboxes and their lifecycle state machine.
pub mod mailbox;
/// Messages and signals routed to actors.
pub mod messaging;
/// Reusable spawn recipes.
pub mod props;
/// Supervision strategies.
pub mod supervision;
/// Actor system: registry, routing and mailbox dispatch.
pub mod system;
