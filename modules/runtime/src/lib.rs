#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![cfg_attr(not(test), deny(clippy::redundant_clone))]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::manual_map)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![no_std]

//! Single-threaded cooperative runtime.
//!
//! Independent units of deferred work (callbacks, timers, promise continuations and actor message
//! handlers) interleave deterministically on one thread:
//!
//! - [`core::dispatch::Executor`] drains a FIFO callback queue in snapshot batches and links to
//!   downstream executors.
//! - [`core::dispatch::ScheduledExecutor`] adds an expiry-ordered timer queue and a logical (or
//!   wall-clock) time source.
//! - [`core::futures::Promise`] is a tri-state asynchronous value whose continuations always run
//!   as executor callbacks.
//! - [`core::system::ActorSystem`] hosts supervised actors whose mailboxes run a lifecycle state
//!   machine and contain every failure behind their supervisor.
//!
//! The `core` module is `no_std` + `alloc`. The `std` feature adds a `tracing` bridge for the
//! runtime's log events.

extern crate alloc;

pub mod core;
#[cfg(feature = "std")]
pub mod std;
