#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![cfg_attr(not(test), deny(clippy::redundant_clone))]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_let_else)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::len_without_is_empty)]
#![no_std]

//! Utility layer shared by the cadence runtime crates.
//!
//! The `core` module is `no_std` + `alloc` and holds the single-threaded shared handles and the
//! timer primitives (identifiers, the lazily cancelled timer queue and the clock abstraction).
//! The `std` module, enabled by the `std` feature, binds the clock abstraction to
//! `std::time::Instant`.

extern crate alloc;

pub mod core;
#[cfg(feature = "std")]
pub mod std;
