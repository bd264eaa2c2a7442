//! `no_std` + `alloc` building blocks.

/// Single-threaded shared ownership handles.
pub mod sync;
/// Timer identifiers, timer queue and clocks.
pub mod time;
