mod std_clock;

pub use std_clock::StdClock;
