//! Simulation driver and program loading.
//!
//! Provides the binary image loader and the `Simulator`, which pairs the CPU with run
//! statistics and drives the poll-then-step cycle.

/// Flat binary image loading.
pub mod loader;

/// Top-level driver.
pub mod simulator;

pub use simulator::Simulator;
