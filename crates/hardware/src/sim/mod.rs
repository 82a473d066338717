//! Simulation driver and program loading.
//!
//! Provides the tick scheduler, the simulator that applies the run policy on top of it, and
//! the loader that turns program text into an image.

/// Program text assembly and file loading.
pub mod loader;

/// Tick scheduler (control step, then datapath evaluation).
pub mod scheduler;

/// Top-level simulator with run policy and statistics.
pub mod simulator;

pub use self::loader::{Program, load_program, parse_program};
pub use self::scheduler::Scheduler;
pub use self::simulator::Simulator;
