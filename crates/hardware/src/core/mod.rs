//! Core processor implementation.
//!
//! This module contains the machine itself: the signal substrate that connects components,
//! the control finite-state machine, and the datapath it drives.

/// Control finite-state machine and its wire bundles.
pub mod control;

/// Program counter, memories, registers, multiplexers and ALU.
pub mod datapath;

/// Single-writer signal cells.
pub mod signal;

/// Clocked component interface.
pub mod traits;

pub use self::control::ControlFsm;
pub use self::datapath::Datapath;
