//! # Unit Components
//!
//! This module serves as the central hub for the tests of the machine's building blocks
//! and of short programs run end to end.

/// Unit tests for bit-width values and the error types.
pub mod common;

/// Unit tests for configuration parsing and defaults.
pub mod config;

/// Control machine, datapath, and timing tests.
///
/// This module covers state sequences, per-instruction cycle costs, jump flushing,
/// and the cycle counter.
pub mod core;
