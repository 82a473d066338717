/// Instruction word helpers.
pub mod builder;

/// Simulator test harness.
pub mod harness;
