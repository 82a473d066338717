/// Exact control-state sequences for short programs.
pub mod control_sequences;

/// Cycle counter properties.
pub mod cycle_counter;


/// Jump resolution and pipeline flush.
pub mod jumps;
