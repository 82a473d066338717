//! Pipelined CPU simulator library.
//!
//! This crate implements a cycle-accurate simulator for a small pipelined processor with:
//! 1. **Signals:** Single-writer wires connecting the control machine and the datapath.
//! 2. **Control:** A ten-state Mealy machine with opcode dispatch, jump flush, and a cycle counter.
//! 3. **Datapath:** Program counter, memories, instruction and pipeline registers, register file, ALU.
//! 4. **ISA:** The 32-bit instruction word, opcode table, and text assembler/disassembler.
//! 5. **Simulation:** Scheduler, run policy, loader, configuration, and statistics.

/// Common types and constants (bit-width values, field layout, errors).
pub mod common;
/// Simulator configuration (defaults, general and report sections).
pub mod config;
/// Machine core (signals, control machine, datapath).
pub mod core;
/// Instruction set (opcodes, instruction word, assembler, disassembler).
pub mod isa;
/// Scheduler, simulator, and program loader.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
