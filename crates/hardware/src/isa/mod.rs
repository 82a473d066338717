//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode table, the 32-bit instruction word layout, and the text
//! assembler/disassembler used by the loader and by trace output.

/// Line assembler for the textual program format.
pub mod asm;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction word layout and field extraction.
pub mod instruction;

/// Opcode encodings and the arithmetic/logic operation table.
pub mod opcode;

pub use instruction::{Instruction, InstructionBits};
pub use opcode::{AluOp, Opcode};
