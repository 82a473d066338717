//! Global System Constants.
//!
//! This module defines machine-wide constants used across the simulator. It includes:
//! 1. **Field Widths:** Bit widths of every instruction field and control signal.
//! 2. **Instruction Layout:** Shifts and masks for packing fields into a 32-bit word.
//! 3. **Storage Sizes:** Cell counts of the memories and the register file.

/// Width of the opcode field in bits.
pub const OPCODE_BITS: u32 = 4;

/// Width of the first and second source operands in bits.
pub const OPERAND_BITS: u32 = 8;

/// Width of the destination operand (register index or jump target) in bits.
pub const DEST_BITS: u32 = 9;

/// Width of the multiplexer select lines in bits.
pub const SELECT_BITS: u32 = 2;

/// Bit position shift for the opcode field.
pub const OPCODE_SHIFT: u32 = 28;

/// Bit position shift for the first source operand field.
pub const OPERAND1_SHIFT: u32 = 20;

/// Bit position shift for the second source operand field.
pub const OPERAND2_SHIFT: u32 = 12;

/// Bit position shift for the destination operand field.
pub const DEST_SHIFT: u32 = 0;

/// Reserved bits between the second operand and the destination (bits 11..9).
pub const RESERVED_MASK: u32 = 0x0000_0E00;

/// Number of addressable cells behind a 9-bit index.
///
/// Instruction memory, data memory and the register file all span the full
/// destination-operand space, so no index can fall outside them.
pub const ADDRESS_SPACE: usize = 1 << DEST_BITS;

/// Instruction memory capacity in words.
pub const INSTRUCTION_MEMORY_WORDS: usize = ADDRESS_SPACE;

/// Data memory capacity in 8-bit cells.
pub const DATA_MEMORY_CELLS: usize = ADDRESS_SPACE;

/// Register file capacity in 8-bit registers.
pub const REGISTER_COUNT: usize = ADDRESS_SPACE;

/// Bit of an 8-bit result that marks it as negative.
pub const SIGN_BIT: u32 = 0x80;
