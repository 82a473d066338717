//! Instruction encoding and decoding utilities.
//!
//! A 32-bit instruction word packs four fields:
//!
//! | Bits   | Field               | Width |
//! |--------|---------------------|-------|
//! | 31..28 | opcode              | 4     |
//! | 27..20 | operand 1           | 8     |
//! | 19..12 | operand 2           | 8     |
//! | 11..9  | reserved            | 3     |
//! | 8..0   | destination operand | 9     |
//!
//! The all-zero word decodes to `HALT`.

use crate::common::constants::{DEST_SHIFT, OPCODE_SHIFT, OPERAND1_SHIFT, OPERAND2_SHIFT};
use crate::common::{U4, U8, U9};
use crate::isa::opcode::Opcode;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 28-31).
    fn opcode_field(&self) -> U4;

    /// Extracts the first source operand (bits 20-27).
    fn operand1(&self) -> U8;

    /// Extracts the second source operand (bits 12-19).
    fn operand2(&self) -> U8;

    /// Extracts the destination operand (bits 0-8): a register index or jump target.
    fn destination(&self) -> U9;

    /// Decodes the opcode field.
    fn opcode(&self) -> Opcode {
        Opcode::decode(self.opcode_field())
    }
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode_field(&self) -> U4 {
        U4::masked(self >> OPCODE_SHIFT)
    }

    #[inline(always)]
    fn operand1(&self) -> U8 {
        U8::masked(self >> OPERAND1_SHIFT)
    }

    #[inline(always)]
    fn operand2(&self) -> U8 {
        U8::masked(self >> OPERAND2_SHIFT)
    }

    #[inline(always)]
    fn destination(&self) -> U9 {
        U9::masked(self >> DEST_SHIFT)
    }
}

/// An instruction split into its fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Instruction {
    /// Raw 4-bit opcode.
    pub opcode: U4,
    /// Source operand / immediate value.
    pub operand1: U8,
    /// Second source operand.
    pub operand2: U8,
    /// Register index or jump target.
    pub destination: U9,
}

impl Instruction {
    /// Builds an instruction from a decoded opcode and its operands.
    pub const fn new(opcode: Opcode, operand1: U8, operand2: U8, destination: U9) -> Self {
        Self {
            opcode: opcode.encode(),
            operand1,
            operand2,
            destination,
        }
    }

    /// Splits a word into fields. Reserved bits are dropped.
    pub fn decode(word: u32) -> Self {
        Self {
            opcode: word.opcode_field(),
            operand1: word.operand1(),
            operand2: word.operand2(),
            destination: word.destination(),
        }
    }

    /// Packs the fields into a word with the reserved bits clear.
    pub const fn encode(self) -> u32 {
        (self.opcode.get() << OPCODE_SHIFT)
            | (self.operand1.get() << OPERAND1_SHIFT)
            | (self.operand2.get() << OPERAND2_SHIFT)
            | (self.destination.get() << DEST_SHIFT)
    }

    /// Decoded opcode.
    pub const fn op(self) -> Opcode {
        Opcode::decode(self.opcode)
    }
}
