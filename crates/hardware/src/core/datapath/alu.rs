//! Arithmetic Logic Unit (ALU).
//!
//! Computes 8-bit wrapping results for the ALU opcodes and drives the N and Z condition
//! flags read by the control machine for `JN`/`JZ`. The result is latched so the write-back
//! step on the following tick can store it.

use crate::common::U8;
use crate::common::constants::SIGN_BIT;
use crate::core::control::FlagLines;
use crate::isa::opcode::Opcode;

/// The ALU with its result latch and flag outputs.
#[derive(Debug)]
pub struct Alu {
    result: U8,
    flags: FlagLines,
}

impl Alu {
    /// Creates an ALU with a zero result, publishing flags through `flags`.
    pub const fn new(flags: FlagLines) -> Self {
        Self {
            result: U8::ZERO,
            flags,
        }
    }

    /// Latched result.
    #[inline]
    pub const fn result(&self) -> U8 {
        self.result
    }

    /// Negative flag as currently driven.
    pub fn negative(&self) -> bool {
        self.flags.negative.current()
    }

    /// Zero flag as currently driven.
    pub fn zero(&self) -> bool {
        self.flags.zero.current()
    }

    /// Computes `a op b` and updates the flags. Non-ALU opcodes leave everything unchanged.
    ///
    /// # Arguments
    ///
    /// * `opcode` - Opcode of the committed instruction.
    /// * `a` - Register file port A.
    /// * `b` - Register file port B (ignored by `NOT`).
    pub fn evaluate(&mut self, opcode: Opcode, a: U8, b: U8) {
        let Opcode::Alu(op) = opcode else {
            return;
        };
        let value = op.apply(a.get() as u8, b.get() as u8);
        self.result = U8::masked(u32::from(value));
        self.flags.negative.write(u32::from(value) & SIGN_BIT != 0);
        self.flags.zero.write(value == 0);
    }

    /// Clears both condition flags.
    pub fn reset_flags(&mut self) {
        self.flags.negative.write(false);
        self.flags.zero.write(false);
    }
}
