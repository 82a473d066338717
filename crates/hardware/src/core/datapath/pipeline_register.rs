//! Pipeline Register (RPL).
//!
//! Holds the instruction being executed while the instruction register already holds the
//! next one. Every time it latches, it publishes the decoded fields on its [`FieldLines`],
//! which is how the control machine learns which opcode to dispatch.

use crate::core::control::FieldLines;
use crate::isa::instruction::Instruction;

/// The pipeline register.
#[derive(Debug)]
pub struct PipelineRegister {
    value: u32,
    lines: FieldLines,
}

impl PipelineRegister {
    /// Creates a register holding the all-zero word and publishing through `lines`.
    pub const fn new(lines: FieldLines) -> Self {
        Self { value: 0, lines }
    }

    /// Raw word currently committed.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Decoded view of the committed word.
    #[inline]
    pub fn instruction(&self) -> Instruction {
        Instruction::decode(self.value)
    }

    /// Performs this tick's update. Reset takes priority over a latch.
    ///
    /// # Arguments
    ///
    /// * `enable` - Activate the register.
    /// * `write` - Latch `input` (write direction).
    /// * `reset` - Clear to the all-zero word.
    /// * `input` - Instruction register contents.
    pub fn clock(&mut self, enable: bool, write: bool, reset: bool, input: u32) {
        if reset {
            self.commit(0);
        } else if enable && write {
            self.commit(input);
        }
    }

    fn commit(&mut self, word: u32) {
        self.value = word;
        let inst = Instruction::decode(word);
        self.lines.opcode.write(inst.opcode);
        self.lines.operand1.write(inst.operand1);
        self.lines.operand2.write(inst.operand2);
        self.lines.destination.write(inst.destination);
    }
}
