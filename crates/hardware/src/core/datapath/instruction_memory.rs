//! Instruction Memory.
//!
//! Word-addressed program store spanning the full 9-bit address space. When enabled for
//! reading it presents the word at the program counter on its output; when disabled the
//! output holds the last word read.

use crate::common::LoadError;
use crate::common::U9;
use crate::common::constants::INSTRUCTION_MEMORY_WORDS;

/// The instruction memory.
#[derive(Clone, Debug)]
pub struct InstructionMemory {
    words: Vec<u32>,
    output: u32,
}

impl Default for InstructionMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl InstructionMemory {
    /// Creates a memory filled with `HALT` words.
    pub fn new() -> Self {
        Self {
            words: vec![0; INSTRUCTION_MEMORY_WORDS],
            output: 0,
        }
    }

    /// Copies a program image to address 0; the rest of memory is cleared.
    pub fn load(&mut self, program: &[u32]) -> Result<(), LoadError> {
        if program.len() > self.words.len() {
            return Err(LoadError::TooLarge {
                words: program.len(),
                capacity: self.words.len(),
            });
        }
        self.words.fill(0);
        self.words[..program.len()].copy_from_slice(program);
        Ok(())
    }

    /// Word presented on the output port.
    #[inline]
    pub const fn output(&self) -> u32 {
        self.output
    }

    /// Performs this tick's access.
    ///
    /// # Arguments
    ///
    /// * `enable` - Activate the memory.
    /// * `write` - Store `data_in` instead of reading.
    /// * `address` - Program counter value.
    /// * `data_in` - Word to store in write direction.
    pub fn clock(&mut self, enable: bool, write: bool, address: U9, data_in: u32) {
        if !enable {
            return;
        }
        if write {
            self.words[address.index()] = data_in;
        } else {
            self.output = self.words[address.index()];
        }
    }
}
