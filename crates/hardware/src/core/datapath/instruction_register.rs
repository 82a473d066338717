//! Instruction Register.
//!
//! Holds the word most recently fetched from instruction memory until the control unit
//! commits it to the pipeline register.

/// The instruction register.
#[derive(Clone, Copy, Debug, Default)]
pub struct InstructionRegister {
    value: u32,
}

impl InstructionRegister {
    /// Creates an empty (`HALT`) register.
    pub const fn new() -> Self {
        Self { value: 0 }
    }

    /// Word currently held.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Latches `input` when enabled in write direction; holds otherwise.
    pub const fn clock(&mut self, enable: bool, write: bool, input: u32) {
        if enable && write {
            self.value = input;
        }
    }
}
