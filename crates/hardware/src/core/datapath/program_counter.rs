//! Program Counter.
//!
//! A 9-bit counter with an increment enable and an overwrite strobe. The overwrite wins when
//! both are asserted. The counter wraps from 511 to 0.

use crate::common::U9;

/// The program counter.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProgramCounter {
    value: U9,
}

impl ProgramCounter {
    /// Creates a counter at address 0.
    pub const fn new() -> Self {
        Self { value: U9::ZERO }
    }

    /// Address the counter currently points at.
    #[inline]
    pub const fn value(&self) -> U9 {
        self.value
    }

    /// Commits this tick's update.
    ///
    /// # Arguments
    ///
    /// * `enable` - Increment strobe.
    /// * `load` - Overwrite strobe.
    /// * `jump_value` - Value taken when `load` is asserted.
    pub const fn clock(&mut self, enable: bool, load: bool, jump_value: U9) {
        if load {
            self.value = jump_value;
        } else if enable {
            self.value = self.value.wrapping_inc();
        }
    }
}
