//! Register File.
//!
//! This module provides the machine's register bank. It provides:
//! 1. **Storage:** 512 eight-bit registers, all writable (there is no hardwired zero register).
//! 2. **Read Ports:** Two output ports sampled together on a read access.
//! 3. **Observability:** Dumping a prefix of the bank for end-of-run reports.

use crate::common::constants::REGISTER_COUNT;
use crate::common::{U8, U9};

/// Register bank with two read ports and one write port.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    regs: Vec<U8>,
    port_a: U8,
    port_b: U8,
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file with every register and both ports at zero.
    pub fn new() -> Self {
        Self {
            regs: vec![U8::ZERO; REGISTER_COUNT],
            port_a: U8::ZERO,
            port_b: U8::ZERO,
        }
    }

    /// Reads a register directly.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-511).
    #[inline]
    pub fn get(&self, idx: U9) -> U8 {
        self.regs[idx.index()]
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-511).
    /// * `val` - The 8-bit value to store.
    #[inline]
    pub fn write(&mut self, idx: U9, val: U8) {
        self.regs[idx.index()] = val;
    }

    /// Samples two registers onto the read ports.
    ///
    /// Operand fields are eight bits wide, so only `r0`-`r255` are reachable from here.
    pub fn read(&mut self, a: U8, b: U8) {
        self.port_a = self.regs[a.index()];
        self.port_b = self.regs[b.index()];
    }

    /// Value on read port A (first source, also the store data).
    #[inline]
    pub const fn port_a(&self) -> U8 {
        self.port_a
    }

    /// Value on read port B.
    #[inline]
    pub const fn port_b(&self) -> U8 {
        self.port_b
    }

    /// All registers, lowest index first.
    pub fn as_slice(&self) -> &[U8] {
        &self.regs
    }

    /// Prints the first `count` registers, four per line.
    pub fn dump(&self, count: usize) {
        for (row, chunk) in self.regs[..count.min(self.regs.len())].chunks(4).enumerate() {
            let line: Vec<String> = chunk
                .iter()
                .enumerate()
                .map(|(col, val)| format!("r{:<3}={:#04x}", row * 4 + col, val.get()))
                .collect();
            println!("{}", line.join(" "));
        }
    }
}
