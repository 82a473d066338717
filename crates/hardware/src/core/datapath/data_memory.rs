//! Data Memory.
//!
//! 512 eight-bit cells. A read access drives the addressed cell onto the output; a write
//! access stores the register file's port A at the address chosen by the address mux.

use crate::common::constants::DATA_MEMORY_CELLS;
use crate::common::{U8, U9};

/// The data memory.
#[derive(Clone, Debug)]
pub struct DataMemory {
    cells: Vec<U8>,
    output: U8,
}

impl Default for DataMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl DataMemory {
    /// Creates a zeroed memory.
    pub fn new() -> Self {
        Self {
            cells: vec![U8::ZERO; DATA_MEMORY_CELLS],
            output: U8::ZERO,
        }
    }

    /// Initialises a cell before the run starts.
    pub fn preset(&mut self, address: U9, value: U8) {
        self.cells[address.index()] = value;
    }

    /// Value of a cell.
    #[inline]
    pub fn get(&self, address: U9) -> U8 {
        self.cells[address.index()]
    }

    /// Value on the read-data output.
    #[inline]
    pub const fn output(&self) -> U8 {
        self.output
    }

    /// All cells, lowest address first.
    pub fn as_slice(&self) -> &[U8] {
        &self.cells
    }

    /// Performs an access. Callers only clock the memory while it is enabled.
    pub fn clock(&mut self, write: bool, address: U9, data_in: U8) {
        if write {
            self.cells[address.index()] = data_in;
        } else {
            self.output = self.cells[address.index()];
        }
    }

    /// Prints the first `count` cells, four per line.
    pub fn dump(&self, count: usize) {
        for (row, chunk) in self.cells[..count.min(self.cells.len())].chunks(4).enumerate() {
            let line: Vec<String> = chunk
                .iter()
                .enumerate()
                .map(|(col, val)| format!("[{:#05x}]={:#04x}", row * 4 + col, val.get()))
                .collect();
            println!("{}", line.join(" "));
        }
    }
}
