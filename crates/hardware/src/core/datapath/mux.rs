//! Datapath multiplexers.
//!
//! Pure selection functions driven by the two 2-bit select lines.

use crate::common::{U2, U8, U9};
use crate::core::control::{DM_ADDR_LOAD, DM_ADDR_STORE, RBW_ALU, RBW_IMMEDIATE, RBW_MEMORY};

/// Register-write data source.
///
/// `0` ALU result, `1` data-memory read data, `2` immediate, `3` constant zero.
pub fn register_write_data(select: U2, alu: U8, memory: U8, immediate: U8) -> U8 {
    match select {
        RBW_ALU => alu,
        RBW_MEMORY => memory,
        RBW_IMMEDIATE => immediate,
        _ => U8::ZERO,
    }
}

/// Register-write index: the forwarded immediate register for `LRI`, the destination operand
/// otherwise.
pub fn register_write_index(select: U2, immediate_register: U9, destination: U9) -> U9 {
    if select == RBW_IMMEDIATE {
        immediate_register
    } else {
        destination
    }
}

/// Data-memory address.
///
/// `0` destination operand (store path), `1` operand 1 (load path), anything else zero.
pub fn data_memory_address(select: U2, destination: U9, operand1: U8) -> U9 {
    match select {
        DM_ADDR_STORE => destination,
        DM_ADDR_LOAD => operand1.resize::<9>(),
        _ => U9::ZERO,
    }
}
