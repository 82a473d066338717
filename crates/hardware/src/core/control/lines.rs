//! Control lines and the datapath inputs the control machine reads.
//!
//! [`ControlLines`] owns the writer of every output wire, so the control machine is the only
//! component that can drive them. [`ControlTaps`] is the matching set of readers handed to the
//! datapath. [`ControlInputs`] bundles the readers of the wires the control machine consumes:
//! the decoded fields published by the pipeline register and the ALU condition flags.

use crate::common::{U2, U4, U8, U9};
use crate::core::signal::{SignalReader, SignalWriter, signal};

/// Register-write source select: ALU result.
pub const RBW_ALU: U2 = U2::masked(0);
/// Register-write source select: data-memory read data.
pub const RBW_MEMORY: U2 = U2::masked(1);
/// Register-write source select: immediate value.
pub const RBW_IMMEDIATE: U2 = U2::masked(2);

/// Data-memory address select: store path (destination operand).
pub const DM_ADDR_STORE: U2 = U2::masked(0);
/// Data-memory address select: load path (operand 1).
pub const DM_ADDR_LOAD: U2 = U2::masked(1);

/// Values of every control output at one instant.
///
/// Produced by [`ControlTaps::snapshot`]; the datapath evaluates a tick against one snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlWord {
    /// Program counter: increment.
    pub pc_enable: bool,
    /// Program counter: overwrite strobe.
    pub pc_load: bool,
    /// Program counter: overwrite value.
    pub pc_jump_value: U9,
    /// Instruction memory: activate.
    pub im_enable: bool,
    /// Instruction memory: write direction.
    pub im_write: bool,
    /// Data memory: activate.
    pub dm_enable: bool,
    /// Data memory: write direction.
    pub dm_write: bool,
    /// Instruction register: activate.
    pub ir_enable: bool,
    /// Instruction register: write direction.
    pub ir_write: bool,
    /// Immediate value forwarded for `LRI`.
    pub immediate_value: U8,
    /// Immediate destination register forwarded for `LRI`.
    pub immediate_register: U9,
    /// Register file: activate.
    pub rb_enable: bool,
    /// Register file: write direction.
    pub rb_write: bool,
    /// Pipeline register: activate.
    pub rpl_enable: bool,
    /// Pipeline register: write direction.
    pub rpl_write: bool,
    /// Pipeline register: clear.
    pub rpl_reset: bool,
    /// ALU: clear the N/Z flags.
    pub alu_flag_reset: bool,
    /// Register-write source select.
    pub rbw_select: U2,
    /// Data-memory address select.
    pub dm_addr_select: U2,
}

/// Writers for every control output. Owned by the control machine.
#[derive(Debug)]
pub struct ControlLines {
    /// Program counter: increment.
    pub pc_enable: SignalWriter<bool>,
    /// Program counter: overwrite strobe.
    pub pc_load: SignalWriter<bool>,
    /// Program counter: overwrite value.
    pub pc_jump_value: SignalWriter<U9>,
    /// Instruction memory: activate.
    pub im_enable: SignalWriter<bool>,
    /// Instruction memory: write direction.
    pub im_write: SignalWriter<bool>,
    /// Data memory: activate.
    pub dm_enable: SignalWriter<bool>,
    /// Data memory: write direction.
    pub dm_write: SignalWriter<bool>,
    /// Instruction register: activate.
    pub ir_enable: SignalWriter<bool>,
    /// Instruction register: write direction.
    pub ir_write: SignalWriter<bool>,
    /// Immediate value forwarded for `LRI`.
    pub immediate_value: SignalWriter<U8>,
    /// Immediate destination register forwarded for `LRI`.
    pub immediate_register: SignalWriter<U9>,
    /// Register file: activate.
    pub rb_enable: SignalWriter<bool>,
    /// Register file: write direction.
    pub rb_write: SignalWriter<bool>,
    /// Pipeline register: activate.
    pub rpl_enable: SignalWriter<bool>,
    /// Pipeline register: write direction.
    pub rpl_write: SignalWriter<bool>,
    /// Pipeline register: clear.
    pub rpl_reset: SignalWriter<bool>,
    /// ALU: clear the N/Z flags.
    pub alu_flag_reset: SignalWriter<bool>,
    /// Register-write source select.
    pub rbw_select: SignalWriter<U2>,
    /// Data-memory address select.
    pub dm_addr_select: SignalWriter<U2>,
}

/// Readers for every control output. Cloned into whatever consumes the control lines.
#[derive(Clone, Debug)]
pub struct ControlTaps {
    pc_enable: SignalReader<bool>,
    pc_load: SignalReader<bool>,
    pc_jump_value: SignalReader<U9>,
    im_enable: SignalReader<bool>,
    im_write: SignalReader<bool>,
    dm_enable: SignalReader<bool>,
    dm_write: SignalReader<bool>,
    ir_enable: SignalReader<bool>,
    ir_write: SignalReader<bool>,
    immediate_value: SignalReader<U8>,
    immediate_register: SignalReader<U9>,
    rb_enable: SignalReader<bool>,
    rb_write: SignalReader<bool>,
    rpl_enable: SignalReader<bool>,
    rpl_write: SignalReader<bool>,
    rpl_reset: SignalReader<bool>,
    alu_flag_reset: SignalReader<bool>,
    rbw_select: SignalReader<U2>,
    dm_addr_select: SignalReader<U2>,
}

impl ControlLines {
    /// Creates every control wire at its reset value (all deasserted, selects zero).
    pub fn new() -> (Self, ControlTaps) {
        let (pc_enable, pc_enable_r) = signal("pc.enable", false);
        let (pc_load, pc_load_r) = signal("pc.load", false);
        let (pc_jump_value, pc_jump_value_r) = signal("pc.jump_value", U9::ZERO);
        let (im_enable, im_enable_r) = signal("im.enable", false);
        let (im_write, im_write_r) = signal("im.write", false);
        let (dm_enable, dm_enable_r) = signal("dm.enable", false);
        let (dm_write, dm_write_r) = signal("dm.write", false);
        let (ir_enable, ir_enable_r) = signal("ir.enable", false);
        let (ir_write, ir_write_r) = signal("ir.write", false);
        let (immediate_value, immediate_value_r) = signal("ir.immediate_value", U8::ZERO);
        let (immediate_register, immediate_register_r) =
            signal("ir.immediate_register", U9::ZERO);
        let (rb_enable, rb_enable_r) = signal("rb.enable", false);
        let (rb_write, rb_write_r) = signal("rb.write", false);
        let (rpl_enable, rpl_enable_r) = signal("rpl.enable", false);
        let (rpl_write, rpl_write_r) = signal("rpl.write", false);
        let (rpl_reset, rpl_reset_r) = signal("rpl.reset", false);
        let (alu_flag_reset, alu_flag_reset_r) = signal("alu.flag_reset", false);
        let (rbw_select, rbw_select_r) = signal("mux.rbw_select", RBW_ALU);
        let (dm_addr_select, dm_addr_select_r) = signal("mux.dm_addr_select", DM_ADDR_STORE);

        let lines = Self {
            pc_enable,
            pc_load,
            pc_jump_value,
            im_enable,
            im_write,
            dm_enable,
            dm_write,
            ir_enable,
            ir_write,
            immediate_value,
            immediate_register,
            rb_enable,
            rb_write,
            rpl_enable,
            rpl_write,
            rpl_reset,
            alu_flag_reset,
            rbw_select,
            dm_addr_select,
        };
        let taps = ControlTaps {
            pc_enable: pc_enable_r,
            pc_load: pc_load_r,
            pc_jump_value: pc_jump_value_r,
            im_enable: im_enable_r,
            im_write: im_write_r,
            dm_enable: dm_enable_r,
            dm_write: dm_write_r,
            ir_enable: ir_enable_r,
            ir_write: ir_write_r,
            immediate_value: immediate_value_r,
            immediate_register: immediate_register_r,
            rb_enable: rb_enable_r,
            rb_write: rb_write_r,
            rpl_enable: rpl_enable_r,
            rpl_write: rpl_write_r,
            rpl_reset: rpl_reset_r,
            alu_flag_reset: alu_flag_reset_r,
            rbw_select: rbw_select_r,
            dm_addr_select: dm_addr_select_r,
        };
        (lines, taps)
    }
}

impl ControlTaps {
    /// Reads every control line.
    pub fn snapshot(&self) -> ControlWord {
        ControlWord {
            pc_enable: self.pc_enable.read(),
            pc_load: self.pc_load.read(),
            pc_jump_value: self.pc_jump_value.read(),
            im_enable: self.im_enable.read(),
            im_write: self.im_write.read(),
            dm_enable: self.dm_enable.read(),
            dm_write: self.dm_write.read(),
            ir_enable: self.ir_enable.read(),
            ir_write: self.ir_write.read(),
            immediate_value: self.immediate_value.read(),
            immediate_register: self.immediate_register.read(),
            rb_enable: self.rb_enable.read(),
            rb_write: self.rb_write.read(),
            rpl_enable: self.rpl_enable.read(),
            rpl_write: self.rpl_write.read(),
            rpl_reset: self.rpl_reset.read(),
            alu_flag_reset: self.alu_flag_reset.read(),
            rbw_select: self.rbw_select.read(),
            dm_addr_select: self.dm_addr_select.read(),
        }
    }
}

/// Writers for the decoded instruction fields. Owned by the pipeline register.
#[derive(Debug)]
pub struct FieldLines {
    /// Opcode of the committed instruction.
    pub opcode: SignalWriter<U4>,
    /// Operand 1 of the committed instruction.
    pub operand1: SignalWriter<U8>,
    /// Operand 2 of the committed instruction.
    pub operand2: SignalWriter<U8>,
    /// Destination operand of the committed instruction.
    pub destination: SignalWriter<U9>,
}

/// Readers for the decoded instruction fields.
#[derive(Clone, Debug)]
pub struct FieldTaps {
    /// Opcode of the committed instruction.
    pub opcode: SignalReader<U4>,
    /// Operand 1 of the committed instruction.
    pub operand1: SignalReader<U8>,
    /// Operand 2 of the committed instruction.
    pub operand2: SignalReader<U8>,
    /// Destination operand of the committed instruction.
    pub destination: SignalReader<U9>,
}

impl FieldLines {
    /// Creates the field wires holding the all-zero (`HALT`) instruction.
    pub fn new() -> (Self, FieldTaps) {
        let (opcode, opcode_r) = signal("rpl.opcode", U4::ZERO);
        let (operand1, operand1_r) = signal("rpl.operand1", U8::ZERO);
        let (operand2, operand2_r) = signal("rpl.operand2", U8::ZERO);
        let (destination, destination_r) = signal("rpl.destination", U9::ZERO);
        (
            Self {
                opcode,
                operand1,
                operand2,
                destination,
            },
            FieldTaps {
                opcode: opcode_r,
                operand1: operand1_r,
                operand2: operand2_r,
                destination: destination_r,
            },
        )
    }
}

/// Writers for the ALU condition flags. Owned by the ALU.
#[derive(Debug)]
pub struct FlagLines {
    /// Last result was negative.
    pub negative: SignalWriter<bool>,
    /// Last result was zero.
    pub zero: SignalWriter<bool>,
}

/// Readers for the ALU condition flags.
#[derive(Clone, Debug)]
pub struct FlagTaps {
    /// Last result was negative.
    pub negative: SignalReader<bool>,
    /// Last result was zero.
    pub zero: SignalReader<bool>,
}

impl FlagLines {
    /// Creates the flag wires, both clear.
    pub fn new() -> (Self, FlagTaps) {
        let (negative, negative_r) = signal("alu.n", false);
        let (zero, zero_r) = signal("alu.z", false);
        (
            Self { negative, zero },
            FlagTaps {
                negative: negative_r,
                zero: zero_r,
            },
        )
    }
}

/// Everything the control machine reads.
#[derive(Clone, Debug)]
pub struct ControlInputs {
    /// Decoded fields of the instruction in the pipeline register.
    pub fields: FieldTaps,
    /// ALU condition flags.
    pub flags: FlagTaps,
}
