//! Control machine states.

use std::fmt;

/// One of the ten states of the control machine.
///
/// Names follow the activity the state drives on the datapath. The bracketed names in the
/// docs are the hardware-manual names of the same states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ControlState {
    /// Read instruction memory and advance the program counter (`INITIAL`).
    #[default]
    Fetch,
    /// Latch the fetched word into the instruction register (`INST_READY`).
    LoadIr,
    /// Commit the instruction register into the pipeline register, or drop it after a jump
    /// (`IR_HAS_INST`).
    LoadRpl,
    /// Fetch the next instruction while the committed one executes (`RPL_READY`).
    ReadNext,
    /// Latch the next instruction and dispatch on the committed opcode (`READY_TO_EXECUTE`).
    DecodeDispatch,
    /// Write the ALU result back (`READY_TO_COMPUTE`).
    ExecAlu,
    /// Write the data memory (`READY_TO_STORE`).
    ExecStore,
    /// Release the program-counter load strobe (`READY_TO_JUMP`).
    ExecJump,
    /// Close register-file and data-memory access (`RESULT_READY`).
    Writeback,
    /// Write the loaded value into the register file (`READY_TO_LOAD`).
    ExecLoad,
}

impl ControlState {
    /// Number of states.
    pub const COUNT: usize = 10;

    /// Every state in declaration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Fetch,
        Self::LoadIr,
        Self::LoadRpl,
        Self::ReadNext,
        Self::DecodeDispatch,
        Self::ExecAlu,
        Self::ExecStore,
        Self::ExecJump,
        Self::Writeback,
        Self::ExecLoad,
    ];

    /// Position in [`ControlState::ALL`], for per-state counters.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Upper-case state name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fetch => "FETCH",
            Self::LoadIr => "LOAD_IR",
            Self::LoadRpl => "LOAD_RPL",
            Self::ReadNext => "READ_NEXT",
            Self::DecodeDispatch => "DECODE_DISPATCH",
            Self::ExecAlu => "EXEC_ALU",
            Self::ExecStore => "EXEC_STORE",
            Self::ExecJump => "EXEC_JUMP",
            Self::Writeback => "WRITEBACK",
            Self::ExecLoad => "EXEC_LOAD",
        }
    }
}

impl fmt::Display for ControlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
