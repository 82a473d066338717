//! Control finite-state machine.
//!
//! The control unit is a Mealy machine clocked once per tick. On every step it:
//! 1. **Counts:** Advances the cycle counter, once per step and regardless of state.
//! 2. **Drives:** Writes the control lines for the current state.
//! 3. **Dispatches:** In `DECODE_DISPATCH`, maps the committed opcode (and for `JN`/`JZ` the
//!    condition flag) to a control pattern and the next state.
//! 4. **Recovers:** A taken jump sets the flush flag; the next `LOAD_RPL` discards the
//!    instruction fetched behind the jump and restarts from `FETCH`.
//!
//! Fetch of instruction N+1 overlaps execution of instruction N, so when a jump resolves the
//! sequential successor is already in the instruction register. The flush flag is the only
//! hazard recovery: there is no prediction beyond that one-instruction lookahead.

/// Control and datapath wire bundles.
pub mod lines;

/// Control machine states.
pub mod state;

use tracing::{debug, trace};

pub use self::lines::{
    ControlInputs, ControlLines, ControlTaps, ControlWord, DM_ADDR_LOAD, DM_ADDR_STORE, FieldLines,
    FieldTaps, FlagLines, FlagTaps, RBW_ALU, RBW_IMMEDIATE, RBW_MEMORY,
};
pub use self::state::ControlState;
use crate::isa::opcode::Opcode;

/// What one control step did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// Cycle number of this step (1 for the first step after reset).
    pub cycle: u64,
    /// State the step executed.
    pub state: ControlState,
    /// State for the next step, or `None` when `HALT` was dispatched.
    pub next: Option<ControlState>,
    /// Opcode dispatched, for `DECODE_DISPATCH` steps.
    pub dispatched: Option<Opcode>,
    /// A jump was resolved as taken on this step.
    pub jump_taken: bool,
    /// The speculatively fetched instruction was discarded on this step.
    pub flushed: bool,
}

impl Step {
    /// Whether this step terminated the run.
    pub const fn halted(&self) -> bool {
        self.next.is_none()
    }
}

/// The control unit.
#[derive(Debug)]
pub struct ControlFsm {
    state: ControlState,
    flush_pending: bool,
    cycles: u64,
    halted: bool,
    out: ControlLines,
    inputs: ControlInputs,
}

impl ControlFsm {
    /// Creates the control unit in `FETCH` with the flush flag clear and the counter at zero.
    ///
    /// Takes ownership of the control-line writers, making it the sole driver of those wires.
    pub fn new(out: ControlLines, inputs: ControlInputs) -> Self {
        Self {
            state: ControlState::Fetch,
            flush_pending: false,
            cycles: 0,
            halted: false,
            out,
            inputs,
        }
    }

    /// Current state.
    pub const fn state(&self) -> ControlState {
        self.state
    }

    /// Steps taken since reset.
    pub const fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Whether the next `LOAD_RPL` will discard the instruction register.
    pub const fn flush_pending(&self) -> bool {
        self.flush_pending
    }

    /// Whether `HALT` has been dispatched.
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    /// Performs one state step. Returns `None` once halted.
    pub fn step(&mut self) -> Option<Step> {
        if self.halted {
            return None;
        }
        self.cycles += 1;

        let state = self.state;
        let mut step = Step {
            cycle: self.cycles,
            state,
            next: None,
            dispatched: None,
            jump_taken: false,
            flushed: false,
        };

        let next = match state {
            ControlState::Fetch => {
                self.prepare_read_instruction();
                Some(ControlState::LoadIr)
            }
            ControlState::LoadIr => {
                self.prepare_load_ir();
                Some(ControlState::LoadRpl)
            }
            ControlState::LoadRpl => {
                if self.flush_pending {
                    self.flush_pending = false;
                    step.flushed = true;
                    debug!(cycle = self.cycles, "pipeline flush");
                    Some(ControlState::Fetch)
                } else {
                    self.prepare_load_rpl();
                    Some(ControlState::ReadNext)
                }
            }
            ControlState::ReadNext => {
                self.out.rpl_enable.write(false);
                self.prepare_read_instruction();
                Some(ControlState::DecodeDispatch)
            }
            ControlState::DecodeDispatch => {
                self.prepare_load_ir();
                self.dispatch(&mut step)
            }
            ControlState::ExecAlu => {
                self.prepare_write_rb();
                self.stall_pipe();
                Some(ControlState::Writeback)
            }
            ControlState::ExecStore => {
                self.prepare_write_dm();
                self.stall_pipe();
                Some(ControlState::Writeback)
            }
            ControlState::ExecJump => {
                self.out.pc_load.write(false);
                self.out.alu_flag_reset.write(false);
                Some(ControlState::LoadRpl)
            }
            ControlState::Writeback => {
                self.out.rb_enable.write(false);
                self.out.dm_enable.write(false);
                self.stall_pipe();
                Some(ControlState::LoadRpl)
            }
            ControlState::ExecLoad => {
                self.prepare_write_rb();
                Some(ControlState::Writeback)
            }
        };

        match next {
            Some(next) => {
                trace!(cycle = self.cycles, from = %state, to = %next, "control transition");
                self.state = next;
            }
            None => {
                self.halted = true;
                debug!(cycle = self.cycles, "HALT dispatched");
            }
        }
        step.next = next;
        Some(step)
    }

    /// Maps the committed opcode to a control pattern. `None` means `HALT`.
    fn dispatch(&mut self, step: &mut Step) -> Option<ControlState> {
        let fields = &self.inputs.fields;
        let opcode = Opcode::decode(fields.opcode.read());
        let operand1 = fields.operand1.read();
        let destination = fields.destination.read();
        step.dispatched = Some(opcode);
        trace!(
            cycle = self.cycles,
            %opcode,
            operand1 = operand1.get(),
            destination = destination.get(),
            "dispatch"
        );

        match opcode {
            Opcode::Lri => {
                self.prepare_write_rb();
                self.out.immediate_register.write(destination);
                self.out.immediate_value.write(operand1);
                self.out.rbw_select.write(RBW_IMMEDIATE);
                Some(ControlState::Writeback)
            }
            Opcode::Ld => {
                self.prepare_write_rb();
                self.prepare_read_dm();
                self.out.rbw_select.write(RBW_MEMORY);
                self.out.dm_addr_select.write(DM_ADDR_LOAD);
                Some(ControlState::ExecLoad)
            }
            Opcode::St => {
                self.prepare_read_rb();
                self.out.dm_addr_select.write(DM_ADDR_STORE);
                Some(ControlState::ExecStore)
            }
            Opcode::J => {
                self.prepare_jump();
                step.jump_taken = true;
                Some(ControlState::ExecJump)
            }
            Opcode::Jn | Opcode::Jz => {
                let flags = &self.inputs.flags;
                let taken = if opcode == Opcode::Jn {
                    flags.negative.read()
                } else {
                    flags.zero.read()
                };
                if taken {
                    self.prepare_conditional_jump();
                }
                step.jump_taken = taken;
                Some(ControlState::ExecJump)
            }
            Opcode::Halt => None,
            Opcode::Alu(_) => {
                self.out.rbw_select.write(RBW_ALU);
                self.prepare_read_rb();
                Some(ControlState::ExecAlu)
            }
        }
    }

    /// Read instruction memory at the program counter and advance it.
    fn prepare_read_instruction(&mut self) {
        self.out.im_enable.write(true);
        self.out.im_write.write(false);
        self.out.pc_enable.write(true);
    }

    /// Latch the instruction memory output into the instruction register.
    fn prepare_load_ir(&mut self) {
        self.out.im_enable.write(false);
        self.out.ir_enable.write(true);
        self.out.ir_write.write(true);
        self.out.pc_enable.write(false);
    }

    /// Commit the instruction register into the pipeline register.
    fn prepare_load_rpl(&mut self) {
        self.out.ir_enable.write(false);
        self.out.rpl_enable.write(true);
        self.out.rpl_write.write(true);
    }

    /// Hold the instruction register while the committed instruction finishes.
    fn stall_pipe(&mut self) {
        self.out.ir_enable.write(false);
    }

    /// Overwrite the program counter with the destination operand on this same tick.
    fn prepare_jump(&mut self) {
        self.out.pc_enable.write(false);
        self.out.pc_load.write(true);
        self.out
            .pc_jump_value
            .write(self.inputs.fields.destination.read());
        self.flush_pending = true;
    }

    /// Taken conditional jump: jump, then clear the flags that were tested.
    fn prepare_conditional_jump(&mut self) {
        self.prepare_jump();
        self.out.alu_flag_reset.write(true);
    }

    fn prepare_read_rb(&mut self) {
        self.out.rb_enable.write(true);
        self.out.rb_write.write(false);
    }

    fn prepare_write_rb(&mut self) {
        self.out.rb_enable.write(true);
        self.out.rb_write.write(true);
    }

    fn prepare_read_dm(&mut self) {
        self.out.dm_enable.write(true);
        self.out.dm_write.write(false);
    }

    fn prepare_write_dm(&mut self) {
        self.out.dm_enable.write(true);
        self.out.dm_write.write(true);
    }
}
