//! Datapath.
//!
//! The collaborators the control machine drives, wired together. One [`Datapath::tick`]
//! evaluates every unit against the control lines as they stand, in this order:
//! 1. **Fetch:** Sample the program counter and clock instruction memory.
//! 2. **Latch:** Clock the instruction register, then the pipeline register.
//! 3. **Operate:** Register file read, ALU, data memory.
//! 4. **Commit:** Register file write, then the program counter update.
//!
//! Because the program counter commits last, a jump or increment requested on one tick is
//! seen by instruction memory on the next.

/// Arithmetic logic unit and condition flags.
pub mod alu;

/// Data memory.
pub mod data_memory;

/// Instruction memory.
pub mod instruction_memory;

/// Instruction register.
pub mod instruction_register;

/// Register-write and data-memory address multiplexers.
pub mod mux;

/// Pipeline register (RPL).
pub mod pipeline_register;

/// Program counter.
pub mod program_counter;

/// Register file.
pub mod register_file;

use self::alu::Alu;
use self::data_memory::DataMemory;
use self::instruction_memory::InstructionMemory;
use self::instruction_register::InstructionRegister;
use self::pipeline_register::PipelineRegister;
use self::program_counter::ProgramCounter;
use self::register_file::RegisterFile;
use crate::common::{LoadError, U8, U9};
use crate::core::control::{ControlTaps, FieldLines, FlagLines};
use crate::core::traits::Clocked;

/// Every datapath unit plus the taps on the control lines that drive them.
#[derive(Debug)]
pub struct Datapath {
    control: ControlTaps,
    /// Program counter.
    pub pc: ProgramCounter,
    /// Instruction memory.
    pub im: InstructionMemory,
    /// Instruction register.
    pub ir: InstructionRegister,
    /// Pipeline register.
    pub rpl: PipelineRegister,
    /// Register file.
    pub regs: RegisterFile,
    /// Data memory.
    pub dm: DataMemory,
    /// Arithmetic logic unit.
    pub alu: Alu,
}

impl Datapath {
    /// Builds the datapath.
    ///
    /// # Arguments
    ///
    /// * `control` - Readers of the control lines.
    /// * `fields` - Writers the pipeline register publishes decoded fields on.
    /// * `flags` - Writers the ALU publishes condition flags on.
    pub fn new(control: ControlTaps, fields: FieldLines, flags: FlagLines) -> Self {
        Self {
            control,
            pc: ProgramCounter::new(),
            im: InstructionMemory::new(),
            ir: InstructionRegister::new(),
            rpl: PipelineRegister::new(fields),
            regs: RegisterFile::new(),
            dm: DataMemory::new(),
            alu: Alu::new(flags),
        }
    }

    /// Loads instruction words at address 0 and presets data-memory cells.
    pub fn load(&mut self, words: &[u32], data: &[(U9, U8)]) -> Result<(), LoadError> {
        self.im.load(words)?;
        for &(address, value) in data {
            self.dm.preset(address, value);
        }
        Ok(())
    }
}

impl Clocked for Datapath {
    fn tick(&mut self) {
        let ctrl = self.control.snapshot();

        let pc = self.pc.value();
        self.im.clock(ctrl.im_enable, ctrl.im_write, pc, self.ir.value());
        self.ir.clock(ctrl.ir_enable, ctrl.ir_write, self.im.output());
        self.rpl.clock(
            ctrl.rpl_enable,
            ctrl.rpl_write,
            ctrl.rpl_reset,
            self.ir.value(),
        );

        let inst = self.rpl.instruction();
        let reading = ctrl.rb_enable && !ctrl.rb_write;
        if reading {
            self.regs.read(inst.operand1, inst.operand2);
        }

        if ctrl.alu_flag_reset {
            self.alu.reset_flags();
        } else if reading {
            self.alu
                .evaluate(inst.op(), self.regs.port_a(), self.regs.port_b());
        }

        if ctrl.dm_enable {
            let address =
                mux::data_memory_address(ctrl.dm_addr_select, inst.destination, inst.operand1);
            self.dm.clock(ctrl.dm_write, address, self.regs.port_a());
        }

        if ctrl.rb_enable && ctrl.rb_write {
            let data = mux::register_write_data(
                ctrl.rbw_select,
                self.alu.result(),
                self.dm.output(),
                ctrl.immediate_value,
            );
            let index =
                mux::register_write_index(ctrl.rbw_select, ctrl.immediate_register, inst.destination);
            self.regs.write(index, data);
        }

        self.pc.clock(ctrl.pc_enable, ctrl.pc_load, ctrl.pc_jump_value);
    }
}
