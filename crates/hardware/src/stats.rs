//! Simulation statistics collection and reporting.
//!
//! This module tracks what the control machine did over a run. It provides:
//! 1. **Cycles:** Total cycles and the cycles spent in each control state.
//! 2. **Instruction mix:** Dispatch counts by class (immediate, load, store, jump, arithmetic, halt).
//! 3. **Control flow:** Jumps taken and not taken, and pipeline flushes.

use std::time::Instant;

use crate::core::control::{ControlState, Step};
use crate::isa::opcode::Opcode;

/// Dispatch class of an opcode, used for the instruction mix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstClass {
    /// `LRI`.
    Immediate,
    /// `LD`.
    Load,
    /// `ST`.
    Store,
    /// `J`, `JN`, `JZ`.
    Jump,
    /// Any arithmetic/logic opcode.
    Arithmetic,
    /// `HALT`.
    Halt,
}

impl InstClass {
    /// Every class, in report order.
    pub const ALL: [Self; 6] = [
        Self::Immediate,
        Self::Load,
        Self::Store,
        Self::Jump,
        Self::Arithmetic,
        Self::Halt,
    ];

    /// Classifies an opcode.
    pub const fn of(opcode: Opcode) -> Self {
        match opcode {
            Opcode::Lri => Self::Immediate,
            Opcode::Ld => Self::Load,
            Opcode::St => Self::Store,
            Opcode::J | Opcode::Jn | Opcode::Jz => Self::Jump,
            Opcode::Alu(_) => Self::Arithmetic,
            Opcode::Halt => Self::Halt,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Immediate => "op.immediate",
            Self::Load => "op.load",
            Self::Store => "op.store",
            Self::Jump => "op.jump",
            Self::Arithmetic => "op.arithmetic",
            Self::Halt => "op.halt",
        }
    }
}

/// Run statistics, fed one control step at a time.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total cycles elapsed.
    pub cycles: u64,
    /// Cycles spent in each control state, indexed by [`ControlState::index`].
    pub state_cycles: [u64; ControlState::COUNT],
    /// Instructions dispatched per class, indexed in [`InstClass::ALL`] order.
    pub dispatched: [u64; 6],
    /// Jumps whose condition held (every `J`, and `JN`/`JZ` with the flag set).
    pub jumps_taken: u64,
    /// Conditional jumps whose condition did not hold.
    pub jumps_not_taken: u64,
    /// Instructions discarded from the instruction register after a taken jump.
    pub flushes: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            state_cycles: [0; ControlState::COUNT],
            dispatched: [0; 6],
            jumps_taken: 0,
            jumps_not_taken: 0,
            flushes: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"states"`, `"instruction_mix"`, `"control"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "states", "instruction_mix", "control"];

impl SimStats {
    /// Accounts for one control step.
    pub fn record(&mut self, step: &Step) {
        self.cycles += 1;
        self.state_cycles[step.state.index()] += 1;
        if let Some(opcode) = step.dispatched {
            self.dispatched[InstClass::of(opcode).index()] += 1;
            if opcode.is_jump() {
                if step.jump_taken {
                    self.jumps_taken += 1;
                } else {
                    self.jumps_not_taken += 1;
                }
            }
        }
        if step.flushed {
            self.flushes += 1;
        }
    }

    /// Cycles spent in `state`.
    pub const fn cycles_in(&self, state: ControlState) -> u64 {
        self.state_cycles[state.index()]
    }

    /// Instructions of `class` dispatched.
    pub const fn dispatched(&self, class: InstClass) -> u64 {
        self.dispatched[class.index()]
    }

    /// Instructions dispatched in total, `HALT` included.
    pub fn instructions(&self) -> u64 {
        self.dispatched.iter().sum()
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// # Arguments
    ///
    /// * `sections` - Slice of section names to print, or empty for all.
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.cycles.max(1) as f64;
        let instr = self.instructions().max(1) as f64;

        if want("summary") {
            println!("\n==========================================================");
            println!("PIPELINE SIMULATION STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {seconds:.4} s");
            println!("sim_cycles               {}", self.cycles);
            println!("sim_insts                {}", self.instructions());
            println!("sim_cpi                  {:.4}", cyc / instr);
            println!("----------------------------------------------------------");
        }
        if want("states") {
            println!("CONTROL STATES");
            for state in ControlState::ALL {
                let n = self.cycles_in(state);
                println!(
                    "  {:<22} {} ({:.2}%)",
                    state.name(),
                    n,
                    n as f64 / cyc * 100.0
                );
            }
            println!("----------------------------------------------------------");
        }
        if want("instruction_mix") {
            println!("INSTRUCTION MIX");
            for class in InstClass::ALL {
                let n = self.dispatched(class);
                println!(
                    "  {:<22} {} ({:.2}%)",
                    class.label(),
                    n,
                    n as f64 / instr * 100.0
                );
            }
            println!("----------------------------------------------------------");
        }
        if want("control") {
            println!("CONTROL FLOW");
            println!("  jumps.taken            {}", self.jumps_taken);
            println!("  jumps.not_taken        {}", self.jumps_not_taken);
            println!("  pipeline.flushes       {}", self.flushes);
        }
        println!("==========================================================");
    }
}
