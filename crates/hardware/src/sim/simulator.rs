//! Simulator: owns the scheduler, the run policy, and the statistics.
//!
//! Construction wires the control machine to the datapath through freshly created signals and
//! loads the program image; [`Simulator::run`] then ticks until `HALT` or the cycle limit.

use tracing::{info, warn};

use crate::common::{SimError, U8, U9};
use crate::config::Config;
use crate::core::control::{
    ControlFsm, ControlInputs, ControlLines, ControlState, FieldLines, FlagLines, Step,
};
use crate::core::datapath::Datapath;
use crate::sim::loader::Program;
use crate::sim::scheduler::Scheduler;
use crate::stats::SimStats;

/// Top-level simulator: control machine + datapath + run accounting.
#[derive(Debug)]
pub struct Simulator {
    scheduler: Scheduler<Datapath>,
    /// Statistics gathered so far.
    pub stats: SimStats,
    config: Config,
}

impl Simulator {
    /// Builds a machine at reset and loads `program` into it.
    ///
    /// # Arguments
    ///
    /// * `program` - Assembled image to load.
    /// * `config` - Run limits and report settings.
    pub fn new(program: &Program, config: &Config) -> Result<Self, SimError> {
        let (lines, taps) = ControlLines::new();
        let (fields, field_taps) = FieldLines::new();
        let (flags, flag_taps) = FlagLines::new();

        let control = ControlFsm::new(
            lines,
            ControlInputs {
                fields: field_taps,
                flags: flag_taps,
            },
        );
        let mut datapath = Datapath::new(taps, fields, flags);
        datapath.load(&program.words, &program.data)?;

        Ok(Self {
            scheduler: Scheduler::new(control, datapath),
            stats: SimStats::default(),
            config: config.clone(),
        })
    }

    /// Advances one tick. Returns `None` once the machine has halted.
    pub fn tick(&mut self) -> Option<Step> {
        let step = self.scheduler.tick()?;
        self.stats.record(&step);
        if self.config.general.trace_states {
            let pc = self.scheduler.datapath().pc.value().get();
            match step.next {
                Some(next) => info!(cycle = step.cycle, pc, state = %step.state, %next, "tick"),
                None => info!(cycle = step.cycle, pc, state = %step.state, "halt"),
            }
        }
        Some(step)
    }

    /// Ticks until `HALT` is dispatched.
    ///
    /// # Returns
    ///
    /// The cycle count at `HALT`, or [`SimError::CycleLimitExceeded`] when the configured
    /// limit is reached first.
    pub fn run(&mut self) -> Result<u64, SimError> {
        let limit = self.config.general.max_cycles;
        info!(max_cycles = limit, "run started");
        while !self.is_halted() {
            if limit != 0 && self.cycles() >= limit {
                warn!(cycles = self.cycles(), "cycle limit reached before HALT");
                return Err(SimError::CycleLimitExceeded {
                    cycles: self.cycles(),
                });
            }
            if self.tick().is_none() {
                break;
            }
        }
        info!(cycles = self.cycles(), "run finished");
        Ok(self.cycles())
    }

    /// Cycle counter of the control machine.
    pub const fn cycles(&self) -> u64 {
        self.scheduler.control().cycles()
    }

    /// Whether `HALT` has been dispatched.
    pub const fn is_halted(&self) -> bool {
        self.scheduler.control().is_halted()
    }

    /// Control state the next tick will execute.
    pub const fn state(&self) -> ControlState {
        self.scheduler.control().state()
    }

    /// Whether the next `LOAD_RPL` will discard the instruction register.
    pub const fn flush_pending(&self) -> bool {
        self.scheduler.control().flush_pending()
    }

    /// The datapath, for inspecting registers and memories.
    pub const fn datapath(&self) -> &Datapath {
        self.scheduler.datapath()
    }

    /// Value of register `idx`.
    pub fn register(&self, idx: u32) -> U8 {
        self.datapath().regs.get(U9::masked(idx))
    }

    /// Value of data-memory cell `address`.
    pub fn memory(&self, address: u32) -> U8 {
        self.datapath().dm.get(U9::masked(address))
    }

    /// First line of the report. Only a halted machine reports completion.
    pub fn report_header(&self) -> String {
        if self.is_halted() {
            format!("Completed in {} cycles.", self.cycles())
        } else {
            format!("Stopped after {} cycles without HALT.", self.cycles())
        }
    }

    /// Prints the end-of-run report: header, then the configured register and memory prefixes.
    pub fn print_report(&self) {
        println!();
        println!("{}", self.report_header());
        println!();
        println!("==================== REGISTERS ====================");
        self.datapath().regs.dump(self.config.report.registers);
        println!("===================== MEMORY ======================");
        self.datapath().dm.dump(self.config.report.memory);
    }
}
