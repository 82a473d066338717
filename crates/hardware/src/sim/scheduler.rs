//! Tick Scheduler.
//!
//! Advances the machine one clock tick at a time. Within a tick the control machine steps
//! first, driving its lines, and the datapath evaluates second against those lines. Once
//! `HALT` has been dispatched no further ticks are taken and the datapath is left untouched.

use crate::core::ControlFsm;
use crate::core::control::Step;
use crate::core::traits::Clocked;

/// Owns the control machine and the component it clocks.
#[derive(Debug)]
pub struct Scheduler<D: Clocked> {
    control: ControlFsm,
    datapath: D,
    ticks: u64,
}

impl<D: Clocked> Scheduler<D> {
    /// Creates a scheduler at tick zero.
    pub fn new(control: ControlFsm, datapath: D) -> Self {
        Self {
            control,
            datapath,
            ticks: 0,
        }
    }

    /// Advances one tick.
    ///
    /// # Returns
    ///
    /// The control step taken, or `None` when the machine had already halted.
    pub fn tick(&mut self) -> Option<Step> {
        let step = self.control.step()?;
        self.ticks += 1;
        if !step.halted() {
            self.datapath.tick();
        }
        Some(step)
    }

    /// Ticks taken so far.
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The control machine.
    pub const fn control(&self) -> &ControlFsm {
        &self.control
    }

    /// The clocked component.
    pub const fn datapath(&self) -> &D {
        &self.datapath
    }
}
