//! Clocked component interface.
//!
//! The scheduler advances anything implementing [`Clocked`] once per tick, after the control
//! machine has driven that tick's control lines.

/// A component evaluated once per tick.
pub trait Clocked {
    /// Evaluates one tick against the control lines currently driven.
    fn tick(&mut self);
}
