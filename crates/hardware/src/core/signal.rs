//! Single-writer signal cells.
//!
//! A signal models one wire between two components. Creating a signal yields exactly one
//! [`SignalWriter`] and a [`SignalReader`]; the writer cannot be cloned, so a wire has a single
//! driver for its whole lifetime, while readers can be cloned and handed to any number of
//! consumers.
//!
//! The machine is simulated on one thread with one component acting at a time, so a write is
//! visible to every reader as soon as it returns. Within a tick the scheduler runs the control
//! step first and the datapath second, which gives the datapath a combinational view of the
//! control lines driven this tick; control in turn observes the datapath's writes on the next tick.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

struct Wire<T> {
    name: &'static str,
    value: Cell<T>,
}

/// Creates a wire holding `initial`, returning its only writer and a first reader.
pub fn signal<T: Copy>(name: &'static str, initial: T) -> (SignalWriter<T>, SignalReader<T>) {
    let wire = Rc::new(Wire {
        name,
        value: Cell::new(initial),
    });
    (
        SignalWriter {
            wire: Rc::clone(&wire),
        },
        SignalReader { wire },
    )
}

/// The driving end of a wire.
pub struct SignalWriter<T: Copy> {
    wire: Rc<Wire<T>>,
}

impl<T: Copy> SignalWriter<T> {
    /// Drives a new value onto the wire. It persists until overwritten.
    #[inline]
    pub fn write(&mut self, value: T) {
        self.wire.value.set(value);
    }

    /// Value most recently driven.
    #[inline]
    pub fn current(&self) -> T {
        self.wire.value.get()
    }
}

/// A read-only view of a wire.
pub struct SignalReader<T: Copy> {
    wire: Rc<Wire<T>>,
}

impl<T: Copy> SignalReader<T> {
    /// Returns the value most recently written.
    #[inline]
    pub fn read(&self) -> T {
        self.wire.value.get()
    }
}

impl<T: Copy> Clone for SignalReader<T> {
    fn clone(&self) -> Self {
        Self {
            wire: Rc::clone(&self.wire),
        }
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for SignalWriter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalWriter")
            .field("name", &self.wire.name)
            .field("value", &self.current())
            .finish()
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for SignalReader<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalReader")
            .field("name", &self.wire.name)
            .field("value", &self.read())
            .finish()
    }
}
