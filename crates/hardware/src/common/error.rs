//! Error definitions.
//!
//! This module defines the error types of the simulator. It provides:
//! 1. **Width Errors:** Values that do not fit the bit width of the field they were built for.
//! 2. **Load Errors:** Failures reading or assembling a program image, tagged with the line.
//! 3. **Simulation Errors:** Run-level failures (bad configuration, runaway programs).
//!
//! The control machine itself has no error path: every opcode has a defined dispatch.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A value did not fit the declared width of the field it was built for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("value {value:#x} does not fit in {bits} bits")]
pub struct WidthError {
    /// The rejected value.
    pub value: u32,
    /// Declared width of the target field.
    pub bits: u32,
}

/// Failure while reading or assembling a program image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read '{path}': {source}")]
    Io {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A source line could not be assembled.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number in the program text.
        line: usize,
        /// Human readable reason.
        message: String,
    },

    /// An operand was out of range for its field.
    #[error("line {line}: {source}")]
    Width {
        /// 1-based line number in the program text.
        line: usize,
        /// The width violation.
        #[source]
        source: WidthError,
    },

    /// The program does not fit into instruction memory.
    #[error("program has {words} instructions but instruction memory holds {capacity}")]
    TooLarge {
        /// Number of instruction words in the image.
        words: usize,
        /// Instruction memory capacity in words.
        capacity: usize,
    },
}

/// Run-level simulation failure.
#[derive(Debug, Error)]
pub enum SimError {
    /// The program image could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The configuration file could not be read.
    #[error("could not read configuration '{path}': {source}")]
    ConfigIo {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration text is not valid JSON for [`crate::config::Config`].
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The program ran for the configured cycle limit without reaching `HALT`.
    #[error("no HALT after {cycles} cycles")]
    CycleLimitExceeded {
        /// Cycles elapsed when the run was abandoned.
        cycles: u64,
    },
}
