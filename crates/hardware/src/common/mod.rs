//! Common utilities and types used throughout the simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Widths:** Fixed-width unsigned values for every wire and field.
//! 2. **Constants:** Field layouts and storage sizes.
//! 3. **Error Handling:** Width, load and run-level error types.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types.
pub mod error;

/// Fixed-width unsigned values.
pub mod width;

pub use error::{LoadError, SimError, WidthError};
pub use width::{U2, U4, U8, U9, UInt};
