//! Configuration system for the pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline run limits and report sizes.
//! 2. **Structures:** `general` (tracing, cycle limit) and `report` (end-of-run dump sizes).
//!
//! Configuration is supplied as JSON (`--config` on the CLI) or via `Config::default()`.
//! Every field is optional; missing fields take their default.

use serde::Deserialize;

use crate::common::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Cycles after which a run that has not reached `HALT` is aborted.
    pub const MAX_CYCLES: u64 = 1_000_000;

    /// Register-file cells shown in the final report.
    pub const REPORT_REGISTERS: usize = 10;

    /// Data-memory cells shown in the final report.
    pub const REPORT_MEMORY: usize = 10;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use pipesim_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_states": true, "max_cycles": 500 },
///     "report": { "registers": 4 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_states);
/// assert_eq!(config.general.max_cycles, 500);
/// assert_eq!(config.report.registers, 4);
/// assert_eq!(config.report.memory, 10);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// End-of-run report settings
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Parses a JSON configuration document.
    pub fn from_json(text: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Log every control transition at `info` level.
    #[serde(default)]
    pub trace_states: bool,

    /// Abort a run that has not halted after this many cycles. `0` disables the limit.
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: u64,
}

impl GeneralConfig {
    fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_states: false,
            max_cycles: defaults::MAX_CYCLES,
        }
    }
}

/// End-of-run report settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Number of registers printed, starting at `r0`.
    #[serde(default = "ReportConfig::default_registers")]
    pub registers: usize,

    /// Number of data-memory cells printed, starting at address 0.
    #[serde(default = "ReportConfig::default_memory")]
    pub memory: usize,
}

impl ReportConfig {
    fn default_registers() -> usize {
        defaults::REPORT_REGISTERS
    }

    fn default_memory() -> usize {
        defaults::REPORT_MEMORY
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            registers: defaults::REPORT_REGISTERS,
            memory: defaults::REPORT_MEMORY,
        }
    }
}
