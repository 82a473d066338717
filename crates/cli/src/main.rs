//! Pipelined CPU simulator CLI.
//!
//! This binary loads a program text file and runs it to `HALT`. It performs:
//! 1. **Setup:** Installs the log subscriber and reads an optional JSON configuration.
//! 2. **Run:** Assembles the program, runs it under the configured cycle limit.
//! 3. **Report:** Prints the cycle count and the register and memory prefixes, plus statistics on request.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pipesim_core::common::SimError;
use pipesim_core::config::Config;
use pipesim_core::isa::disasm::disassemble;
use pipesim_core::sim::{Simulator, load_program};

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "Cycle-accurate pipelined CPU simulator",
    long_about = "Assemble a program text file and run it to HALT.\n\nExamples:\n  sim run programs/sum.s\n  sim run programs/sum.s --config run.json --stats\n  RUST_LOG=trace sim run programs/sum.s\n  sim disasm programs/sum.s"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program to HALT and print the report.
    Run {
        /// Program text file.
        program: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Log every control transition (same as `general.trace_states`).
        #[arg(long)]
        trace: bool,

        /// Print run statistics after the report. Optionally restrict to named sections.
        #[arg(long, num_args = 0.., value_name = "SECTION")]
        stats: Option<Vec<String>>,
    },

    /// Assemble a program and print the encoded words with their disassembly.
    Disasm {
        /// Program text file.
        program: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = matches!(cli.command, Commands::Run { trace: true, .. });
    init_logging(verbose);

    let result = match cli.command {
        Commands::Run {
            program,
            config,
            trace,
            stats,
        } => cmd_run(&program, config.as_deref(), trace, stats.as_deref()),
        Commands::Disasm { program } => cmd_disasm(&program),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the fmt subscriber. `RUST_LOG` wins; otherwise `warn`, or `info` with `--trace`.
fn init_logging(verbose: bool) {
    let fallback = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_config(path: Option<&Path>) -> Result<Config, SimError> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = fs::read_to_string(path).map_err(|source| SimError::ConfigIo {
        path: path.to_path_buf(),
        source,
    })?;
    Config::from_json(&text)
}

/// Runs a program to `HALT` and prints the report.
///
/// # Arguments
///
/// * `program` - Program text file.
/// * `config` - Optional JSON configuration file.
/// * `trace` - Force per-tick state logging.
/// * `stats` - Statistics sections to print, if any (empty means all).
fn cmd_run(
    program: &Path,
    config: Option<&Path>,
    trace: bool,
    stats: Option<&[String]>,
) -> Result<(), SimError> {
    let mut config = read_config(config)?;
    config.general.trace_states |= trace;

    let image = load_program(program)?;
    println!("[*] Program: {} ({} words)", program.display(), image.words.len());

    let mut sim = Simulator::new(&image, &config)?;
    let outcome = sim.run();
    if let Err(e) = &outcome {
        eprintln!("\n[!] {e}");
    }
    sim.print_report();
    if let Some(sections) = stats {
        sim.stats.print_sections(sections);
    }
    outcome.map(|_| ())
}

/// Prints each assembled word next to its disassembly.
fn cmd_disasm(program: &Path) -> Result<(), SimError> {
    let image = load_program(program)?;
    for (addr, word) in image.words.iter().enumerate() {
        println!("{addr:#05x}: {word:#010x}  {}", disassemble(*word));
    }
    for (address, value) in &image.data {
        println!(".data {:#05x}, {:#04x}", address.get(), value.get());
    }
    Ok(())
}
