//! Program Loader.
//!
//! This module turns program text into an image the simulator can run. It performs:
//! 1. **Reading:** Loads the program file from disk.
//! 2. **Assembly:** Two passes over the text (labels, then encoding) via [`crate::isa::asm`].
//! 3. **Validation:** Rejects images larger than instruction memory.

use std::fs;
use std::path::Path;

use crate::common::constants::INSTRUCTION_MEMORY_WORDS;
use crate::common::{LoadError, U8, U9};
use crate::isa::asm::{self, Line};

/// An assembled program image.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    /// Instruction words, loaded from address 0.
    pub words: Vec<u32>,
    /// Data-memory cells to preset before the run.
    pub data: Vec<(U9, U8)>,
}

impl Program {
    /// Builds a program directly from instruction words with no data initialisers.
    pub fn from_words(words: impl Into<Vec<u32>>) -> Self {
        Self {
            words: words.into(),
            data: Vec::new(),
        }
    }
}

/// Assembles program text.
///
/// # Arguments
///
/// * `source` - The program text.
///
/// # Returns
///
/// The assembled image, or the first error found with its line number.
pub fn parse_program(source: &str) -> Result<Program, LoadError> {
    let labels = asm::collect_labels(source)?;
    let mut program = Program::default();
    for (idx, raw) in source.lines().enumerate() {
        let (_, statement) = asm::split_label(raw);
        match asm::assemble_statement(statement, idx + 1, &labels)? {
            Some(Line::Word(word)) => program.words.push(word),
            Some(Line::Data { address, value }) => program.data.push((address, value)),
            None => {}
        }
    }
    if program.words.len() > INSTRUCTION_MEMORY_WORDS {
        return Err(LoadError::TooLarge {
            words: program.words.len(),
            capacity: INSTRUCTION_MEMORY_WORDS,
        });
    }
    tracing::debug!(
        words = program.words.len(),
        data = program.data.len(),
        "program assembled"
    );
    Ok(program)
}

/// Reads and assembles a program file.
///
/// # Arguments
///
/// * `path` - Path to the program text file.
pub fn load_program(path: impl AsRef<Path>) -> Result<Program, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_program(&source)
}
