//! Line Assembler.
//!
//! Turns the textual program format into instruction words and data initialisers.
//! One item per line; `#` and `;` start a comment. Recognised forms:
//!
//! ```text
//! start:              # label, usable as a jump target
//!     LRI r0, 5       # rD <- immediate
//!     LD  r1, 0x10    # rD <- mem[addr]       (addr is 8 bits)
//!     ST  r1, 0x110   # mem[addr] <- rS       (addr is 9 bits)
//!     ADD r0, r1      # rD <- rD op rA
//!     SUB r2, r0, r1  # rD <- rA op rB
//!     NOT r3, r2      # rD <- !rA
//!     JZ  start       # J / JN / JZ target
//!     .word 0x00000000
//!     .data 0x20, 7   # mem[0x20] <- 7 before the run
//!     HALT
//! ```
//!
//! Assembly is two-pass: the first pass assigns an address to every label, the second
//! encodes instructions with labels resolved.

use std::collections::HashMap;

use crate::common::{LoadError, U8, U9, UInt, WidthError};
use crate::isa::instruction::Instruction;
use crate::isa::opcode::{AluOp, Opcode};

/// One assembled source line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    /// An instruction word for the next instruction-memory slot.
    Word(u32),
    /// A data-memory cell to preset before the run.
    Data {
        /// Cell address.
        address: U9,
        /// Initial value.
        value: U8,
    },
}

/// Label name to instruction address.
pub type Labels = HashMap<String, u32>;

/// Strips comments and an optional leading `label:`.
///
/// Returns the label (if any) and the remaining statement text, trimmed.
pub fn split_label(raw: &str) -> (Option<&str>, &str) {
    let code = raw
        .split(['#', ';'])
        .next()
        .unwrap_or_default()
        .trim();
    match code.split_once(':') {
        Some((label, rest)) if is_identifier(label.trim()) => (Some(label.trim()), rest.trim()),
        _ => (None, code),
    }
}

/// Whether a statement emits an instruction word (as opposed to data or nothing).
fn emits_word(statement: &str) -> bool {
    !statement.is_empty() && !statement.to_ascii_lowercase().starts_with(".data")
}

/// Collects label addresses from the whole source (first pass).
pub fn collect_labels(source: &str) -> Result<Labels, LoadError> {
    let mut labels = Labels::new();
    let mut address = 0u32;
    for (idx, raw) in source.lines().enumerate() {
        let (label, statement) = split_label(raw);
        if let Some(name) = label {
            if labels.insert(name.to_owned(), address).is_some() {
                return Err(parse_error(idx + 1, format!("duplicate label '{name}'")));
            }
        }
        if emits_word(statement) {
            address += 1;
        }
    }
    Ok(labels)
}

/// Assembles one statement (comments and labels already stripped).
///
/// Returns `Ok(None)` for an empty statement.
pub fn assemble_statement(
    statement: &str,
    line: usize,
    labels: &Labels,
) -> Result<Option<Line>, LoadError> {
    if statement.is_empty() {
        return Ok(None);
    }
    let (head, rest) = statement
        .split_once(char::is_whitespace)
        .unwrap_or((statement, ""));
    let args: Vec<&str> = rest
        .split(',')
        .map(str::trim)
        .filter(|arg| !arg.is_empty())
        .collect();

    match head.to_ascii_lowercase().as_str() {
        ".word" => {
            expect_args(&args, 1, line, ".word")?;
            return number(args[0], line).map(|word| Some(Line::Word(word)));
        }
        ".data" => {
            expect_args(&args, 2, line, ".data")?;
            let address = field::<9>(number(args[0], line)?, line)?;
            let value = field::<8>(number(args[1], line)?, line)?;
            return Ok(Some(Line::Data { address, value }));
        }
        _ => {}
    }

    let Some(opcode) = Opcode::from_mnemonic(head) else {
        return Err(parse_error(line, format!("unknown mnemonic '{head}'")));
    };

    let zero8 = U8::ZERO;
    let inst = match opcode {
        Opcode::Halt => {
            expect_args(&args, 0, line, "HALT")?;
            Instruction::new(opcode, zero8, zero8, U9::ZERO)
        }
        Opcode::Lri => {
            expect_args(&args, 2, line, "LRI")?;
            let rd = register(args[0], line)?;
            let imm = field::<8>(number(args[1], line)?, line)?;
            Instruction::new(opcode, imm, zero8, rd)
        }
        Opcode::Ld => {
            expect_args(&args, 2, line, "LD")?;
            let rd = register(args[0], line)?;
            let addr = field::<8>(number(args[1], line)?, line)?;
            Instruction::new(opcode, addr, zero8, rd)
        }
        Opcode::St => {
            expect_args(&args, 2, line, "ST")?;
            let rs = field::<8>(register(args[0], line)?.get(), line)?;
            let addr = field::<9>(number(args[1], line)?, line)?;
            Instruction::new(opcode, rs, zero8, addr)
        }
        Opcode::J | Opcode::Jn | Opcode::Jz => {
            expect_args(&args, 1, line, opcode.mnemonic())?;
            let target = match labels.get(args[0]) {
                Some(&addr) => addr,
                None => number(args[0], line)?,
            };
            Instruction::new(opcode, zero8, zero8, field::<9>(target, line)?)
        }
        Opcode::Alu(AluOp::Not) => {
            expect_args(&args, 2, line, "NOT")?;
            let rd = register(args[0], line)?;
            let ra = source_register(args[1], line)?;
            Instruction::new(opcode, ra, zero8, rd)
        }
        Opcode::Alu(alu) => {
            let (rd, ra, rb) = match args.as_slice() {
                [rd, rb] => (
                    register(rd, line)?,
                    source_register(rd, line)?,
                    source_register(rb, line)?,
                ),
                [rd, ra, rb] => (
                    register(rd, line)?,
                    source_register(ra, line)?,
                    source_register(rb, line)?,
                ),
                _ => {
                    return Err(parse_error(
                        line,
                        format!("{} expects 2 or 3 operands, got {}", alu.mnemonic(), args.len()),
                    ));
                }
            };
            Instruction::new(opcode, ra, rb, rd)
        }
    };
    Ok(Some(Line::Word(inst.encode())))
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn parse_error(line: usize, message: String) -> LoadError {
    LoadError::Parse { line, message }
}

fn expect_args(args: &[&str], count: usize, line: usize, what: &str) -> Result<(), LoadError> {
    if args.len() == count {
        Ok(())
    } else {
        Err(parse_error(
            line,
            format!("{what} expects {count} operand(s), got {}", args.len()),
        ))
    }
}

fn number(text: &str, line: usize) -> Result<u32, LoadError> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16),
        None => text.replace('_', "").parse::<u32>(),
    };
    parsed.map_err(|_| parse_error(line, format!("invalid number '{text}'")))
}

fn field<const W: u32>(value: u32, line: usize) -> Result<UInt<W>, LoadError> {
    UInt::<W>::new(value).map_err(|source: WidthError| LoadError::Width { line, source })
}

fn register(text: &str, line: usize) -> Result<U9, LoadError> {
    let Some(index) = text.strip_prefix(['r', 'R']) else {
        return Err(parse_error(line, format!("expected a register, found '{text}'")));
    };
    field::<9>(number(index, line)?, line)
}

/// Source registers travel in 8-bit operand fields, so only `r0`-`r255` can be read.
fn source_register(text: &str, line: usize) -> Result<U8, LoadError> {
    field::<8>(register(text, line)?.get(), line)
}
