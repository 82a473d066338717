//! Opcode definitions.
//!
//! The opcode field is 4 bits wide and every one of its 16 values has a defined meaning:
//! seven codes are control, memory and immediate operations, and the remaining nine select an
//! arithmetic/logic operation. The mapping is total, so decoding an opcode can never fail.

use std::fmt;

use crate::common::U4;

/// Stops the simulation when dispatched.
pub const HALT: u32 = 0;
/// Load a data-memory cell into a register.
pub const LD: u32 = 8;
/// Store a register into a data-memory cell.
pub const ST: u32 = 9;
/// Unconditional jump.
pub const J: u32 = 10;
/// Jump if the negative flag is set.
pub const JN: u32 = 11;
/// Jump if the zero flag is set.
pub const JZ: u32 = 12;
/// Load an immediate value into a register.
pub const LRI: u32 = 13;

/// Arithmetic/logic operation selected by a generic opcode.
///
/// Discriminants are the opcode values that select them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// `A + B`.
    Add = 1,
    /// `A - B`.
    Sub = 2,
    /// `A * B`, low 8 bits.
    Mul = 3,
    /// `A & B`.
    And = 4,
    /// `A | B`.
    Or = 5,
    /// `A ^ B`.
    Xor = 6,
    /// `!A`.
    Not = 7,
    /// `A << (B mod 8)`.
    Shl = 14,
    /// `A >> (B mod 8)`.
    Shr = 15,
}

impl AluOp {
    /// Every arithmetic/logic operation in opcode order.
    pub const ALL: [Self; 9] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Not,
        Self::Shl,
        Self::Shr,
    ];

    /// Returns the assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Not => "NOT",
            Self::Shl => "SHL",
            Self::Shr => "SHR",
        }
    }

    /// Returns the opcode value selecting this operation.
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Computes the 8-bit result of the operation.
    pub const fn apply(self, a: u8, b: u8) -> u8 {
        match self {
            Self::Add => a.wrapping_add(b),
            Self::Sub => a.wrapping_sub(b),
            Self::Mul => a.wrapping_mul(b),
            Self::And => a & b,
            Self::Or => a | b,
            Self::Xor => a ^ b,
            Self::Not => !a,
            Self::Shl => a << (b & 7),
            Self::Shr => a >> (b & 7),
        }
    }

    /// Whether the operation reads the second operand.
    pub const fn is_binary(self) -> bool {
        !matches!(self, Self::Not)
    }
}

/// Decoded opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Terminate the run.
    Halt,
    /// Load register from data memory.
    Ld,
    /// Store register to data memory.
    St,
    /// Unconditional jump.
    J,
    /// Jump if negative.
    Jn,
    /// Jump if zero.
    Jz,
    /// Load register with an immediate.
    Lri,
    /// Generic arithmetic/logic operation.
    Alu(AluOp),
}

impl Opcode {
    /// Decodes a 4-bit opcode. Total: every value has a meaning.
    pub const fn decode(code: U4) -> Self {
        match code.get() {
            HALT => Self::Halt,
            LD => Self::Ld,
            ST => Self::St,
            J => Self::J,
            JN => Self::Jn,
            JZ => Self::Jz,
            LRI => Self::Lri,
            1 => Self::Alu(AluOp::Add),
            2 => Self::Alu(AluOp::Sub),
            3 => Self::Alu(AluOp::Mul),
            4 => Self::Alu(AluOp::And),
            5 => Self::Alu(AluOp::Or),
            6 => Self::Alu(AluOp::Xor),
            7 => Self::Alu(AluOp::Not),
            14 => Self::Alu(AluOp::Shl),
            // U4 cannot exceed 15; the only value left is 15.
            _ => Self::Alu(AluOp::Shr),
        }
    }

    /// Encodes back into the 4-bit field.
    pub const fn encode(self) -> U4 {
        U4::masked(match self {
            Self::Halt => HALT,
            Self::Ld => LD,
            Self::St => ST,
            Self::J => J,
            Self::Jn => JN,
            Self::Jz => JZ,
            Self::Lri => LRI,
            Self::Alu(op) => op.code(),
        })
    }

    /// Returns the assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Halt => "HALT",
            Self::Ld => "LD",
            Self::St => "ST",
            Self::J => "J",
            Self::Jn => "JN",
            Self::Jz => "JZ",
            Self::Lri => "LRI",
            Self::Alu(op) => op.mnemonic(),
        }
    }

    /// Parses a mnemonic, ignoring case.
    pub fn from_mnemonic(text: &str) -> Option<Self> {
        let upper = text.to_ascii_uppercase();
        let op = match upper.as_str() {
            "HALT" => Self::Halt,
            "LD" => Self::Ld,
            "ST" => Self::St,
            "J" => Self::J,
            "JN" => Self::Jn,
            "JZ" => Self::Jz,
            "LRI" => Self::Lri,
            other => return AluOp::ALL.into_iter().find(|op| op.mnemonic() == other).map(Self::Alu),
        };
        Some(op)
    }

    /// Whether this is one of the three jump opcodes.
    pub const fn is_jump(self) -> bool {
        matches!(self, Self::J | Self::Jn | Self::Jz)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
