use pipesim_core::common::{U8, U9};
use pipesim_core::isa::{AluOp, Instruction, Opcode};

fn word(op: Opcode, operand1: u32, operand2: u32, destination: u32) -> u32 {
    Instruction::new(
        op,
        U8::masked(operand1),
        U8::masked(operand2),
        U9::masked(destination),
    )
    .encode()
}

pub fn halt() -> u32 {
    0
}

/// `rD <- imm`
pub fn lri(rd: u32, imm: u32) -> u32 {
    word(Opcode::Lri, imm, 0, rd)
}

/// `rD <- mem[addr]`
pub fn ld(rd: u32, addr: u32) -> u32 {
    word(Opcode::Ld, addr, 0, rd)
}

/// `mem[addr] <- rS`
pub fn st(rs: u32, addr: u32) -> u32 {
    word(Opcode::St, rs, 0, addr)
}

pub fn j(target: u32) -> u32 {
    word(Opcode::J, 0, 0, target)
}

pub fn jn(target: u32) -> u32 {
    word(Opcode::Jn, 0, 0, target)
}

pub fn jz(target: u32) -> u32 {
    word(Opcode::Jz, 0, 0, target)
}

/// `rD <- rA op rB`
pub fn alu(op: AluOp, rd: u32, ra: u32, rb: u32) -> u32 {
    word(Opcode::Alu(op), ra, rb, rd)
}
