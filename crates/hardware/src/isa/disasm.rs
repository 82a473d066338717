//! Instruction Disassembler.
//!
//! Converts a 32-bit instruction word into the assembler syntax accepted by the
//! loader, for dispatch tracing, logging and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use pipesim_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0xD050_0000), "LRI r0, 5");
//! ```

use crate::isa::instruction::InstructionBits;
use crate::isa::opcode::Opcode;

/// Disassembles an instruction word.
pub fn disassemble(word: u32) -> String {
    let op1 = word.operand1();
    let op2 = word.operand2();
    let dest = word.destination();
    match word.opcode() {
        Opcode::Halt => "HALT".to_owned(),
        Opcode::Lri => format!("LRI r{dest}, {op1}"),
        Opcode::Ld => format!("LD r{dest}, {op1}"),
        Opcode::St => format!("ST r{op1}, {dest}"),
        jump @ (Opcode::J | Opcode::Jn | Opcode::Jz) => format!("{jump} {dest}"),
        Opcode::Alu(alu) if alu.is_binary() => {
            format!("{} r{dest}, r{op1}, r{op2}", alu.mnemonic())
        }
        Opcode::Alu(alu) => format!("{} r{dest}, r{op1}", alu.mnemonic()),
    }
}
