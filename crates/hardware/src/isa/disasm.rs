//! Instruction Disassembler for RV32I.
//!
//! Converts a decoded instruction into assembler text for instruction tracing. Branch and
//! jump targets are printed as absolute addresses, so the caller passes the PC the
//! instruction was fetched from.
//!
//! # Usage
//!
//! ```
//! use rv32sim_core::isa::decode::decode;
//! use rv32sim_core::isa::disasm::disassemble;
//!
//! assert_eq!(disassemble(0, &decode(0xFFD0_8113)), "addi sp,ra,-3");
//! assert_eq!(disassemble(100, &decode(0x0000_0463)), "beq zero,zero,0x6c");
//! ```

use crate::isa::abi::name;
use crate::isa::instruction::Decoded;
use crate::isa::rv32i::{funct3, funct7, opcodes};

/// Disassembles a decoded instruction.
///
/// Returns `"unknown"` for encodings outside RV32I.
///
/// # Arguments
///
/// * `pc` - Address the instruction was fetched from.
/// * `d` - The decoded instruction.
pub fn disassemble(pc: u32, d: &Decoded) -> String {
    let rd = name(d.rd);
    let rs1 = name(d.rs1);
    let rs2 = name(d.rs2);
    let simm = d.imm as i32;

    let text = match d.opcode {
        opcodes::OP_LOAD => load_mnemonic(d.funct3).map(|m| format!("{m} {rd},{simm}({rs1})")),
        opcodes::OP_STORE => store_mnemonic(d.funct3).map(|m| format!("{m} {rs2},{simm}({rs1})")),
        opcodes::OP_IMM => op_imm(d, rd, rs1),
        opcodes::OP_REG => op_reg_mnemonic(d.funct3, d.funct7).map(|m| format!("{m} {rd},{rs1},{rs2}")),
        opcodes::OP_LUI => Some(format!("lui {rd},{:#x}", d.imm >> 12)),
        opcodes::OP_AUIPC => Some(format!("auipc {rd},{:#x}", d.imm >> 12)),
        opcodes::OP_BRANCH => branch_mnemonic(d.funct3)
            .map(|m| format!("{m} {rs1},{rs2},{:#x}", pc.wrapping_add(d.imm))),
        opcodes::OP_JAL => Some(format!("jal {rd},{:#x}", pc.wrapping_add(d.imm))),
        opcodes::OP_JALR => Some(format!("jalr {rd},{simm}({rs1})")),
        opcodes::OP_SYSTEM => Some("system".to_string()),
        _ => None,
    };
    text.unwrap_or_else(|| "unknown".to_string())
}

const fn load_mnemonic(f3: u32) -> Option<&'static str> {
    match f3 {
        funct3::LB => Some("lb"),
        funct3::LH => Some("lh"),
        funct3::LW => Some("lw"),
        funct3::LBU => Some("lbu"),
        funct3::LHU => Some("lhu"),
        _ => None,
    }
}

const fn store_mnemonic(f3: u32) -> Option<&'static str> {
    match f3 {
        funct3::SB => Some("sb"),
        funct3::SH => Some("sh"),
        funct3::SW => Some("sw"),
        _ => None,
    }
}

const fn branch_mnemonic(f3: u32) -> Option<&'static str> {
    match f3 {
        funct3::BEQ => Some("beq"),
        funct3::BNE => Some("bne"),
        funct3::BLT => Some("blt"),
        funct3::BGE => Some("bge"),
        funct3::BLTU => Some("bltu"),
        funct3::BGEU => Some("bgeu"),
        _ => None,
    }
}

const fn op_reg_mnemonic(f3: u32, f7: u32) -> Option<&'static str> {
    match (f3, f7) {
        (funct3::ADD_SUB, funct7::DEFAULT) => Some("add"),
        (funct3::ADD_SUB, funct7::SUB_SRA) => Some("sub"),
        (funct3::SLL, funct7::DEFAULT) => Some("sll"),
        (funct3::SLT, funct7::DEFAULT) => Some("slt"),
        (funct3::SLTU, funct7::DEFAULT) => Some("sltu"),
        (funct3::XOR, funct7::DEFAULT) => Some("xor"),
        (funct3::SRL_SRA, funct7::DEFAULT) => Some("srl"),
        (funct3::SRL_SRA, funct7::SUB_SRA) => Some("sra"),
        (funct3::OR, funct7::DEFAULT) => Some("or"),
        (funct3::AND, funct7::DEFAULT) => Some("and"),
        _ => None,
    }
}

fn op_imm(d: &Decoded, rd: &str, rs1: &str) -> Option<String> {
    let shamt = d.rs2;
    let simm = d.imm as i32;
    let text = match (d.funct3, d.funct7) {
        (funct3::SLL, funct7::DEFAULT) => format!("slli {rd},{rs1},{shamt}"),
        (funct3::SRL_SRA, funct7::DEFAULT) => format!("srli {rd},{rs1},{shamt}"),
        (funct3::SRL_SRA, funct7::SUB_SRA) => format!("srai {rd},{rs1},{shamt}"),
        (funct3::SLL | funct3::SRL_SRA, _) => return None,
        (funct3::ADD_SUB, _) => format!("addi {rd},{rs1},{simm}"),
        (funct3::SLT, _) => format!("slti {rd},{rs1},{simm}"),
        (funct3::SLTU, _) => format!("sltiu {rd},{rs1},{simm}"),
        (funct3::XOR, _) => format!("xori {rd},{rs1},{simm}"),
        (funct3::OR, _) => format!("ori {rd},{rs1},{simm}"),
        (funct3::AND, _) => format!("andi {rd},{rs1},{simm}"),
        _ => return None,
    };
    Some(text)
}
