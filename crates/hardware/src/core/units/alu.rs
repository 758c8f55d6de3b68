//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used by the `OP` and `OP-IMM` groups. It handles:
//! 1. **Arithmetic:** Add and subtract with 32-bit wrap-around.
//! 2. **Logic:** Or, and, xor, and the signed/unsigned set-less-than comparisons.
//! 3. **Shifts:** Logical left/right and arithmetic right, by the low 5 bits of the second
//!    operand.

use crate::isa::rv32i::{funct3, funct7};

/// Bit mask for the shift amount (5 bits: 0-31).
const SHAMT_MASK: u32 = 0x1F;

/// ALU operation selected by `funct3`/`funct7`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Shift left logical.
    Sll,
    /// Set if less than (signed).
    Slt,
    /// Set if less than (unsigned).
    Sltu,
    /// Bitwise exclusive or.
    Xor,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
    /// Bitwise or.
    Or,
    /// Bitwise and.
    And,
}

impl AluOp {
    /// Selects the operation of a register-register (`OP`) instruction.
    ///
    /// # Returns
    ///
    /// `None` for any `funct3`/`funct7` combination outside RV32I.
    pub const fn from_reg(f3: u32, f7: u32) -> Option<Self> {
        match (f3, f7) {
            (funct3::ADD_SUB, funct7::DEFAULT) => Some(Self::Add),
            (funct3::ADD_SUB, funct7::SUB_SRA) => Some(Self::Sub),
            (funct3::SLL, funct7::DEFAULT) => Some(Self::Sll),
            (funct3::SLT, funct7::DEFAULT) => Some(Self::Slt),
            (funct3::SLTU, funct7::DEFAULT) => Some(Self::Sltu),
            (funct3::XOR, funct7::DEFAULT) => Some(Self::Xor),
            (funct3::SRL_SRA, funct7::DEFAULT) => Some(Self::Srl),
            (funct3::SRL_SRA, funct7::SUB_SRA) => Some(Self::Sra),
            (funct3::OR, funct7::DEFAULT) => Some(Self::Or),
            (funct3::AND, funct7::DEFAULT) => Some(Self::And),
            _ => None,
        }
    }

    /// Selects the operation of a register-immediate (`OP-IMM`) instruction.
    ///
    /// `funct7` is only meaningful for the shifts, where it sits in the upper immediate bits.
    ///
    /// # Returns
    ///
    /// `None` for a shift with an unrecognised `funct7` (or a `funct3` wider than 3 bits).
    pub const fn from_imm(f3: u32, f7: u32) -> Option<Self> {
        match f3 {
            funct3::ADD_SUB => Some(Self::Add),
            funct3::SLL => match f7 {
                funct7::DEFAULT => Some(Self::Sll),
                _ => None,
            },
            funct3::SLT => Some(Self::Slt),
            funct3::SLTU => Some(Self::Sltu),
            funct3::XOR => Some(Self::Xor),
            funct3::SRL_SRA => match f7 {
                funct7::DEFAULT => Some(Self::Srl),
                funct7::SUB_SRA => Some(Self::Sra),
                _ => None,
            },
            funct3::OR => Some(Self::Or),
            funct3::AND => Some(Self::And),
            _ => None,
        }
    }

    /// Assembly mnemonic of the register-register form.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Sll => "sll",
            Self::Slt => "slt",
            Self::Sltu => "sltu",
            Self::Xor => "xor",
            Self::Srl => "srl",
            Self::Sra => "sra",
            Self::Or => "or",
            Self::And => "and",
        }
    }
}

/// Arithmetic Logic Unit for RV32I integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The operation to perform.
    /// * `a` - First operand (`rs1`).
    /// * `b` - Second operand (`rs2` or the sign-extended immediate; shifts use its low
    ///   5 bits).
    ///
    /// # Examples
    ///
    /// ```
    /// use rv32sim_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 5, (-3_i32) as u32), 2);
    /// assert_eq!(Alu::execute(AluOp::Slt, (-5_i32) as u32, 10), 1);
    /// assert_eq!(Alu::execute(AluOp::Sltu, (-5_i32) as u32, 10), 0);
    /// assert_eq!(Alu::execute(AluOp::Sra, 0x8000_0000, 4), 0xF800_0000);
    /// ```
    pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        let shamt = b & SHAMT_MASK;
        match op {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Sub => a.wrapping_sub(b),
            AluOp::Sll => a << shamt,
            AluOp::Slt => ((a as i32) < (b as i32)) as u32,
            AluOp::Sltu => (a < b) as u32,
            AluOp::Xor => a ^ b,
            AluOp::Srl => a >> shamt,
            AluOp::Sra => ((a as i32) >> shamt) as u32,
            AluOp::Or => a | b,
            AluOp::And => a & b,
        }
    }
}
