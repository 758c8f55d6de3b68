//! RISC-V Base Integer Instruction Set (RV32I).
//!
//! # Structure
//!
//! - `opcodes`: Opcode groups (bits 6-2) selecting the instruction format and handler.
//! - `funct3`: Minor opcodes distinguishing instructions within a group.
//! - `funct7`: Additional opcode bits for register-register and shift instructions.

/// Function code 3 definitions for base integer operations.
pub mod funct3;

/// Function code 7 definitions for base integer operations.
pub mod funct7;

/// Base integer instruction set opcode groups.
pub mod opcodes;
