//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcode groups, function codes, and decoding logic for the
//! RV32I base integer instruction set.
//!
//! # Layout
//!
//! * `abi`: ABI register names used by the register dump.
//! * `instruction`: Field extraction from raw instruction words.
//! * `decode`: Length validation, sign extension and immediate formation.
//! * `disasm`: Assembler text for instruction tracing.
//! * `rv32i`: Opcode groups and function codes.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Instruction decoding logic for the RV32I instruction formats.
pub mod decode;

/// Instruction disassembler for instruction tracing.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Base integer instruction set (32-bit RISC-V core instructions).
pub mod rv32i;
