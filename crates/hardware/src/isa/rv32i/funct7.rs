//! RISC-V Base Integer (I) Function Codes (funct7).

/// Default funct7: ADD, SRL, SRLI, SLL, SLLI and the other plain register operations.
pub const DEFAULT: u32 = 0b0000000;

/// Alternate funct7: SUB, SRA, SRAI.
pub const SUB_SRA: u32 = 0b0100000;
