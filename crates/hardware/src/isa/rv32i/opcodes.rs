//! RISC-V Base Integer (I) Opcode Groups.
//!
//! The low two bits of every 32-bit instruction are `0b11`, so only bits 6-2 select the
//! group. The constants below are those five bits.

/// Load instructions (LB, LH, LW, LBU, LHU).
pub const OP_LOAD: u32 = 0b00000;

/// Memory ordering instructions (FENCE). Not implemented.
pub const OP_MISC_MEM: u32 = 0b00011;

/// Immediate arithmetic instructions (ADDI, ANDI, SLLI, etc.).
pub const OP_IMM: u32 = 0b00100;

/// Add Upper Immediate to PC (AUIPC).
pub const OP_AUIPC: u32 = 0b00101;

/// Store instructions (SB, SH, SW).
pub const OP_STORE: u32 = 0b01000;

/// Register-Register arithmetic (ADD, SUB, SLL, etc.).
pub const OP_REG: u32 = 0b01100;

/// Load Upper Immediate (LUI).
pub const OP_LUI: u32 = 0b01101;

/// Conditional Branch instructions (BEQ, BNE, etc.).
pub const OP_BRANCH: u32 = 0b11000;

/// Jump and Link Register (JALR).
pub const OP_JALR: u32 = 0b11001;

/// Jump and Link (JAL).
pub const OP_JAL: u32 = 0b11011;

/// System instructions (ECALL, EBREAK, CSR*). Executed as no-ops.
pub const OP_SYSTEM: u32 = 0b11100;
