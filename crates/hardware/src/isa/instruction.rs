//! Instruction encoding and field extraction utilities.
//!
//! Provides bit extraction functions and structures for pulling RV32I instruction fields
//! out of 32-bit instruction words. Every function here is pure.

/// Bit shift for the opcode group field (bits 6-2).
pub const OPCODE_SHIFT: u32 = 2;
/// Bit mask for the opcode group field after shifting (5 bits).
pub const OPCODE_MASK: u32 = 0x1F;
/// Bit mask for extracting the destination register field (bits 7-11).
pub const RD_MASK: u32 = 0x1F;
/// Bit mask for extracting the first source register field (bits 15-19).
pub const RS1_MASK: u32 = 0x1F;
/// Bit mask for extracting the second source register field (bits 20-24).
pub const RS2_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;

/// Bit shift for the I-Type immediate (bits 20-31).
const I_IMM_SHIFT: u32 = 20;
/// Bit mask for the I-Type immediate (12 bits).
const I_IMM_MASK: u32 = 0xFFF;

/// S-Type immediate: `imm[11:5]` sits at bits 25-31, `imm[4:0]` at bits 7-11.
const S_IMM_HIGH_SHIFT: u32 = 25;
const S_IMM_HIGH_MASK: u32 = 0x7F;
const S_IMM_LOW_SHIFT: u32 = 7;
const S_IMM_LOW_MASK: u32 = 0x1F;

/// B-Type immediate pieces: `imm[12] | imm[10:5] | ... | imm[4:1] | imm[11]`.
const B_IMM_12_SHIFT: u32 = 31;
const B_IMM_11_SHIFT: u32 = 7;
const B_IMM_10_5_SHIFT: u32 = 25;
const B_IMM_10_5_MASK: u32 = 0x3F;
const B_IMM_4_1_SHIFT: u32 = 8;
const B_IMM_4_1_MASK: u32 = 0xF;

/// Bit shift for the U-Type immediate (bits 12-31).
const U_IMM_SHIFT: u32 = 12;

/// J-Type immediate pieces: `imm[20] | imm[10:1] | imm[11] | imm[19:12]`.
const J_IMM_20_SHIFT: u32 = 31;
const J_IMM_10_1_SHIFT: u32 = 21;
const J_IMM_10_1_MASK: u32 = 0x3FF;
const J_IMM_11_SHIFT: u32 = 20;
const J_IMM_19_12_SHIFT: u32 = 12;
const J_IMM_19_12_MASK: u32 = 0xFF;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Immediate accessors return the raw, *unextended* field assembled at its architectural bit
/// position; sign extension is applied by [`crate::isa::decode`].
pub trait InstructionBits {
    /// Extracts the 5-bit opcode group (bits 6-2).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    ///
    /// For immediate shifts this field doubles as the 5-bit shift amount.
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    fn funct7(&self) -> u32;

    /// I-Type immediate: bits 31-20 as a 12-bit value.
    fn i_imm(&self) -> u32;

    /// S-Type immediate: `bits[31:25] << 5 | bits[11:7]` as a 12-bit value.
    fn s_imm(&self) -> u32;

    /// B-Type immediate: 13-bit branch offset, bit 0 always clear.
    fn b_imm(&self) -> u32;

    /// U-Type immediate: bits 31-12 in the low 20 bits (shift left by 12 before use).
    fn u_imm(&self) -> u32;

    /// J-Type immediate: 21-bit jump offset, bit 0 always clear.
    fn j_imm(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & RD_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & RS1_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & RS2_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }

    #[inline(always)]
    fn i_imm(&self) -> u32 {
        (self >> I_IMM_SHIFT) & I_IMM_MASK
    }

    #[inline(always)]
    fn s_imm(&self) -> u32 {
        let high = (self >> S_IMM_HIGH_SHIFT) & S_IMM_HIGH_MASK;
        let low = (self >> S_IMM_LOW_SHIFT) & S_IMM_LOW_MASK;
        (high << 5) | low
    }

    #[inline(always)]
    fn b_imm(&self) -> u32 {
        let bit_12 = (self >> B_IMM_12_SHIFT) & 1;
        let bit_11 = (self >> B_IMM_11_SHIFT) & 1;
        let bits_10_5 = (self >> B_IMM_10_5_SHIFT) & B_IMM_10_5_MASK;
        let bits_4_1 = (self >> B_IMM_4_1_SHIFT) & B_IMM_4_1_MASK;
        (bit_12 << 12) | (bit_11 << 11) | (bits_10_5 << 5) | (bits_4_1 << 1)
    }

    #[inline(always)]
    fn u_imm(&self) -> u32 {
        self >> U_IMM_SHIFT
    }

    #[inline(always)]
    fn j_imm(&self) -> u32 {
        let bit_20 = (self >> J_IMM_20_SHIFT) & 1;
        let bits_19_12 = (self >> J_IMM_19_12_SHIFT) & J_IMM_19_12_MASK;
        let bit_11 = (self >> J_IMM_11_SHIFT) & 1;
        let bits_10_1 = (self >> J_IMM_10_1_SHIFT) & J_IMM_10_1_MASK;
        (bit_20 << 20) | (bits_19_12 << 12) | (bit_11 << 11) | (bits_10_1 << 1)
    }
}

/// Decoded instruction structure containing all extracted fields.
///
/// `imm` holds the final operand for the instruction's format: sign-extended for
/// I/S/B/J formats, already shifted into bits 31-12 for U format, and zero for R format and
/// unknown opcode groups.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Opcode group (bits 6-2).
    pub opcode: u32,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index (shift amount for immediate shifts).
    pub rs2: usize,
    /// funct3 field.
    pub funct3: u32,
    /// funct7 field.
    pub funct7: u32,
    /// Immediate operand for the instruction's format.
    pub imm: u32,
}
