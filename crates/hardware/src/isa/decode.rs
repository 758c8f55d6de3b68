//! RV32I Instruction Decoder.
//!
//! This module handles the decoding of 32-bit instruction words into a structured `Decoded`
//! value. It performs:
//! 1. **Length Validation:** Rejects words that are not 32-bit base encodings.
//! 2. **Field Extraction:** Opcode group, registers and function codes.
//! 3. **Immediate Formation:** Picks the I/S/B/U/J layout from the opcode group and
//!    sign-extends it.

use crate::common::constants::{LENGTH_QUADRANT_32, LENGTH_QUADRANT_MASK, LONG_ENCODING_MASK};
use crate::isa::instruction::{Decoded, InstructionBits};
use crate::isa::rv32i::opcodes;

/// Sign bit of the I-Type and S-Type immediates.
pub const I_S_SIGN_BIT: u32 = 11;
/// Sign bit of the B-Type immediate.
pub const B_SIGN_BIT: u32 = 12;
/// Sign bit of the J-Type immediate.
pub const J_SIGN_BIT: u32 = 20;

/// Sign-extends a field whose sign bit sits at `sign_bit`.
///
/// If bit `sign_bit` of `value` is set, every bit from `sign_bit` through bit 31 is set;
/// otherwise `value` is returned unchanged.
///
/// # Arguments
///
/// * `value` - The raw field, right-aligned.
/// * `sign_bit` - Index of the field's sign bit (0-31).
///
/// # Examples
///
/// ```
/// use rv32sim_core::isa::decode::sign_extend;
///
/// assert_eq!(sign_extend(0x7FF, 11), 0x7FF);
/// assert_eq!(sign_extend(0x800, 11), 0xFFFF_F800);
/// ```
#[inline(always)]
pub fn sign_extend(value: u32, sign_bit: u32) -> u32 {
    if value & (1 << sign_bit) != 0 {
        value | (u32::MAX << sign_bit)
    } else {
        value
    }
}

/// Returns `true` if `inst` is a 32-bit base encoding this core can decode.
///
/// The two lowest bits must be `0b11` (not compressed) and bits [4:2] must not all be set
/// (that pattern announces an encoding longer than 32 bits).
#[inline(always)]
pub fn is_base_length(inst: u32) -> bool {
    inst & LENGTH_QUADRANT_MASK == LENGTH_QUADRANT_32 && inst & LONG_ENCODING_MASK != LONG_ENCODING_MASK
}

/// Decodes an instruction word into its component fields.
///
/// Callers must check [`is_base_length`] first; decoding never fails, unknown opcode groups
/// simply carry a zero immediate and are rejected at dispatch.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode.
pub fn decode(inst: u32) -> Decoded {
    let opcode = inst.opcode();

    let imm = match opcode {
        opcodes::OP_LOAD | opcodes::OP_IMM | opcodes::OP_JALR | opcodes::OP_SYSTEM => {
            sign_extend(inst.i_imm(), I_S_SIGN_BIT)
        }
        opcodes::OP_STORE => sign_extend(inst.s_imm(), I_S_SIGN_BIT),
        opcodes::OP_BRANCH => sign_extend(inst.b_imm(), B_SIGN_BIT),
        opcodes::OP_LUI | opcodes::OP_AUIPC => inst.u_imm() << 12,
        opcodes::OP_JAL => sign_extend(inst.j_imm(), J_SIGN_BIT),
        _ => 0,
    };

    Decoded {
        raw: inst,
        opcode,
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        funct3: inst.funct3(),
        funct7: inst.funct7(),
        imm,
    }
}
