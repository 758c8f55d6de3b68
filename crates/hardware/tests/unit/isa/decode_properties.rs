//! Instruction Decode Properties.
//!
//! Properties that must hold for every 32-bit word, checked with `proptest`, plus a few
//! fixed encodings taken from assembler output.

use proptest::prelude::*;
use rstest::rstest;
use rv32sim_core::isa::decode::{decode, is_base_length, sign_extend};
use rv32sim_core::isa::instruction::InstructionBits;
use rv32sim_core::isa::rv32i::opcodes;

use crate::common::builder::InstructionBuilder;

// ──────────────────────────────────────────────────────────
// Sign extension
// ──────────────────────────────────────────────────────────

#[rstest]
#[case(0x7FF, 11, 0x0000_07FF)]
#[case(0x800, 11, 0xFFFF_F800)]
#[case(0xFFF, 11, 0xFFFF_FFFF)]
#[case(0x1000, 12, 0xFFFF_F000)]
#[case(0x0FFE, 12, 0x0000_0FFE)]
#[case(0x80, 7, 0xFFFF_FF80)]
#[case(0x7F, 7, 0x0000_007F)]
#[case(0x8000, 15, 0xFFFF_8000)]
fn test_sign_extend_cases(#[case] value: u32, #[case] bit: u32, #[case] expected: u32) {
    assert_eq!(sign_extend(value, bit), expected);
}

proptest! {
    #[test]
    fn sign_extend_matches_arithmetic_shift(raw in any::<u32>(), bit in 0u32..32) {
        let width = bit + 1;
        let field = if width == 32 { raw } else { raw & ((1 << width) - 1) };
        let shift = 31 - bit;
        let expected = ((field << shift) as i32 >> shift) as u32;
        prop_assert_eq!(sign_extend(field, bit), expected);
    }

    #[test]
    fn register_fields_are_five_bits(inst in any::<u32>()) {
        let d = decode(inst);
        prop_assert!(d.rd < 32 && d.rs1 < 32 && d.rs2 < 32);
        prop_assert!(d.funct3 < 8);
        prop_assert!(d.funct7 < 128);
        prop_assert_eq!(d.opcode, (inst >> 2) & 0x1F);
        prop_assert_eq!(d.raw, inst);
    }

    #[test]
    fn i_immediate_is_top_twelve_bits_signed(inst in any::<u32>()) {
        let d = decode((inst & !0x7F) | (opcodes::OP_IMM << 2) | 0b11);
        prop_assert_eq!(d.imm, ((inst as i32) >> 20) as u32);
    }

    #[test]
    fn u_immediate_keeps_upper_twenty_bits(inst in any::<u32>()) {
        let d = decode((inst & !0x7F) | (opcodes::OP_LUI << 2) | 0b11);
        prop_assert_eq!(d.imm, inst & 0xFFFF_F000);
    }

    #[test]
    fn control_transfer_offsets_are_even(inst in any::<u32>()) {
        let branch = decode((inst & !0x7F) | (opcodes::OP_BRANCH << 2) | 0b11);
        let jal = decode((inst & !0x7F) | (opcodes::OP_JAL << 2) | 0b11);
        prop_assert_eq!(branch.imm & 1, 0);
        prop_assert_eq!(jal.imm & 1, 0);
    }

    #[test]
    fn branch_offset_survives_encoding(half in -2048i32..2048) {
        let offset = half * 2;
        let inst = InstructionBuilder::new().beq(3, 4, offset).build();
        prop_assert_eq!(decode(inst).imm as i32, offset);
    }

    #[test]
    fn jal_offset_survives_encoding(half in -(1i32 << 19)..(1i32 << 19)) {
        let offset = half * 2;
        let inst = InstructionBuilder::new().jal(1, offset).build();
        prop_assert_eq!(decode(inst).imm as i32, offset);
    }

    #[test]
    fn store_offset_survives_encoding(offset in -2048i32..2048) {
        let inst = InstructionBuilder::new().sw(1, 2, offset).build();
        prop_assert_eq!(decode(inst).imm as i32, offset);
    }

    #[test]
    fn base_length_follows_low_bits(inst in any::<u32>()) {
        let expected = inst & 0b11 == 0b11 && (inst >> 2) & 0b111 != 0b111;
        prop_assert_eq!(is_base_length(inst), expected);
    }
}

// ──────────────────────────────────────────────────────────
// Fixed encodings
// ──────────────────────────────────────────────────────────

#[test]
fn test_decode_addi_negative() {
    // addi sp, ra, -3
    let d = decode(0xFFD0_8113);
    assert_eq!(d.opcode, opcodes::OP_IMM);
    assert_eq!(d.rd, 2);
    assert_eq!(d.rs1, 1);
    assert_eq!(d.imm as i32, -3);
}

#[test]
fn test_decode_beq_forward() {
    // beq x0, x0, 8
    let d = decode(0x0000_0463);
    assert_eq!(d.opcode, opcodes::OP_BRANCH);
    assert_eq!(d.funct3, 0);
    assert_eq!(d.imm, 8);
}

#[test]
fn test_shift_amount_shares_rs2_field() {
    let inst = InstructionBuilder::new().srai(5, 6, 31).build();
    assert_eq!(inst.rs2(), 31);
    assert_eq!(inst.funct7(), 0x20);
}

#[rstest]
#[case(0x0000_0001, false)] // compressed
#[case(0x0000_0002, false)] // compressed
#[case(0x0000_001F, false)] // 48-bit
#[case(0x0000_003F, false)] // 64-bit
#[case(0x0000_0013, true)]
#[case(0x0000_0073, true)]
#[case(0x0000_006F, true)]
fn test_length_quadrants(#[case] inst: u32, #[case] ok: bool) {
    assert_eq!(is_base_length(inst), ok);
}
