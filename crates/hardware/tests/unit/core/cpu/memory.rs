//! # CPU Memory Access Tests
//!
//! Loads and stores of every width, alignment traps, and accesses that fail in the address
//! space.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rv32sim_core::common::{AccessType, Trap};
use rv32sim_core::config::Config;
use rv32sim_core::core::cpu::memory::Width;
use rv32sim_core::core::{Cpu, InstructionClass};
use rv32sim_core::AddressSpace;

use crate::common::builder::InstructionBuilder as I;
use crate::common::harness::{RAM_BASE, TestContext};

#[rstest]
#[case(0x0000_0000)]
#[case(0x7FFF_FFFF)]
#[case(0x8000_0000)]
#[case(0xFFFF_FFFF)]
#[case(0x1234_5678)]
fn test_sw_then_lw_round_trips(#[case] value: u32) {
    let program = [I::new().sw(1, 2, 8).build(), I::new().lw(3, 1, 8).build()];
    let mut ctx = TestContext::new().load_program(0, &program);
    ctx.set_reg(1, RAM_BASE);
    ctx.set_reg(2, value);

    let outs = ctx.run(2);

    assert_eq!(ctx.get_reg(3), value);
    assert_eq!(outs[0].class, InstructionClass::Store);
    assert_eq!(outs[1].class, InstructionClass::Load);
    assert_eq!(ctx.peek::<4>(RAM_BASE + 8), value.to_le_bytes());
}

#[test]
fn test_byte_and_half_loads_extend_correctly() {
    let program = [
        I::new().sw(1, 2, 0).build(),
        I::new().lb(3, 1, 0).build(),
        I::new().lbu(4, 1, 0).build(),
        I::new().lh(5, 1, 2).build(),
        I::new().lhu(6, 1, 2).build(),
    ];
    let mut ctx = TestContext::new().load_program(0, &program);
    ctx.set_reg(1, RAM_BASE);
    ctx.set_reg(2, 0x8001_7F80);

    let _ = ctx.run(5);

    assert_eq!(ctx.get_reg(3), 0xFFFF_FF80);
    assert_eq!(ctx.get_reg(4), 0x0000_0080);
    assert_eq!(ctx.get_reg(5), 0xFFFF_8001);
    assert_eq!(ctx.get_reg(6), 0x0000_8001);
}

#[test]
fn test_sb_and_sh_write_only_their_bytes() {
    let program = [
        I::new().sw(1, 0, 0).build(),
        I::new().sb(1, 2, 1).build(),
        I::new().sh(1, 2, 2).build(),
    ];
    let mut ctx = TestContext::new().load_program(0, &program);
    ctx.set_reg(1, RAM_BASE);
    ctx.set_reg(2, 0xAABB_CCDD);

    let _ = ctx.run(3);

    assert_eq!(ctx.peek::<4>(RAM_BASE), [0x00, 0xDD, 0xDD, 0xCC]);
}

#[rstest]
#[case(I::new().lh(3, 1, 1), AccessType::Read, 1)]
#[case(I::new().lhu(3, 1, 3), AccessType::Read, 3)]
#[case(I::new().lw(3, 1, 2), AccessType::Read, 2)]
#[case(I::new().sh(1, 2, 1), AccessType::Write, 1)]
#[case(I::new().sw(1, 2, 3), AccessType::Write, 3)]
fn test_misaligned_access_traps_without_side_effects(
    #[case] inst: I,
    #[case] access: AccessType,
    #[case] offset: u32,
) {
    let mut ctx = TestContext::new().load_program(0, &[inst.build()]);
    ctx.set_reg(1, RAM_BASE);
    ctx.set_reg(2, 0xFFFF_FFFF);
    ctx.set_reg(3, 0x1234);

    let out = ctx.tick().unwrap();

    assert_eq!(
        out.trap,
        Some(Trap::MisalignedAccess {
            access,
            addr: RAM_BASE + offset
        })
    );
    assert_eq!(ctx.get_reg(3), 0x1234);
    assert_eq!(ctx.peek::<4>(RAM_BASE), [0; 4]);
    assert_eq!(ctx.pc(), 4);
}

#[test]
fn test_byte_access_has_no_alignment_requirement() {
    let program = [I::new().sb(1, 2, 3).build(), I::new().lbu(3, 1, 3).build()];
    let mut ctx = TestContext::new().load_program(0, &program);
    ctx.set_reg(1, RAM_BASE);
    ctx.set_reg(2, 0x5A);

    let outs = ctx.run(2);

    assert!(outs.iter().all(|o| o.retired()));
    assert_eq!(ctx.get_reg(3), 0x5A);
}

#[test]
fn test_load_from_unmapped_address() {
    let mut ctx = TestContext::new().load_program(0, &[I::new().lw(3, 1, 0).build()]);
    ctx.set_reg(1, 0x4000_0000);
    ctx.set_reg(3, 7);

    let out = ctx.tick().unwrap();

    assert_eq!(
        out.trap,
        Some(Trap::InaccessibleMemory {
            access: AccessType::Read,
            addr: 0x4000_0000
        })
    );
    assert_eq!(ctx.get_reg(3), 7);
    assert_eq!(ctx.pc(), 4);
}

#[test]
fn test_store_to_rom_is_denied() {
    let mut ctx = TestContext::new().load_program(0, &[I::new().sw(0, 2, 0x100).build()]);
    ctx.set_reg(2, 0xFFFF_FFFF);

    let out = ctx.tick().unwrap();

    assert_eq!(
        out.trap,
        Some(Trap::InaccessibleMemory {
            access: AccessType::Write,
            addr: 0x100
        })
    );
    assert_eq!(ctx.peek::<4>(0x100), [0; 4]);
}

#[test]
fn test_word_store_straddling_region_end_keeps_written_bytes() {
    // A six-byte RAM: the word at +4 has two bytes inside and two past the end.
    let mut config = Config::default();
    config.memory.ram_size = 6;
    let bus = AddressSpace::from_config(&config, None).unwrap();
    let mut cpu = Cpu::new(bus, &config);

    let err = cpu.store(RAM_BASE + 4, Width::Word, 0xDEAD_BEEF).unwrap_err();
    assert_eq!(
        err,
        Trap::InaccessibleMemory {
            access: AccessType::Write,
            addr: RAM_BASE + 6
        }
    );
    assert_eq!(cpu.bus.load_byte(RAM_BASE + 4), Ok(0xEF));
    assert_eq!(cpu.bus.load_byte(RAM_BASE + 5), Ok(0xBE));

    let err = cpu.load(RAM_BASE + 4, Width::Word).unwrap_err();
    assert_eq!(
        err,
        Trap::InaccessibleMemory {
            access: AccessType::Read,
            addr: RAM_BASE + 6
        }
    );
}

#[test]
fn test_width_alignment() {
    assert!(Width::Byte.is_aligned(3));
    assert!(Width::Half.is_aligned(2));
    assert!(!Width::Half.is_aligned(3));
    assert!(Width::Word.is_aligned(8));
    assert!(!Width::Word.is_aligned(6));
    assert_eq!(Width::Word.bytes(), 4);
}
