//! # Register File Tests

use pretty_assertions::assert_eq;
use rv32sim_core::common::RegisterFile;
use rv32sim_core::isa::abi;

#[test]
fn test_new_is_all_zero() {
    let regs = RegisterFile::new();
    assert_eq!(regs.snapshot(), [0u32; 32]);
}

#[test]
fn test_write_then_read() {
    let mut regs = RegisterFile::new();
    regs.write(abi::REG_A0, 0xDEAD_BEEF);
    regs.write(31, 7);
    assert_eq!(regs.read(abi::REG_A0), 0xDEAD_BEEF);
    assert_eq!(regs.read(31), 7);
}

#[test]
fn test_zero_register_survives_until_cleared() {
    let mut regs = RegisterFile::new();
    regs.write(abi::REG_ZERO, 5);
    assert_eq!(regs.read(0), 5);
    regs.clear_zero();
    assert_eq!(regs.read(0), 0);
}

#[test]
fn test_display_four_per_line() {
    let mut regs = RegisterFile::new();
    regs.write(abi::REG_SP, 0x0001_FFF0);
    regs.write(abi::REG_A1, 0xFF);

    let text = regs.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(
        lines[0],
        "zero=00000000\tra=00000000\tsp=0001fff0\tgp=00000000"
    );
    assert_eq!(
        lines[2],
        "s0=00000000\ts1=00000000\ta0=00000000\ta1=000000ff"
    );
    assert!(lines[7].starts_with("t3="));
}
