//! Integer Register File.
//!
//! This module provides the `RegisterFile` struct holding the 32 integer registers of the
//! hart. It provides:
//! 1. **Storage:** Thirty-two 32-bit registers (`x0`-`x31`).
//! 2. **Zero Register:** `x0` is forced back to zero at the end of every cycle.
//! 3. **Observability:** A register dump in ABI-name form for the `--print-regs` control.

use std::fmt;

use super::constants::NUM_REGISTERS;
use crate::isa::abi;

/// The integer register file.
///
/// Writes land in storage unconditionally, including writes to `x0`; the CPU calls
/// [`RegisterFile::clear_zero`] after each instruction so that `x0` reads 0 at the start of
/// every cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u32; NUM_REGISTERS],
}

impl RegisterFile {
    /// Creates a register file with every register set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    #[inline(always)]
    pub fn read(&self, idx: usize) -> u32 {
        self.regs[idx]
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). A write to `x0` is kept only until the end of the cycle.
    /// * `val` - The value to store.
    #[inline(always)]
    pub fn write(&mut self, idx: usize, val: u32) {
        self.regs[idx] = val;
    }

    /// Forces `x0` back to zero.
    #[inline(always)]
    pub fn clear_zero(&mut self) {
        self.regs[abi::REG_ZERO] = 0;
    }

    /// Returns a copy of all 32 registers.
    pub fn snapshot(&self) -> [u32; NUM_REGISTERS] {
        self.regs
    }

    /// Prints the register dump to stdout.
    pub fn dump(&self) {
        println!("{self}");
    }
}

impl fmt::Display for RegisterFile {
    /// Four registers per line, `name=value` with eight hex digits, tab separated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..NUM_REGISTERS).step_by(4) {
            for col in row..row + 4 {
                if col != row {
                    f.write_str("\t")?;
                }
                write!(f, "{}={:08x}", abi::NAMES[col], self.regs[col])?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
