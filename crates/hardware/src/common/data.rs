//! Memory Access Types.
//!
//! This module defines the classification of memory accesses used throughout the emulator.
//! These types are used for the following:
//! 1. **Capability Checks:** Matching an access against a region's load/store capability.
//! 2. **Trap Reporting:** Recording which kind of access faulted.
//! 3. **Statistics Tracking:** Categorizing memory operations.

use std::fmt;

/// Type of memory access operation.
///
/// Used to distinguish between instruction fetches, data loads, and data stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessType {
    /// Instruction fetch access.
    ///
    /// Occurs when the CPU reads the four bytes at the program counter. Needs a
    /// readable region.
    Fetch,

    /// Data read access.
    ///
    /// Occurs during load instructions when reading data from memory into registers.
    Read,

    /// Data write access.
    ///
    /// Occurs during store instructions when writing data from registers to memory.
    Write,
}

impl AccessType {
    /// Returns `true` for accesses that read from the address space (fetches and loads).
    #[inline]
    pub fn is_load(self) -> bool {
        !matches!(self, Self::Write)
    }
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Fetch => "fetch",
            Self::Read => "load",
            Self::Write => "store",
        };
        f.write_str(s)
    }
}
