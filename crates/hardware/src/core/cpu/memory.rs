//! Memory Access Helpers.
//!
//! This module composes multi-byte accesses out of single-byte address-space calls. It
//! performs the following:
//! 1. **Alignment:** Halfword and word data accesses must be naturally aligned.
//! 2. **Composition:** Bytes are accessed at consecutive addresses in little-endian order.
//! 3. **Error Mapping:** Address-space failures become `Trap::InaccessibleMemory`.
//!
//! A load that fails part-way leaves its destination untouched. A store that fails part-way
//! keeps the bytes it already wrote; no atomicity is implied across the composed bytes.

use super::Cpu;
use crate::common::{AccessType, Trap};

/// Width of a data access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Width {
    /// One byte.
    Byte = 1,
    /// Two bytes.
    Half = 2,
    /// Four bytes.
    Word = 4,
}

impl Width {
    /// Number of bytes.
    pub const fn bytes(self) -> u32 {
        self as u32
    }

    /// Returns `true` if `addr` is naturally aligned for this width.
    pub const fn is_aligned(self, addr: u32) -> bool {
        addr % self.bytes() == 0
    }
}

impl Cpu {
    /// Fetches the instruction word at `pc`.
    ///
    /// Fetch does not check alignment; the four bytes at `pc..pc+3` are read as they are.
    ///
    /// # Errors
    ///
    /// `Trap::InaccessibleMemory` with `AccessType::Fetch` if any byte cannot be read.
    pub fn fetch(&mut self, pc: u32) -> Result<u32, Trap> {
        self.read_le(pc, Width::Word, AccessType::Fetch)
    }

    /// Loads a zero-extended value of the given width.
    ///
    /// # Errors
    ///
    /// `Trap::MisalignedAccess` if `addr` is not aligned to `width`, and
    /// `Trap::InaccessibleMemory` if any byte cannot be read.
    pub fn load(&mut self, addr: u32, width: Width) -> Result<u32, Trap> {
        if !width.is_aligned(addr) {
            return Err(Trap::MisalignedAccess {
                access: AccessType::Read,
                addr,
            });
        }
        self.read_le(addr, width, AccessType::Read)
    }

    /// Stores the low `width` bytes of `val`.
    ///
    /// # Errors
    ///
    /// `Trap::MisalignedAccess` if `addr` is not aligned to `width` (nothing is written), and
    /// `Trap::InaccessibleMemory` at the first byte that cannot be written.
    pub fn store(&mut self, addr: u32, width: Width, val: u32) -> Result<(), Trap> {
        if !width.is_aligned(addr) {
            return Err(Trap::MisalignedAccess {
                access: AccessType::Write,
                addr,
            });
        }
        let bytes = val.to_le_bytes();
        for (i, byte) in (0..width.bytes()).zip(bytes) {
            let at = addr.wrapping_add(i);
            self.bus
                .store_byte(at, byte)
                .map_err(|e| Trap::from_memory(AccessType::Write, &e))?;
        }
        Ok(())
    }

    fn read_le(&mut self, addr: u32, width: Width, access: AccessType) -> Result<u32, Trap> {
        let mut bytes = [0u8; 4];
        for (i, slot) in (0..width.bytes()).zip(bytes.iter_mut()) {
            let at = addr.wrapping_add(i);
            *slot = self
                .bus
                .load_byte(at)
                .map_err(|e| Trap::from_memory(access, &e))?;
        }
        Ok(u32::from_le_bytes(bytes))
    }
}
