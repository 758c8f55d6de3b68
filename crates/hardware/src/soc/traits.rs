//! Device trait and region capabilities for memory-mapped access.
//!
//! This module defines what the address space needs from anything it maps. It provides:
//! 1. **Identification:** `name` and `size` for region construction and diagnostics.
//! 2. **Access:** Byte read/write at region-relative offsets.
//! 3. **Lifecycle:** An optional `tick`, called once per outer iteration before the CPU steps.
//! 4. **Downcasting:** An optional cast to `Uart` for driver-side access.
//! 5. **Capability:** The `Access` mode a region is mapped with.

use crate::soc::devices::Uart;

/// Trait for devices attached to the address space.
///
/// Offsets passed to `read_u8`/`write_u8` are always below `size()`; the address space
/// performs the range check.
pub trait Device: Send {
    /// Returns a short name for this device (e.g., `"UART"`, `"RAM"`).
    fn name(&self) -> &str;

    /// Returns the number of bytes this device occupies in the address space.
    fn size(&self) -> u32;

    /// Reads one byte at the given region-relative offset.
    ///
    /// Takes `&mut self` because a read may have side effects (a UART data read clears
    /// its "new data" flag).
    fn read_u8(&mut self, offset: u32) -> u8;

    /// Writes one byte at the given region-relative offset.
    fn write_u8(&mut self, offset: u32, val: u8);

    /// Writes a contiguous byte slice at the given offset (default: byte-by-byte).
    fn write_bytes(&mut self, offset: u32, data: &[u8]) {
        for (addr, byte) in (offset..).zip(data) {
            self.write_u8(addr, *byte);
        }
    }

    /// Advances device state by one outer iteration.
    fn tick(&mut self) {}

    /// Returns a mutable reference as `Uart` if this device is a UART; otherwise `None`.
    fn as_uart_mut(&mut self) -> Option<&mut Uart> {
        None
    }
}

/// Directions of access a region accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Access {
    /// Loads only (ROM).
    ReadOnly,
    /// Stores only.
    WriteOnly,
    /// Loads and stores (RAM, MMIO).
    ReadWrite,
    /// Mapped but inaccessible; every access is denied.
    None,
}

impl Access {
    /// Returns `true` if loads are permitted.
    pub const fn can_read(self) -> bool {
        matches!(self, Self::ReadOnly | Self::ReadWrite)
    }

    /// Returns `true` if stores are permitted.
    pub const fn can_write(self) -> bool {
        matches!(self, Self::WriteOnly | Self::ReadWrite)
    }
}
