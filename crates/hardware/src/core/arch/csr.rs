//! Control and Status Register (CSR) definitions and operations.
//!
//! This module implements the CSR subsystem for the machine-mode-only hart. It provides:
//! 1. **Address Definitions:** Constants for the standard machine CSRs the table knows about.
//! 2. **Field Masks:** `mstatus` bits that software may toggle and bits that are hard-wired.
//! 3. **Register Table:** The `CsrFile`, an immutable sorted table of entries, binary-searched
//!    by 12-bit address.
//! 4. **Access Logic:** `get`/`set` operations that fail with `Trap::InvalidRegister` for
//!    unknown addresses and for entries without the requested capability.

use crate::common::Trap;

/// Machine status register CSR address.
pub const MSTATUS: u16 = 0x300;

/// Machine ISA register CSR address.
pub const MISA: u16 = 0x301;

/// Machine interrupt enable register CSR address.
pub const MIE: u16 = 0x304;

/// Machine trap vector base address register CSR address.
pub const MTVEC: u16 = 0x305;

/// Machine scratch register CSR address.
pub const MSCRATCH: u16 = 0x340;

/// Machine exception program counter CSR address.
pub const MEPC: u16 = 0x341;

/// Machine cause register CSR address.
pub const MCAUSE: u16 = 0x342;

/// Machine trap value register CSR address.
pub const MTVAL: u16 = 0x343;

/// Machine interrupt pending register CSR address.
pub const MIP: u16 = 0x344;

/// Machine vendor ID CSR address.
pub const MVENDORID: u16 = 0xF11;

/// Machine architecture ID CSR address.
pub const MARCHID: u16 = 0xF12;

/// Machine implementation ID CSR address.
pub const MIMPID: u16 = 0xF13;

/// Machine hardware thread ID CSR address.
pub const MHARTID: u16 = 0xF14;

/// Machine interrupt enable bit in `mstatus`.
pub const MSTATUS_MIE: u32 = 1 << 3;

/// Machine previous interrupt enable bit in `mstatus`.
pub const MSTATUS_MPIE: u32 = 1 << 7;

/// Machine previous privilege field in `mstatus` (bits 11-12).
pub const MSTATUS_MPP: u32 = 0b11 << 11;

/// Behaviour of one CSR table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CsrKind {
    /// Always reads the stored constant; writes are accepted and discarded.
    Constant(u32),
    /// Read/write storage where only `writable` bits follow writes and `fixed` bits always
    /// read as set.
    Warl {
        /// Bits that follow software writes.
        writable: u32,
        /// Bits hard-wired to one.
        fixed: u32,
    },
    /// Known address with neither a get nor a set handler.
    Reserved,
}

/// One row of the CSR table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CsrEntry {
    /// 12-bit CSR address.
    pub addr: u16,
    /// Access behaviour.
    pub kind: CsrKind,
    value: u32,
}

impl CsrEntry {
    const fn new(addr: u16, kind: CsrKind) -> Self {
        let value = match kind {
            CsrKind::Constant(v) => v,
            CsrKind::Warl { fixed, .. } => fixed,
            CsrKind::Reserved => 0,
        };
        Self { addr, kind, value }
    }
}

/// The reset table, sorted by address.
const TABLE: [CsrEntry; 13] = [
    CsrEntry::new(
        MSTATUS,
        CsrKind::Warl {
            writable: MSTATUS_MIE | MSTATUS_MPIE,
            fixed: MSTATUS_MPP,
        },
    ),
    CsrEntry::new(MISA, CsrKind::Constant(0)),
    CsrEntry::new(MIE, CsrKind::Reserved),
    CsrEntry::new(MTVEC, CsrKind::Reserved),
    CsrEntry::new(
        MSCRATCH,
        CsrKind::Warl {
            writable: u32::MAX,
            fixed: 0,
        },
    ),
    CsrEntry::new(MEPC, CsrKind::Reserved),
    CsrEntry::new(MCAUSE, CsrKind::Reserved),
    CsrEntry::new(MTVAL, CsrKind::Reserved),
    CsrEntry::new(MIP, CsrKind::Reserved),
    CsrEntry::new(MVENDORID, CsrKind::Constant(0)),
    CsrEntry::new(MARCHID, CsrKind::Constant(0)),
    CsrEntry::new(MIMPID, CsrKind::Constant(0)),
    CsrEntry::new(MHARTID, CsrKind::Constant(0)),
];

/// The hart's control and status registers.
///
/// The set of addresses and their kinds is fixed at construction; only the value of
/// `Warl` entries changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsrFile {
    entries: Vec<CsrEntry>,
}

impl Default for CsrFile {
    fn default() -> Self {
        Self::new()
    }
}

impl CsrFile {
    /// Creates the CSR file in its reset state.
    pub fn new() -> Self {
        Self {
            entries: TABLE.to_vec(),
        }
    }

    fn lookup(&self, addr: u16) -> Result<usize, Trap> {
        self.entries
            .binary_search_by_key(&addr, |entry| entry.addr)
            .map_err(|_| Trap::InvalidRegister(addr))
    }

    /// Reads a CSR.
    ///
    /// # Arguments
    ///
    /// * `addr` - The 12-bit CSR address.
    ///
    /// # Returns
    ///
    /// The register value, or `Trap::InvalidRegister` if the address is unknown or reserved.
    pub fn get(&self, addr: u16) -> Result<u32, Trap> {
        let entry = &self.entries[self.lookup(addr)?];
        match entry.kind {
            CsrKind::Constant(_) | CsrKind::Warl { .. } => Ok(entry.value),
            CsrKind::Reserved => Err(Trap::InvalidRegister(addr)),
        }
    }

    /// Writes a CSR.
    ///
    /// Constant entries accept and drop the value. `Warl` entries keep the writable bits of
    /// `val` and force the fixed bits on.
    ///
    /// # Arguments
    ///
    /// * `addr` - The 12-bit CSR address.
    /// * `val` - The value to write.
    pub fn set(&mut self, addr: u16, val: u32) -> Result<(), Trap> {
        let idx = self.lookup(addr)?;
        let entry = &mut self.entries[idx];
        match entry.kind {
            CsrKind::Constant(_) => Ok(()),
            CsrKind::Warl { writable, fixed } => {
                entry.value = (val & writable) | fixed;
                Ok(())
            }
            CsrKind::Reserved => Err(Trap::InvalidRegister(addr)),
        }
    }

    /// Iterates over the table rows in address order.
    pub fn entries(&self) -> impl Iterator<Item = &CsrEntry> {
        self.entries.iter()
    }
}
