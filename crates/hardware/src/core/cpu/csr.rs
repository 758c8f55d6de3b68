//! CSR Access Logic.
//!
//! The CPU-facing entry points to the CSR file. No instruction reaches them yet (the
//! SYSTEM group executes as a no-op); they exist for the driver and for tests.

use super::Cpu;
use crate::common::Trap;

impl Cpu {
    /// Reads a Control and Status Register.
    ///
    /// # Errors
    ///
    /// `Trap::InvalidRegister` for an unknown or reserved address.
    pub fn csr_read(&self, addr: u16) -> Result<u32, Trap> {
        self.csrs.get(addr)
    }

    /// Writes a Control and Status Register.
    ///
    /// # Errors
    ///
    /// `Trap::InvalidRegister` for an unknown or reserved address.
    pub fn csr_write(&mut self, addr: u16, val: u32) -> Result<(), Trap> {
        self.csrs.set(addr, val)
    }
}
