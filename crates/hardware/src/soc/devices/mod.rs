//! Memory-Mapped IO Devices.
//!
//! This module contains the peripherals mapped into the address space. Currently the only
//! one is the two-register serial port bridged to a host byte stream.

/// Two-register serial port (DATA and CSR).
pub mod uart;

pub use uart::{Uart, UartRegister};

pub use crate::soc::traits::Device;
