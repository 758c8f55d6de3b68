//! Universal Asynchronous Receiver-Transmitter (UART).
//!
//! Implements the two-register serial port of the machine:
//! 1. **DATA (odd address):** Reading returns the last received byte and consumes it;
//!    writing queues one byte for transmission.
//! 2. **CSR (even address):** Status byte with `NEWDAT` (bit 0, a received byte is waiting)
//!    and `TXDONE` (bit 1, the last written byte has been sent). Writes are ignored.
//!
//! The device is bridged to a `HostChannel`. All host I/O happens in `poll`, which the
//! driver calls once per outer iteration before the CPU steps; register accesses never
//! touch the host.

use std::fmt;
use std::io;

use tracing::{debug, trace};

use crate::soc::host::HostChannel;
use crate::soc::traits::Device;

/// Status bit: a received byte is waiting in DATA.
pub const NEWDAT: u8 = 1 << 0;

/// Status bit: the last byte written to DATA has been handed to the host.
pub const TXDONE: u8 = 1 << 1;

/// Bytes the UART occupies in the address space (CSR at even, DATA at odd).
pub const UART_WINDOW_SIZE: u32 = 2;

/// Scratch buffer size used when discarding surplus input.
const DRAIN_CHUNK: usize = 32;

/// The two UART registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UartRegister {
    /// Data register (odd address).
    Data,
    /// Control/status register (even address).
    Csr,
}

impl UartRegister {
    /// Selects the register for an address or offset: odd is DATA, even is CSR.
    pub const fn from_offset(offset: u32) -> Self {
        if offset & 1 == 1 { Self::Data } else { Self::Csr }
    }
}

/// UART device state.
pub struct Uart {
    /// Last byte received from the host.
    data_in: u8,
    /// Byte waiting to be transmitted (shadow of the DATA register on write).
    data_out: u8,
    /// `NEWDAT` / `TXDONE` flags.
    status: u8,
    host: Box<dyn HostChannel + Send>,
}

impl fmt::Debug for Uart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uart")
            .field("data_in", &self.data_in)
            .field("data_out", &self.data_out)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl Uart {
    /// Creates a UART bridged to `host`.
    ///
    /// The reset state has both data bytes at zero, `NEWDAT` clear and `TXDONE` set, so the
    /// first poll transmits nothing.
    pub fn new(host: Box<dyn HostChannel + Send>) -> Self {
        Self {
            data_in: 0,
            data_out: 0,
            status: TXDONE,
            host,
        }
    }

    /// Returns the status byte without side effects.
    pub const fn status(&self) -> u8 {
        self.status
    }

    /// Exchanges bytes with the host.
    ///
    /// 1. If no received byte is pending, reads at most one byte; on success it becomes the
    ///    DATA value and `NEWDAT` is set. Any further buffered input is then discarded.
    /// 2. If a transmit is pending, writes the DATA byte to the host and sets `TXDONE`.
    ///
    /// A read that would block counts as "no data". Host errors are logged and otherwise
    /// ignored; writes are assumed to complete.
    pub fn poll(&mut self) {
        if self.status & NEWDAT == 0 {
            let mut byte = [0u8; 1];
            match self.host.read(&mut byte) {
                Ok(1) => {
                    self.data_in = byte[0];
                    self.status |= NEWDAT;
                    trace!(byte = byte[0], "uart rx");
                }
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => {}
                Err(e) => debug!(error = %e, "uart host read failed"),
            }
            self.drain_input();
        }

        if self.status & TXDONE == 0 {
            if let Err(e) = self.host.write(self.data_out) {
                debug!(error = %e, byte = self.data_out, "uart host write failed");
            } else {
                trace!(byte = self.data_out, "uart tx");
            }
            self.status |= TXDONE;
        }
    }

    fn drain_input(&mut self) {
        let mut scratch = [0u8; DRAIN_CHUNK];
        while let Ok(n) = self.host.read(&mut scratch) {
            if n == 0 {
                break;
            }
            trace!(discarded = n, "uart rx overrun");
        }
    }

    /// Reads a register.
    ///
    /// Reading DATA clears `NEWDAT` and returns the last received byte. Reading CSR
    /// returns the status byte.
    pub fn get_register(&mut self, reg: UartRegister) -> u8 {
        match reg {
            UartRegister::Data => {
                self.status &= !NEWDAT;
                self.data_in
            }
            UartRegister::Csr => self.status,
        }
    }

    /// Writes a register.
    ///
    /// Writing DATA stores the byte for transmission and clears `TXDONE`. Writing CSR has
    /// no effect.
    pub fn set_register(&mut self, reg: UartRegister, val: u8) {
        match reg {
            UartRegister::Data => {
                self.data_out = val;
                self.status &= !TXDONE;
            }
            UartRegister::Csr => {}
        }
    }
}

impl Device for Uart {
    fn name(&self) -> &str {
        "UART"
    }

    fn size(&self) -> u32 {
        UART_WINDOW_SIZE
    }

    fn read_u8(&mut self, offset: u32) -> u8 {
        self.get_register(UartRegister::from_offset(offset))
    }

    fn write_u8(&mut self, offset: u32, val: u8) {
        self.set_register(UartRegister::from_offset(offset), val);
    }

    fn tick(&mut self) {
        self.poll();
    }

    fn as_uart_mut(&mut self) -> Option<&mut Uart> {
        Some(self)
    }
}
