//! Host-side byte streams for the UART.
//!
//! The UART never blocks the emulator: a `HostChannel` read that has nothing to deliver
//! reports `io::ErrorKind::WouldBlock` (or `Ok(0)`), and the UART treats both as "no data".
//!
//! Two implementations are provided:
//! 1. **`Pty`** (unix): a raw, non-blocking pseudo-terminal master whose slave path a
//!    terminal program can open.
//! 2. **`Loopback`**: an in-memory channel paired with a `LoopbackHost` handle for
//!    injecting input and collecting output.

use std::io;

/// In-memory channel used by tests and headless runs.
pub mod loopback;

/// Pseudo-terminal channel.
#[cfg(unix)]
pub mod pty;

pub use loopback::{Loopback, LoopbackHost};
#[cfg(unix)]
pub use pty::Pty;

/// External duplex byte stream the UART is bridged to.
pub trait HostChannel {
    /// Reads available bytes without blocking.
    ///
    /// # Returns
    ///
    /// The number of bytes copied into `buf`. `Ok(0)` or an error of kind
    /// `io::ErrorKind::WouldBlock` mean no data is available right now.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error on failure.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// Writes one byte to the host.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error on failure.
    fn write(&mut self, byte: u8) -> io::Result<()>;
}
