//! In-memory host channel.
//!
//! `Loopback::pair` returns the UART side and a host handle sharing one buffer pair, so a
//! test (or a headless run) can feed input bytes and inspect what the guest transmitted.

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::HostChannel;

#[derive(Debug, Default)]
struct Buffers {
    inbound: VecDeque<u8>,
    outbound: Vec<u8>,
}

type Shared = Arc<Mutex<Buffers>>;

fn lock(shared: &Shared) -> MutexGuard<'_, Buffers> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// UART side of an in-memory channel.
#[derive(Clone, Debug)]
pub struct Loopback {
    shared: Shared,
}

/// Host side of an in-memory channel.
#[derive(Clone, Debug)]
pub struct LoopbackHost {
    shared: Shared,
}

impl Loopback {
    /// Creates a connected channel and host handle.
    pub fn pair() -> (Self, LoopbackHost) {
        let shared = Shared::default();
        (
            Self {
                shared: Arc::clone(&shared),
            },
            LoopbackHost { shared },
        )
    }
}

impl HostChannel for Loopback {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut buffers = lock(&self.shared);
        if buffers.inbound.is_empty() {
            return Err(io::ErrorKind::WouldBlock.into());
        }
        let n = buf.len().min(buffers.inbound.len());
        for (slot, byte) in buf.iter_mut().zip(buffers.inbound.drain(..n)) {
            *slot = byte;
        }
        Ok(n)
    }

    fn write(&mut self, byte: u8) -> io::Result<()> {
        lock(&self.shared).outbound.push(byte);
        Ok(())
    }
}

impl LoopbackHost {
    /// Queues bytes for the UART to receive.
    pub fn send(&self, bytes: &[u8]) {
        lock(&self.shared).inbound.extend(bytes);
    }

    /// Takes every byte the UART has transmitted so far.
    pub fn take_output(&self) -> Vec<u8> {
        std::mem::take(&mut lock(&self.shared).outbound)
    }

    /// Number of input bytes not yet consumed by the UART.
    pub fn pending_input(&self) -> usize {
        lock(&self.shared).inbound.len()
    }
}
