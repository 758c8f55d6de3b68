//! System-on-Chip (SoC) Components.
//!
//! This module organizes the components that make up the simulated system: the address
//! space that routes byte accesses, the storage and peripheral devices mapped into it, and
//! the host-side channels the UART talks to.

/// Memory-mapped I/O device implementations.
pub mod devices;

/// Host-side byte streams (pseudo-terminal, in-memory loopback).
pub mod host;

/// Address space and region routing.
pub mod interconnect;

/// ROM/RAM storage.
pub mod memory;

/// Device trait and access capabilities.
pub mod traits;

pub use interconnect::{AddressSpace, Region};
pub use traits::{Access, Device};
