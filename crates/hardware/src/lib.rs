//! RV32I system emulator library.
//!
//! This crate implements a cycle-stepped emulator for a single-hart RV32I processor:
//! 1. **Core:** Fetch, length validation, decode and execution of the base integer ISA.
//! 2. **Address Space:** Byte-granular routing of loads and stores to ROM, RAM and the UART.
//! 3. **UART:** A two-register serial port bridged to a non-blocking host byte stream.
//! 4. **CSRs:** A fixed, address-keyed table of machine-mode control/status registers.
//! 5. **Simulation:** Loader, configuration, driver and statistics.

/// Common types and constants (registers, traps, errors, access types).
pub mod common;
/// Emulator configuration (defaults, sections, validation).
pub mod config;
/// CPU core (CSR file, ALU, fetch/decode/execute).
pub mod core;
/// Instruction set (field extraction, decode, disassembly, ABI names, RV32I constants).
pub mod isa;
/// Binary loader and simulator driver.
pub mod sim;
/// Address space, devices, UART and host channels.
pub mod soc;
/// Run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse it from JSON.
pub use crate::config::Config;
/// The hart: registers, PC, CSRs and the address space.
pub use crate::core::Cpu;
/// Top-level driver pairing the CPU with statistics.
pub use crate::sim::Simulator;
/// The memory map; build one with `AddressSpace::from_config`.
pub use crate::soc::AddressSpace;
/// The serial port.
pub use crate::soc::devices::Uart;
