//! Common utilities and types used throughout the RV32I emulator.
//!
//! This module provides the building blocks shared by every component. It includes:
//! 1. **Constants:** Instruction width and length-encoding masks.
//! 2. **Memory Access:** Classification of accesses into fetch, read and write.
//! 3. **Error Handling:** Recoverable traps, address-space errors and fatal simulator errors.
//! 4. **Register Management:** The 32-entry integer register file.

/// Common constants used throughout the emulator.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types and trap definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::INSTRUCTION_BYTES;
pub use data::AccessType;
pub use error::{ConfigError, MemoryError, SimError, Trap};
pub use reg::RegisterFile;
