//! Trap and error definitions.
//!
//! This module defines the error handling of the emulator. It provides:
//! 1. **Recoverable Traps:** Conditions that abandon one instruction while the emulator keeps running.
//! 2. **Address-Space Errors:** Failures of a single byte load or store routed through the region table.
//! 3. **Fatal Errors:** Malformed instruction streams, unusable images, and bad configuration.
//!
//! Nothing here is ever raised as a panic. Every public operation returns a `Result` and the
//! caller decides how to report it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::data::AccessType;

/// Recoverable traps.
///
/// A trap abandons the remaining side effects of the current instruction, but the cycle
/// still closes normally (register `x0` is cleared and the program counter advances). The
/// exception is a trap raised while fetching, which leaves the program counter untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum Trap {
    /// Unrecognised opcode group, `funct3` or `funct7` combination.
    ///
    /// The associated value is the raw instruction word.
    #[error("IllegalInstruction({0:#010x})")]
    IllegalInstruction(u32),

    /// Halfword or word access that is not naturally aligned.
    #[error("MisalignedAccess({access} @ {addr:#010x})")]
    MisalignedAccess {
        /// Kind of access that was attempted.
        access: AccessType,
        /// Effective address of the access.
        addr: u32,
    },

    /// Address not covered by any region, or region without the requested capability.
    #[error("InaccessibleMemory({access} @ {addr:#010x})")]
    InaccessibleMemory {
        /// Kind of access that was attempted.
        access: AccessType,
        /// Address of the byte that could not be accessed.
        addr: u32,
    },

    /// CSR address not present in the table, or entry without the requested capability.
    ///
    /// The associated value is the 12-bit CSR address.
    #[error("InvalidRegister({0:#05x})")]
    InvalidRegister(u16),
}

impl Trap {
    /// Builds the trap reported when a byte access fails in the address space.
    ///
    /// # Arguments
    ///
    /// * `access` - The kind of access the CPU was performing.
    /// * `err` - The address-space error.
    pub fn from_memory(access: AccessType, err: &MemoryError) -> Self {
        Self::InaccessibleMemory {
            access,
            addr: err.addr(),
        }
    }

    /// Short, stable name of the trap kind (used for statistics keys).
    pub fn kind(&self) -> &'static str {
        match self {
            Self::IllegalInstruction(_) => "illegal_instruction",
            Self::MisalignedAccess { .. } => "misaligned_access",
            Self::InaccessibleMemory { .. } => "inaccessible_memory",
            Self::InvalidRegister(_) => "invalid_register",
        }
    }
}

/// Failure of a single byte access routed through the address space.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// No region contains the address.
    #[error("unmapped address {0:#010x}")]
    Unmapped(u32),

    /// The covering region does not allow this direction of access (e.g. a store to ROM).
    #[error("access denied to {region} at {addr:#010x}")]
    AccessDenied {
        /// Name of the region that rejected the access.
        region: String,
        /// Address of the rejected access.
        addr: u32,
    },
}

impl MemoryError {
    /// Address the failed access targeted.
    pub fn addr(&self) -> u32 {
        match self {
            Self::Unmapped(addr) | Self::AccessDenied { addr, .. } => *addr,
        }
    }
}

/// Invalid emulator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two regions share at least one address.
    #[error("region {first} overlaps region {second}")]
    Overlap {
        /// Name of the region already in the table.
        first: String,
        /// Name of the region being added.
        second: String,
    },

    /// A region was configured with zero bytes.
    #[error("region {0} has zero size")]
    EmptyRegion(String),

    /// A region does not fit below the top of the 32-bit address space.
    #[error("region {name} at {base:#010x} with size {size:#x} exceeds the address space")]
    OutOfRange {
        /// Name of the region.
        name: String,
        /// Configured base address.
        base: u32,
        /// Configured size in bytes.
        size: u32,
    },

    /// The UART window must start on an even address (even = status, odd = data).
    #[error("UART base {0:#010x} is not 2-byte aligned")]
    MisalignedUart(u32),

    /// The configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fatal emulator errors.
///
/// These terminate a run: the driver stops stepping and the command-line front end exits
/// with a non-zero status.
#[derive(Debug, Error)]
pub enum SimError {
    /// The fetched word is not a 32-bit base encoding (low bits != `0b11`, or bits [4:2]
    /// all set).
    #[error("invalid instruction encoding {inst:#010x} at pc {pc:#010x}: not a 32-bit instruction")]
    InvalidInstructionEncoding {
        /// Address the word was fetched from.
        pc: u32,
        /// The offending word.
        inst: u32,
    },

    /// A binary image does not fit in the region it is loaded into.
    #[error("image of {len} bytes does not fit at {addr:#010x} ({available} bytes available)")]
    ImageTooLarge {
        /// Load address.
        addr: u32,
        /// Image length in bytes.
        len: usize,
        /// Bytes between the load address and the end of the covering region.
        available: usize,
    },

    /// The image load address is not inside any region.
    #[error("no region covers load address {0:#010x}")]
    UnmappedImage(u32),

    /// Reading an input file failed.
    #[error("could not read {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The host side of the UART could not be set up.
    #[error("could not open host channel: {0}")]
    HostChannel(#[source] io::Error),

    /// The configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
