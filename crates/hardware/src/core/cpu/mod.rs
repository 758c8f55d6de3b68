//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the container for the hart's state. It
//! coordinates the following:
//! 1. **State Management:** Integer registers, program counter and the CSR file.
//! 2. **System Integration:** Owns the address space every fetch, load and store goes through.
//! 3. **Observability:** Each step reports a `StepOutcome` describing what happened.

/// Control and Status Register access.
pub mod csr;

/// Fetch, decode and per-group execution.
pub mod execution;

/// Width-composed loads and stores with alignment checks.
pub mod memory;

use crate::common::{RegisterFile, Trap};
use crate::config::Config;
use crate::core::arch::csr::CsrFile;
use crate::soc::AddressSpace;

/// Broad category of an executed instruction, used for statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstructionClass {
    /// Nothing was decoded (the fetch itself trapped).
    None,
    /// Register/immediate arithmetic, logic, shifts, LUI and AUIPC.
    Alu,
    /// LB/LH/LW/LBU/LHU.
    Load,
    /// SB/SH/SW.
    Store,
    /// Conditional branch and whether it was taken.
    Branch {
        /// The condition held and the PC was redirected.
        taken: bool,
    },
    /// JAL/JALR.
    Jump,
    /// SYSTEM group (executed as a no-op).
    System,
    /// Opcode group this core does not implement.
    Unknown,
}

/// Result of one CPU step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    /// Address the instruction was fetched from.
    pub pc: u32,
    /// The fetched instruction word, if the fetch succeeded.
    pub inst: Option<u32>,
    /// Category of the instruction.
    pub class: InstructionClass,
    /// Recoverable trap raised by this step, if any.
    pub trap: Option<Trap>,
}

impl StepOutcome {
    /// Returns `true` if the instruction completed without a trap.
    pub const fn retired(&self) -> bool {
        self.trap.is_none()
    }
}

/// The hart.
///
/// Every field is public so the driver and tests can seed and inspect state directly.
#[derive(Debug)]
pub struct Cpu {
    /// Integer registers.
    pub regs: RegisterFile,
    /// Program Counter.
    pub pc: u32,
    /// Control and Status Registers.
    pub csrs: CsrFile,
    /// Address space (ROM, RAM, UART).
    pub bus: AddressSpace,
    /// Emit a `trace` event with the disassembly of every executed instruction.
    pub trace: bool,
}

impl Cpu {
    /// Creates a CPU attached to `bus`.
    ///
    /// # Arguments
    ///
    /// * `bus` - The populated address space.
    /// * `config` - Supplies the start PC and the trace flag.
    pub fn new(bus: AddressSpace, config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: config.general.start_pc,
            csrs: CsrFile::new(),
            bus,
            trace: config.general.trace_instructions || cfg!(feature = "always-trace"),
        }
    }

    /// Prints the program counter and the register file to stdout.
    pub fn dump_state(&self) {
        println!("pc={:08x}", self.pc);
        self.regs.dump();
    }
}
