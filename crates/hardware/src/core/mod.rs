//! Core processor implementation.
//!
//! This module contains the hart: its architectural state outside the register file
//! (`arch`), the integer execution unit (`units`), and the `Cpu` that fetches, decodes and
//! executes one instruction per step.

/// Architecture-specific components (CSRs).
pub mod arch;

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::{Cpu, InstructionClass, StepOutcome};
