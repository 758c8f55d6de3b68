//! Execution units.
//!
//! The hart has a single functional unit: the integer ALU shared by the register-register
//! and register-immediate instruction groups.

/// Integer arithmetic, logic, comparison and shift operations.
pub mod alu;
