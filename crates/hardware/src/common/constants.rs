//! Global emulator constants.
//!
//! This module defines the constants shared by the fetch, decode and driver code:
//! 1. **Instruction Constants:** Width of a base instruction and the masks that recognise it.
//! 2. **Register Constants:** Size of the integer register file.
//! 3. **Simulation Constants:** Host pacing defaults.

/// Size of a base (32-bit) RISC-V instruction in bytes.
///
/// The program counter advances by this amount after every cycle; taken branches and
/// jumps store `target - INSTRUCTION_BYTES` so the trailing increment lands on the target.
pub const INSTRUCTION_BYTES: u32 = 4;

/// Mask for the two lowest instruction bits (length quadrant).
pub const LENGTH_QUADRANT_MASK: u32 = 0b11;

/// Value of the two lowest bits for every 32-bit (non-compressed) instruction.
pub const LENGTH_QUADRANT_32: u32 = 0b11;

/// Mask for bits [4:2]; all ones there marks an encoding longer than 32 bits.
pub const LONG_ENCODING_MASK: u32 = 0b1_1100;

/// Number of integer registers (`x0`-`x31`).
pub const NUM_REGISTERS: usize = 32;

/// Default host delay between emulated cycles, in microseconds.
pub const DEFAULT_CYCLE_DELAY_US: u64 = 10;
