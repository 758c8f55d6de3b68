//! Simulation statistics collection and reporting.
//!
//! This module tracks what the emulator did during a run. It provides:
//! 1. **Cycles:** Outer iterations and retired (trap-free) instructions.
//! 2. **Instruction mix:** Loads, stores, taken branches and jumps.
//! 3. **Traps:** Counts per trap kind.

use std::collections::BTreeMap;
use std::time::Instant;

use crate::core::{InstructionClass, StepOutcome};

/// Simulation statistics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Steps executed (including steps that trapped).
    pub cycles: u64,
    /// Steps that completed without a trap.
    pub instructions_retired: u64,
    /// Retired loads.
    pub inst_load: u64,
    /// Retired stores.
    pub inst_store: u64,
    /// Retired conditional branches that redirected the PC.
    pub branches_taken: u64,
    /// Retired conditional branches that fell through.
    pub branches_not_taken: u64,
    /// Retired JAL/JALR.
    pub inst_jump: u64,
    /// Trap counts keyed by `Trap::kind`.
    pub traps: BTreeMap<&'static str, u64>,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_load: 0,
            inst_store: 0,
            branches_taken: 0,
            branches_not_taken: 0,
            inst_jump: 0,
            traps: BTreeMap::new(),
        }
    }
}

impl SimStats {
    /// Accounts one step.
    pub fn record(&mut self, outcome: &StepOutcome) {
        self.cycles += 1;
        if let Some(trap) = outcome.trap {
            *self.traps.entry(trap.kind()).or_insert(0) += 1;
            return;
        }
        self.instructions_retired += 1;
        match outcome.class {
            InstructionClass::Load => self.inst_load += 1,
            InstructionClass::Store => self.inst_store += 1,
            InstructionClass::Branch { taken: true } => self.branches_taken += 1,
            InstructionClass::Branch { taken: false } => self.branches_not_taken += 1,
            InstructionClass::Jump => self.inst_jump += 1,
            InstructionClass::None
            | InstructionClass::Alu
            | InstructionClass::System
            | InstructionClass::Unknown => {}
        }
    }

    /// Total number of traps of every kind.
    pub fn traps_taken(&self) -> u64 {
        self.traps.values().sum()
    }

    /// Prints a summary to stdout.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let khz = if seconds > 0.0 {
            (self.cycles as f64 / seconds) / 1000.0
        } else {
            0.0
        };
        println!("\n==========================================================");
        println!("RV32 EMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.4} s");
        println!("sim_cycles               {}", self.cycles);
        println!("sim_freq                 {khz:.2} kHz");
        println!("sim_insts                {}", self.instructions_retired);
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        println!("  op.load                {}", self.inst_load);
        println!("  op.store               {}", self.inst_store);
        println!("  op.branch.taken        {}", self.branches_taken);
        println!("  op.branch.not_taken    {}", self.branches_not_taken);
        println!("  op.jump                {}", self.inst_jump);
        println!("----------------------------------------------------------");
        println!("TRAPS                    {}", self.traps_taken());
        for (kind, count) in &self.traps {
            println!("  {kind:<22} {count}");
        }
        println!("==========================================================");
    }
}
