//! Simulator: owns the CPU and the run statistics side by side.
//!
//! One outer iteration is `tick`: poll every device, then execute one instruction. The
//! command-line front end adds host pacing, register dumps and single-stepping around it.

use tracing::info;

use crate::common::SimError;
use crate::config::Config;
use crate::core::{Cpu, StepOutcome};
use crate::soc::AddressSpace;
use crate::stats::SimStats;

/// Top-level simulator.
#[derive(Debug)]
pub struct Simulator {
    /// CPU state (registers, PC, CSRs, address space).
    pub cpu: Cpu,
    /// Run statistics.
    pub stats: SimStats,
}

impl Simulator {
    /// Creates a simulator around a populated address space.
    pub fn new(bus: AddressSpace, config: &Config) -> Self {
        Self {
            cpu: Cpu::new(bus, config),
            stats: SimStats::default(),
        }
    }

    /// Advances the machine by one outer iteration: devices poll, then the CPU steps.
    ///
    /// # Errors
    ///
    /// Propagates the fatal error of [`Cpu::step`].
    pub fn tick(&mut self) -> Result<StepOutcome, SimError> {
        self.cpu.bus.tick_devices();
        let outcome = self.cpu.step()?;
        self.stats.record(&outcome);
        Ok(outcome)
    }

    /// Runs `tick` until `max_cycles` iterations have completed or a fatal error occurs.
    ///
    /// `None` runs until a fatal error.
    ///
    /// # Errors
    ///
    /// Propagates the fatal error of [`Cpu::step`].
    pub fn run(&mut self, max_cycles: Option<u64>) -> Result<(), SimError> {
        let mut remaining = max_cycles;
        while remaining != Some(0) {
            let _ = self.tick()?;
            if let Some(n) = remaining.as_mut() {
                *n -= 1;
            }
        }
        info!(cycles = self.stats.cycles, "cycle limit reached");
        Ok(())
    }
}
