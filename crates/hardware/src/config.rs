//! Configuration system for the emulator.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** The reference memory map (64 KiB ROM, 64 KiB RAM, UART at 0x8000_0000).
//! 2. **Structures:** Sections for general run control, memory layout and the UART.
//! 3. **Validation:** Rejection of empty regions, odd UART bases and overlapping regions.
//!
//! Configuration is read from JSON (`Config::from_json`, `Config::from_file`); every field
//! is optional and missing ones take the defaults below. `Config::default()` is the
//! reference machine.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::{ConfigError, SimError};
use crate::soc::devices::uart::UART_WINDOW_SIZE;

/// Default configuration constants for the emulator.
mod defaults {
    /// Base address of the ROM region, where execution starts.
    pub const ROM_BASE: u32 = 0x0000_0000;

    /// Size of the ROM region (64 KiB).
    pub const ROM_SIZE: u32 = 0x1_0000;

    /// Base address of the RAM region.
    pub const RAM_BASE: u32 = 0x0001_0000;

    /// Size of the RAM region (64 KiB).
    pub const RAM_SIZE: u32 = 0x1_0000;

    /// Base address of the UART window. Even, so the odd byte is DATA.
    pub const UART_BASE: u32 = 0x8000_0000;

    /// Initial program counter.
    pub const START_PC: u32 = ROM_BASE;

    /// Host delay between outer iterations, in microseconds.
    pub const CYCLE_DELAY_US: u64 = crate::common::constants::DEFAULT_CYCLE_DELAY_US;
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use rv32sim_core::Config;
///
/// let json = r#"{ "memory": { "ram_size": 4096 }, "uart": { "enabled": true } }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.memory.ram_size, 4096);
/// assert_eq!(config.memory.rom_size, 0x1_0000);
/// assert!(config.uart.enabled);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Run control.
    pub general: GeneralConfig,
    /// ROM and RAM placement.
    pub memory: MemoryConfig,
    /// Serial port placement.
    pub uart: UartConfig,
}

/// General run settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    /// Initial PC value (defaults to the ROM base).
    pub start_pc: u32,

    /// Log every retired instruction at `trace` level.
    pub trace_instructions: bool,

    /// Host delay between outer iterations, in microseconds. Zero runs flat out.
    pub cycle_delay_us: u64,

    /// Stop after this many outer iterations (`None` runs until a fatal error).
    pub max_cycles: Option<u64>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            start_pc: defaults::START_PC,
            trace_instructions: false,
            cycle_delay_us: defaults::CYCLE_DELAY_US,
            max_cycles: None,
        }
    }
}

/// ROM and RAM layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MemoryConfig {
    /// ROM base address.
    pub rom_base: u32,
    /// ROM size in bytes.
    pub rom_size: u32,
    /// RAM base address.
    pub ram_base: u32,
    /// RAM size in bytes.
    pub ram_size: u32,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            rom_base: defaults::ROM_BASE,
            rom_size: defaults::ROM_SIZE,
            ram_base: defaults::RAM_BASE,
            ram_size: defaults::RAM_SIZE,
        }
    }
}

/// UART placement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UartConfig {
    /// Map the UART and attach a host channel.
    pub enabled: bool,
    /// Base address of the two-byte window (must be even).
    pub base: u32,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base: defaults::UART_BASE,
        }
    }
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON or unknown fields, and any error
    /// reported by [`Config::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Io` if the file cannot be read and `SimError::Config` if its
    /// contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_json(&text)?)
    }

    /// The regions this configuration maps, as `(name, base, size)`.
    pub fn regions(&self) -> Vec<(&'static str, u32, u32)> {
        let mut regions = vec![
            ("ROM", self.memory.rom_base, self.memory.rom_size),
            ("RAM", self.memory.ram_base, self.memory.ram_size),
        ];
        if self.uart.enabled {
            regions.push(("UART", self.uart.base, UART_WINDOW_SIZE));
        }
        regions
    }

    /// Checks the memory map.
    ///
    /// # Errors
    ///
    /// * `EmptyRegion` - ROM or RAM has zero size.
    /// * `OutOfRange` - a region runs past `0xFFFF_FFFF`.
    /// * `MisalignedUart` - the UART base is odd.
    /// * `Overlap` - two mapped regions share an address.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.uart.enabled && self.uart.base % 2 != 0 {
            return Err(ConfigError::MisalignedUart(self.uart.base));
        }

        let regions = self.regions();
        for &(name, base, size) in &regions {
            let _ = region_end(name, base, size)?;
        }
        for (i, &(first, a_base, a_size)) in regions.iter().enumerate() {
            for &(second, b_base, b_size) in &regions[i + 1..] {
                let a_end = region_end(first, a_base, a_size)?;
                let b_end = region_end(second, b_base, b_size)?;
                if a_base <= b_end && b_base <= a_end {
                    return Err(ConfigError::Overlap {
                        first: first.to_string(),
                        second: second.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Inclusive end address of a region.
///
/// # Errors
///
/// `EmptyRegion` for a zero size, `OutOfRange` if the region wraps past the top of memory.
pub fn region_end(name: &str, base: u32, size: u32) -> Result<u32, ConfigError> {
    if size == 0 {
        return Err(ConfigError::EmptyRegion(name.to_string()));
    }
    base.checked_add(size - 1).ok_or_else(|| ConfigError::OutOfRange {
        name: name.to_string(),
        base,
        size,
    })
}
