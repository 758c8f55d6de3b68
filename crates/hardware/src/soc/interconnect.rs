//! Address space and region routing.
//!
//! This module implements the byte-granular dispatcher between the CPU and the mapped
//! devices. It provides:
//! 1. **Region registration:** Devices are added at a start address with an `Access`
//!    capability; overlapping regions are rejected.
//! 2. **Access routing:** `load_byte`/`store_byte` find the covering region and forward the
//!    region-relative offset to its device.
//! 3. **Image loading:** Binary blobs are copied into a region regardless of its capability.
//! 4. **Tick:** Every device is polled once per outer iteration.
//!
//! Every public operation returns a `Result`; unmapped or denied accesses are reported to
//! the caller, never silently absorbed.

use std::fmt;

use tracing::{debug, info};

use crate::common::{ConfigError, MemoryError, SimError};
use crate::config::{Config, region_end};
use crate::soc::devices::Uart;
use crate::soc::memory::Memory;
use crate::soc::traits::{Access, Device};

/// One mapped region: an inclusive address range, a capability and the device behind it.
pub struct Region {
    name: String,
    start: u32,
    end: u32,
    access: Access,
    device: Box<dyn Device + Send>,
}

impl Region {
    /// Region name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// First address of the region.
    pub const fn start(&self) -> u32 {
        self.start
    }

    /// Last address of the region (inclusive).
    pub const fn end(&self) -> u32 {
        self.end
    }

    /// Capability the region was mapped with.
    pub const fn access(&self) -> Access {
        self.access
    }

    /// Returns `true` if `addr` lies inside the region.
    pub const fn contains(&self, addr: u32) -> bool {
        addr >= self.start && addr <= self.end
    }

    fn overlaps(&self, start: u32, end: u32) -> bool {
        self.start <= end && start <= self.end
    }
}

impl fmt::Debug for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Region")
            .field("name", &self.name)
            .field("start", &format_args!("{:#010x}", self.start))
            .field("end", &format_args!("{:#010x}", self.end))
            .field("access", &self.access)
            .field("device", &self.device.name())
            .finish()
    }
}

/// The machine's 32-bit physical address space.
///
/// Regions never overlap, so at most one region covers any address.
#[derive(Debug, Default)]
pub struct AddressSpace {
    regions: Vec<Region>,
}

impl AddressSpace {
    /// Creates an address space with no regions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the reference memory map from a configuration.
    ///
    /// Maps ROM (read-only) and RAM (read-write), and the UART (read-write) when `uart` is
    /// given. The UART is placed at `config.uart.base` whether or not `config.uart.enabled`
    /// is set; the flag only tells the front end whether to create one.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for an invalid memory map.
    pub fn from_config(config: &Config, uart: Option<Uart>) -> Result<Self, ConfigError> {
        let mut space = Self::new();
        space.add_region(
            "ROM",
            config.memory.rom_base,
            Access::ReadOnly,
            Box::new(Memory::new("ROM", config.memory.rom_size)),
        )?;
        space.add_region(
            "RAM",
            config.memory.ram_base,
            Access::ReadWrite,
            Box::new(Memory::new("RAM", config.memory.ram_size)),
        )?;
        if let Some(uart) = uart {
            if config.uart.base % 2 != 0 {
                return Err(ConfigError::MisalignedUart(config.uart.base));
            }
            space.add_region("UART", config.uart.base, Access::ReadWrite, Box::new(uart))?;
        }
        Ok(space)
    }

    /// Maps a device.
    ///
    /// # Arguments
    ///
    /// * `name` - Region name used in diagnostics.
    /// * `start` - First address; the region spans `device.size()` bytes.
    /// * `access` - Directions of access the region accepts.
    /// * `device` - The device to route accesses to.
    ///
    /// # Errors
    ///
    /// `EmptyRegion` for a zero-sized device, `OutOfRange` if the region wraps past the top
    /// of memory, and `Overlap` if it shares an address with an existing region.
    pub fn add_region(
        &mut self,
        name: impl Into<String>,
        start: u32,
        access: Access,
        device: Box<dyn Device + Send>,
    ) -> Result<(), ConfigError> {
        let name = name.into();
        let end = region_end(&name, start, device.size())?;
        if let Some(existing) = self.regions.iter().find(|r| r.overlaps(start, end)) {
            return Err(ConfigError::Overlap {
                first: existing.name.clone(),
                second: name,
            });
        }
        debug!(region = %name, start = format_args!("{start:#010x}"), end = format_args!("{end:#010x}"), ?access, "region mapped");
        self.regions.push(Region {
            name,
            start,
            end,
            access,
            device,
        });
        Ok(())
    }

    /// Returns the mapped regions in registration order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    fn find(&mut self, addr: u32) -> Option<&mut Region> {
        self.regions.iter_mut().find(|r| r.contains(addr))
    }

    /// Loads one byte.
    ///
    /// # Errors
    ///
    /// `Unmapped` if no region covers `addr`, `AccessDenied` if the region is not readable.
    pub fn load_byte(&mut self, addr: u32) -> Result<u8, MemoryError> {
        let region = self.find(addr).ok_or(MemoryError::Unmapped(addr))?;
        if !region.access.can_read() {
            return Err(MemoryError::AccessDenied {
                region: region.name.clone(),
                addr,
            });
        }
        let offset = addr - region.start;
        Ok(region.device.read_u8(offset))
    }

    /// Stores one byte.
    ///
    /// # Errors
    ///
    /// `Unmapped` if no region covers `addr`, `AccessDenied` if the region is not writable.
    pub fn store_byte(&mut self, addr: u32, val: u8) -> Result<(), MemoryError> {
        let region = self.find(addr).ok_or(MemoryError::Unmapped(addr))?;
        if !region.access.can_write() {
            return Err(MemoryError::AccessDenied {
                region: region.name.clone(),
                addr,
            });
        }
        let offset = addr - region.start;
        region.device.write_u8(offset, val);
        Ok(())
    }

    /// Copies a binary image into the region covering `addr`.
    ///
    /// The region's capability is not consulted, which is how ROM gets its contents.
    ///
    /// # Errors
    ///
    /// `UnmappedImage` if no region covers `addr`, `ImageTooLarge` if the image runs past
    /// the end of that region.
    pub fn load_image(&mut self, addr: u32, data: &[u8]) -> Result<(), SimError> {
        let region = self.find(addr).ok_or(SimError::UnmappedImage(addr))?;
        let offset = addr - region.start;
        let available = (region.end - addr) as usize + 1;
        if data.len() > available {
            return Err(SimError::ImageTooLarge {
                addr,
                len: data.len(),
                available,
            });
        }
        region.device.write_bytes(offset, data);
        info!(region = %region.name, addr = format_args!("{addr:#010x}"), len = data.len(), "image loaded");
        Ok(())
    }

    /// Polls every device once.
    pub fn tick_devices(&mut self) {
        for region in &mut self.regions {
            region.device.tick();
        }
    }

    /// Returns the mapped UART, if any.
    pub fn uart_mut(&mut self) -> Option<&mut Uart> {
        self.regions
            .iter_mut()
            .find_map(|r| r.device.as_uart_mut())
    }
}
