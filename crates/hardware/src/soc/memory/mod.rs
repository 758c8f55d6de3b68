//! Byte-addressable storage (ROM and RAM).
//!
//! This module implements the storage device mapped for both the ROM and the RAM region.
//! The difference between the two is the `Access` the region is mapped with, not the
//! device: ROM contents are placed through `AddressSpace::load_image`, which bypasses the
//! store capability.

use crate::soc::traits::Device;

/// Zero-initialized storage of a fixed size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    name: String,
    data: Vec<u8>,
}

impl Memory {
    /// Creates a zero-filled memory.
    ///
    /// # Arguments
    ///
    /// * `name` - Device name reported in diagnostics.
    /// * `size` - Size in bytes.
    pub fn new(name: impl Into<String>, size: u32) -> Self {
        Self {
            name: name.into(),
            data: vec![0; size as usize],
        }
    }

    /// Returns the raw contents.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl Device for Memory {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u32 {
        self.data.len() as u32
    }

    fn read_u8(&mut self, offset: u32) -> u8 {
        self.data.get(offset as usize).copied().unwrap_or(0)
    }

    fn write_u8(&mut self, offset: u32, val: u8) {
        if let Some(slot) = self.data.get_mut(offset as usize) {
            *slot = val;
        }
    }

    /// Copies the slice in one pass; bytes past the end are dropped.
    fn write_bytes(&mut self, offset: u32, data: &[u8]) {
        let start = (offset as usize).min(self.data.len());
        let end = start.saturating_add(data.len()).min(self.data.len());
        self.data[start..end].copy_from_slice(&data[..end - start]);
    }
}
