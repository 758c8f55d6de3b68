//! Binary Loader.
//!
//! This module reads flat binary images from disk and places them in the address space:
//! 1. **Binary loading:** Reads a file into a byte buffer.
//! 2. **ROM placement:** Copies the buffer to `rom_base + offset`, which is how ROM gets its
//!    contents (ROM rejects stores from the guest).

use std::fs;
use std::path::Path;

use crate::common::SimError;
use crate::config::Config;
use crate::soc::AddressSpace;

/// Loads a binary file from disk into a byte vector.
///
/// # Arguments
///
/// * `path` - Path to the binary file.
///
/// # Errors
///
/// `SimError::Io` if the file cannot be read.
pub fn load_binary(path: impl AsRef<Path>) -> Result<Vec<u8>, SimError> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Places an image in ROM.
///
/// # Arguments
///
/// * `bus` - The address space.
/// * `config` - Supplies the ROM base.
/// * `offset` - Byte offset from the ROM base.
/// * `image` - The image contents.
///
/// # Errors
///
/// `SimError::ImageTooLarge` if the image runs past the end of the ROM region, and
/// `SimError::UnmappedImage` if the load address is not mapped.
pub fn load_rom_image(
    bus: &mut AddressSpace,
    config: &Config,
    offset: u32,
    image: &[u8],
) -> Result<(), SimError> {
    let addr = config.memory.rom_base.wrapping_add(offset);
    bus.load_image(addr, image)
}
