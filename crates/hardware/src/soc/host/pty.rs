//! Pseudo-terminal host channel.
//!
//! Opens a pty master in raw, non-blocking mode. A terminal emulator (e.g.
//! `screen /dev/pts/N`) attached to the slave path becomes the UART's console.

use std::ffi::CStr;
use std::fs::File;
use std::io::{self, Read, Write};
use std::os::fd::FromRawFd;
use std::path::{Path, PathBuf};

use tracing::info;

use super::HostChannel;

/// Pseudo-terminal master.
#[derive(Debug)]
pub struct Pty {
    master: File,
    slave_path: PathBuf,
}

fn check(ret: libc::c_int) -> io::Result<libc::c_int> {
    if ret < 0 { Err(io::Error::last_os_error()) } else { Ok(ret) }
}

impl Pty {
    /// Allocates a pseudo-terminal.
    ///
    /// The master is switched to raw mode (`cfmakeraw`) and `O_NONBLOCK`.
    ///
    /// # Errors
    ///
    /// Returns the OS error of the first libc call that fails.
    pub fn open() -> io::Result<Self> {
        // SAFETY: posix_openpt takes no pointers; a negative return is handled by `check`.
        let fd = check(unsafe { libc::posix_openpt(libc::O_RDWR | libc::O_NOCTTY) })?;
        // SAFETY: `fd` was just returned by posix_openpt and is owned by nobody else.
        let master = unsafe { File::from_raw_fd(fd) };

        // SAFETY: `fd` is a valid pty master for the lifetime of `master`.
        let _ = check(unsafe { libc::grantpt(fd) })?;
        // SAFETY: as above.
        let _ = check(unsafe { libc::unlockpt(fd) })?;

        // SAFETY: termios is plain data; tcgetattr fully initialises it on success.
        let mut termios: libc::termios = unsafe { std::mem::zeroed() };
        // SAFETY: `termios` is a valid, writable termios struct.
        let _ = check(unsafe { libc::tcgetattr(fd, &raw mut termios) })?;
        // SAFETY: `termios` was filled in by tcgetattr.
        unsafe { libc::cfmakeraw(&raw mut termios) };
        // SAFETY: `termios` is a valid termios struct.
        let _ = check(unsafe { libc::tcsetattr(fd, libc::TCSANOW, &raw const termios) })?;

        // SAFETY: fcntl with F_GETFL/F_SETFL takes only integer arguments.
        let flags = check(unsafe { libc::fcntl(fd, libc::F_GETFL) })?;
        // SAFETY: as above.
        let _ = check(unsafe { libc::fcntl(fd, libc::F_SETFL, flags | libc::O_NONBLOCK) })?;

        // SAFETY: ptsname returns a pointer to a static buffer or null; it is copied
        // immediately and not retained.
        let name = unsafe { libc::ptsname(fd) };
        if name.is_null() {
            return Err(io::Error::last_os_error());
        }
        // SAFETY: `name` is a non-null, NUL-terminated string from ptsname.
        let slave_path = PathBuf::from(unsafe { CStr::from_ptr(name) }.to_string_lossy().into_owned());

        info!(path = %slave_path.display(), "serial port opened");
        Ok(Self { master, slave_path })
    }

    /// Path of the slave device a terminal program should open.
    pub fn slave_path(&self) -> &Path {
        &self.slave_path
    }
}

impl HostChannel for Pty {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.master.read(buf) {
            // EIO: no process has the slave open yet.
            Err(e) if e.raw_os_error() == Some(libc::EIO) => Ok(0),
            other => other,
        }
    }

    fn write(&mut self, byte: u8) -> io::Result<()> {
        self.master.write_all(&[byte])
    }
}
