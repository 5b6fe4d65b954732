//! # Device File Transport
//!
//! Writes to a printer exposed as a character device: USB printer class
//! (`/dev/usb/lp0`), serial adapters (`/dev/ttyUSB0`) or Bluetooth RFCOMM
//! (`/dev/rfcomm0`).
//!
//! ## TTY Configuration
//!
//! Serial-style devices are switched to raw mode so binary data is
//! transmitted without modification:
//!
//! - **No input processing**: IGNBRK, BRKINT, PARMRK, ISTRIP, INLCR, IGNCR, ICRNL
//! - **No flow control**: IXON, IXOFF, IXANY (0x11/0x13 occur in raster data)
//! - **No output processing**: OPOST (no CR/LF translation)
//! - **8-bit characters**: CS8, no parity
//! - **Non-canonical mode, no echo**: ICANON, ECHO, ECHONL, ISIG, IEXTEN
//!
//! Plain files and line-printer devices are not TTYs and are written as-is.
//!
//! ## Chunked Writes
//!
//! Large jobs are written in 4096-byte chunks with a short pause between
//! them so slow serial links do not overflow the printer's input buffer.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use tracing::debug;

use super::Transport;
use crate::error::ComandaError;

/// Default chunk size for writes (bytes)
const CHUNK_SIZE: usize = 4096;

/// Delay between chunks (milliseconds)
const CHUNK_DELAY_MS: u64 = 2;

/// # Device Printer Transport
///
/// ```no_run
/// use comanda::transport::{DeviceTransport, Transport};
/// use comanda::protocol::commands;
///
/// let mut transport = DeviceTransport::open("/dev/usb/lp0")?;
/// transport.write_all(&commands::init())?;
/// # Ok::<(), comanda::error::ComandaError>(())
/// ```
pub struct DeviceTransport {
    file: File,
    chunk_size: usize,
    chunk_delay: Duration,
}

impl DeviceTransport {
    /// Open a printer device for writing.
    ///
    /// The device must already exist; nothing is created. TTYs are put in
    /// raw mode.
    ///
    /// ## Errors
    ///
    /// - The device doesn't exist
    /// - Permission denied (may need the `lp` or `dialout` group)
    /// - TTY configuration fails
    pub fn open<P: AsRef<Path>>(device: P) -> Result<Self, ComandaError> {
        let path = device.as_ref();

        let file = OpenOptions::new().write(true).open(path).map_err(|e| {
            ComandaError::Transport(format!("Failed to open {}: {}", path.display(), e))
        })?;

        if is_tty(&file) {
            debug!(device = %path.display(), "configuring tty for raw output");
            configure_tty_raw(&file)?;
        }

        Ok(Self {
            file,
            chunk_size: CHUNK_SIZE,
            chunk_delay: Duration::from_millis(CHUNK_DELAY_MS),
        })
    }

    /// Set the chunk size for large writes.
    pub fn set_chunk_size(&mut self, size: usize) {
        self.chunk_size = size.max(1);
    }

    /// Set the delay between chunks.
    pub fn set_chunk_delay(&mut self, delay: Duration) {
        self.chunk_delay = delay;
    }
}

impl Transport for DeviceTransport {
    fn write_all(&mut self, data: &[u8]) -> Result<(), ComandaError> {
        if data.len() <= self.chunk_size {
            self.file
                .write_all(data)
                .map_err(|e| ComandaError::Transport(format!("Write failed: {}", e)))?;
        } else {
            for chunk in data.chunks(self.chunk_size) {
                self.file
                    .write_all(chunk)
                    .map_err(|e| ComandaError::Transport(format!("Write failed: {}", e)))?;

                if !self.chunk_delay.is_zero() {
                    thread::sleep(self.chunk_delay);
                }
            }
        }

        self.file
            .flush()
            .map_err(|e| ComandaError::Transport(format!("Flush failed: {}", e)))
    }
}

#[cfg(unix)]
fn is_tty(file: &File) -> bool {
    use std::os::unix::io::AsRawFd;

    unsafe { libc::isatty(file.as_raw_fd()) == 1 }
}

#[cfg(not(unix))]
fn is_tty(_file: &File) -> bool {
    false
}

/// Put a TTY file descriptor into raw mode.
#[cfg(unix)]
fn configure_tty_raw(file: &File) -> Result<(), ComandaError> {
    use std::mem::MaybeUninit;
    use std::os::unix::io::AsRawFd;

    let fd = file.as_raw_fd();

    let mut termios = MaybeUninit::uninit();
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(ComandaError::Transport(format!(
            "tcgetattr failed: {}",
            io::Error::last_os_error()
        )));
    }
    let mut termios = unsafe { termios.assume_init() };

    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);
    termios.c_oflag &= !libc::OPOST;
    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);
    termios.c_cflag &= !(libc::CSIZE | libc::PARENB);
    termios.c_cflag |= libc::CS8;

    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(ComandaError::Transport(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    Ok(())
}

#[cfg(not(unix))]
fn configure_tty_raw(_file: &File) -> Result<(), ComandaError> {
    Ok(())
}
