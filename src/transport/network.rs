//! # Raw TCP Transport
//!
//! Network receipt printers accept raw ESC/POS on TCP port 9100 (the
//! "JetDirect" / raw socket convention). The job is written and the write
//! half shut down; nothing is read back.

use std::io::Write;
use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use tracing::debug;

use super::Transport;
use crate::error::ComandaError;

/// Raw printing port
pub const DEFAULT_PORT: u16 = 9100;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const WRITE_TIMEOUT: Duration = Duration::from_secs(10);

pub struct NetworkTransport {
    stream: TcpStream,
    addr: SocketAddr,
}

impl NetworkTransport {
    /// Connect to `host:port`. Hostnames are resolved and each address tried
    /// in turn.
    pub fn connect(addr: &str) -> Result<Self, ComandaError> {
        let candidates = addr
            .to_socket_addrs()
            .map_err(|e| ComandaError::Config(format!("Invalid printer address {}: {}", addr, e)))?;

        let mut last_error = None;
        for candidate in candidates {
            match TcpStream::connect_timeout(&candidate, CONNECT_TIMEOUT) {
                Ok(stream) => {
                    stream.set_write_timeout(Some(WRITE_TIMEOUT))?;
                    debug!(addr = %candidate, "connected to printer");
                    return Ok(Self {
                        stream,
                        addr: candidate,
                    });
                }
                Err(e) => last_error = Some(e),
            }
        }

        Err(ComandaError::Transport(match last_error {
            Some(e) => format!("Failed to connect to {}: {}", addr, e),
            None => format!("No addresses found for {}", addr),
        }))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl Transport for NetworkTransport {
    fn write_all(&mut self, data: &[u8]) -> Result<(), ComandaError> {
        self.stream
            .write_all(data)
            .and_then(|_| self.stream.flush())
            .map_err(|e| ComandaError::Transport(format!("Write to {} failed: {}", self.addr, e)))?;
        // Signal end of job; some printers only start once the stream closes
        self.stream.shutdown(Shutdown::Write).ok();
        Ok(())
    }
}
