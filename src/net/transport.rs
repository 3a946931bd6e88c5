//! Stream transport
//!
//! Blocking TCP implementation of the exchange contract. Reads block on the
//! socket into a growable accumulator and the stop predicate is re-checked
//! after every read; the terminator-driven stop condition is the contract,
//! never a fixed length or a poll for available bytes.

use std::io::{Read, Write};
use std::net::TcpStream;
use std::time::Duration;

use bytes::BytesMut;

use crate::error::{Result, WfcError};

/// Read chunk size for the accumulating response loop
const READ_CHUNK: usize = 512;

/// One synchronous request/response exchange over a byte stream.
///
/// Implementations own the connection for the duration of the call and close
/// it before returning. `done` is evaluated over all bytes accumulated so
/// far; reading stops as soon as it holds.
pub trait Transport {
    fn exchange(
        &self,
        host: &str,
        port: u16,
        request: &[u8],
        done: &dyn Fn(&[u8]) -> bool,
    ) -> Result<Vec<u8>>;
}

/// Blocking TCP transport over std sockets
#[derive(Debug, Clone, Default)]
pub struct TcpTransport {
    /// Read timeout; `None` blocks indefinitely
    read_timeout: Option<Duration>,

    /// Cap on accumulated response bytes; `None` is uncapped
    max_response_len: Option<usize>,
}

impl TcpTransport {
    /// Create a transport with no timeout and no response cap
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport with hardening limits.
    ///
    /// A zero timeout or zero cap means the corresponding limit is disabled.
    pub fn with_limits(read_timeout_ms: u64, max_response_len: usize) -> Self {
        Self {
            read_timeout: (read_timeout_ms > 0).then(|| Duration::from_millis(read_timeout_ms)),
            max_response_len: (max_response_len > 0).then_some(max_response_len),
        }
    }
}

impl Transport for TcpTransport {
    fn exchange(
        &self,
        host: &str,
        port: u16,
        request: &[u8],
        done: &dyn Fn(&[u8]) -> bool,
    ) -> Result<Vec<u8>> {
        let mut stream = TcpStream::connect((host, port)).map_err(|e| WfcError::Unreachable {
            host: format!("{}:{}", host, port),
            source: e,
        })?;

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;
        stream.set_read_timeout(self.read_timeout)?;

        tracing::debug!("connected to {}:{}", host, port);

        stream.write_all(request)?;
        stream.flush()?;

        tracing::trace!("wrote {} request bytes", request.len());

        let response = read_until(&mut stream, done, self.max_response_len)?;

        tracing::debug!("exchange complete, {} response bytes", response.len());

        // Dropping the stream closes the connection
        Ok(response)
    }
}

/// Read from `reader` into a growable accumulator until `done` holds over the
/// accumulated bytes.
///
/// The predicate is checked before every read, so no byte past the stop
/// condition is ever consumed and an already-satisfied predicate performs no
/// I/O. EOF before the predicate holds is a protocol error (truncated
/// stream), as is exceeding `max_len` when a cap is set.
pub fn read_until<R: Read>(
    reader: &mut R,
    done: &dyn Fn(&[u8]) -> bool,
    max_len: Option<usize>,
) -> Result<Vec<u8>> {
    let mut acc = BytesMut::with_capacity(READ_CHUNK);
    let mut chunk = [0u8; READ_CHUNK];

    loop {
        if done(&acc) {
            return Ok(acc.to_vec());
        }
        if let Some(limit) = max_len {
            if acc.len() >= limit {
                return Err(WfcError::Protocol(format!(
                    "response exceeded {} bytes without reaching the terminator",
                    limit
                )));
            }
        }

        let n = reader.read(&mut chunk)?;
        if n == 0 {
            return Err(WfcError::Protocol(format!(
                "stream closed after {} bytes, before the terminator",
                acc.len()
            )));
        }
        acc.extend_from_slice(&chunk[..n]);
    }
}
