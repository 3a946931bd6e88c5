//! Availability check
//!
//! Single UDP request/response against `<game>.available.gs.<domain>:27900`
//! asking whether a game's service is up.
//!
//! ## Wire Format
//!
//! ### Request
//! ```text
//! ┌──────────┬──────────────┬──────────────┬──────┐
//! │ 09       │ 00 00 00 00  │  game name   │ 00   │
//! └──────────┴──────────────┴──────────────┴──────┘
//!   type       status (0)     ASCII          NUL
//! ```
//!
//! ### Response (exactly 7 bytes)
//! ```text
//! ┌──────────┬──────────┬──────────────┐
//! │ fe fd    │ 09       │ 4-byte field │
//! └──────────┴──────────┴──────────────┘
//!   answer     type       status
//! ```
//!
//! The status field is a "disabled services" bitfield: empty means all
//! services are available, bit 0x1 means the server is down permanently,
//! bit 0x2 means temporary maintenance.

use std::fmt::Write as _;
use std::net::UdpSocket;
use std::time::Duration;

use crate::config::Config;
use crate::error::{Result, WfcError};

/// Record type of the availability probe and its reply
const RECORD_AVAILABLE: u8 = 0x09;

/// Leading bytes of every reply datagram
const REPLY_MAGIC: [u8; 2] = [0xfe, 0xfd];

/// Reply length: magic (2) + type (1) + status (4)
const REPLY_LEN: usize = 7;

/// Build the probe datagram for a game
pub fn build_probe(game_name: &str) -> Vec<u8> {
    let mut probe = Vec::with_capacity(6 + game_name.len());
    probe.push(RECORD_AVAILABLE);
    probe.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
    probe.extend_from_slice(game_name.as_bytes());
    probe.push(0x00);
    probe
}

/// A decoded availability reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Availability {
    raw: [u8; REPLY_LEN],
}

impl Availability {
    /// Decode a raw reply datagram.
    ///
    /// Rejects datagrams that are not exactly 7 bytes or do not carry the
    /// `fe fd 09` preamble.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != REPLY_LEN {
            return Err(WfcError::Protocol(format!(
                "availability reply must be {} bytes, got {}",
                REPLY_LEN,
                bytes.len()
            )));
        }
        if bytes[0..2] != REPLY_MAGIC || bytes[2] != RECORD_AVAILABLE {
            return Err(WfcError::Protocol(format!(
                "availability reply has unexpected preamble: {:02x} {:02x} {:02x}",
                bytes[0], bytes[1], bytes[2]
            )));
        }

        let mut raw = [0u8; REPLY_LEN];
        raw.copy_from_slice(bytes);
        Ok(Self { raw })
    }

    /// The 4-byte status bitfield, big-endian
    pub fn status(&self) -> u32 {
        u32::from_be_bytes([self.raw[3], self.raw[4], self.raw[5], self.raw[6]])
    }

    /// All services available (empty bitfield)
    pub fn is_available(&self) -> bool {
        self.status() == 0
    }

    /// Server is down permanently
    pub fn is_down(&self) -> bool {
        self.status() & 0x1 != 0
    }

    /// Server is temporarily down for maintenance
    pub fn is_maintenance(&self) -> bool {
        self.status() & 0x2 != 0
    }

    /// Uppercase hex rendering of the whole reply, no separators
    pub fn hex(&self) -> String {
        self.raw.iter().fold(String::new(), |mut out, b| {
            let _ = write!(out, "{:02X}", b);
            out
        })
    }
}

/// Perform one availability check.
///
/// Sends the probe from an ephemeral local port and decodes the single reply
/// datagram. Resolution/send failure surfaces as an unreachable-host error;
/// a missing or late reply surfaces as an I/O timeout when the config sets
/// one.
pub fn check(config: &Config, game_name: &str) -> Result<Availability> {
    let host = config.available_host(game_name);
    let socket = UdpSocket::bind(("0.0.0.0", 0))?;
    if config.read_timeout_ms > 0 {
        socket.set_read_timeout(Some(Duration::from_millis(config.read_timeout_ms)))?;
    }

    let probe = build_probe(game_name);

    tracing::debug!(
        "checking availability of {} via {}:{}",
        game_name,
        host,
        config.available_port
    );

    socket
        .send_to(&probe, (host.as_str(), config.available_port))
        .map_err(|e| WfcError::Unreachable {
            host: format!("{}:{}", host, config.available_port),
            source: e,
        })?;

    let mut buf = [0u8; 32];
    let n = socket.recv(&mut buf)?;

    let reply = Availability::decode(&buf[..n])?;
    tracing::debug!("availability status for {}: {:#010x}", game_name, reply.status());
    Ok(reply)
}
