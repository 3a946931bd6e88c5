//! Error types for wfclink
//!
//! Provides a unified error type for all operations.
//!
//! Failures are always scoped to the single call that produced them and are
//! never retried internally. The unreachable-host case is kept distinct from
//! mid-session I/O failures so callers can tell configuration problems apart
//! from transient network problems.

use thiserror::Error;

/// Result type alias using WfcError
pub type Result<T> = std::result::Result<T, WfcError>;

/// Unified error type for wfclink operations
#[derive(Debug, Error)]
pub enum WfcError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    /// I/O failure after a connection was established (write or read)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    /// The backend host could not be resolved or connected to
    #[error("host unreachable: {host}: {source}")]
    Unreachable {
        host: String,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    /// The peer violated the wire contract (truncated stream, bad reply tag)
    /// or the caller requested an unsupported exchange
    #[error("Protocol error: {0}")]
    Protocol(String),
}
