//! # wfclink
//!
//! Client for the legacy game-server discovery/matchmaking protocol family
//! used by Nintendo Wi-Fi-era online services, against a configurable backend
//! domain:
//! - PARAM-STRING nickname queries over TCP (profile id -> display nickname)
//! - UDP availability checks
//! - Deterministic master-server shard hostname derivation
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        WfcClient                             │
//! │                 (config + transport handle)                  │
//! └───────┬──────────────────────┬──────────────────────┬───────┘
//!         │                      │                      │
//!         ▼                      ▼                      ▼
//!  ┌─────────────┐        ┌─────────────┐        ┌─────────────┐
//!  │  nickname   │        │availability │        │    shard    │
//!  │ (TCP 29901) │        │ (UDP 27900) │        │  (no I/O)   │
//!  └──────┬──────┘        └─────────────┘        └─────────────┘
//!         │
//!         ▼
//!  ┌─────────────┐        ┌─────────────┐
//!  │  protocol   │◄───────┤     net     │
//!  │(PARAM-STRING│        │ (Transport, │
//!  │   codec)    │        │ read_until) │
//!  └─────────────┘        └─────────────┘
//! ```
//!
//! One connection per query, no pooling, no retries, no shared state across
//! calls.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

pub mod client;
pub mod net;
pub mod protocol;
pub mod query;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use client::WfcClient;
pub use config::Config;
pub use error::{Result, WfcError};
pub use protocol::{Pair, ParamString};
pub use query::Availability;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of wfclink
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
