//! Client facade
//!
//! Ties the configuration, transport, and query operations together behind
//! one handle.

use crate::config::Config;
use crate::error::Result;
use crate::net::{TcpTransport, Transport};
use crate::protocol::Pair;
use crate::query::{availability, nickname, shard, Availability};

/// A client for one backend domain.
///
/// The client holds no shared mutable state: every query owns its own
/// connection and buffers for its duration, so independent concurrent calls
/// from separate threads are safe.
///
/// The transport is generic so tests (or alternative stacks) can substitute
/// the socket layer; `new` wires up the blocking TCP transport with the
/// config's hardening limits.
pub struct WfcClient<T: Transport = TcpTransport> {
    config: Config,
    transport: T,
}

impl WfcClient<TcpTransport> {
    /// Create a client over blocking TCP
    pub fn new(config: Config) -> Self {
        let transport = TcpTransport::with_limits(config.read_timeout_ms, config.max_response_len);
        Self { config, transport }
    }
}

impl<T: Transport> WfcClient<T> {
    /// Create a client over a caller-supplied transport
    pub fn with_transport(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    /// The client's configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Translate profile ids into nicknames for a game.
    ///
    /// Returns the server's full decoded pair sequence in wire order; see
    /// [`query::nickname`](crate::query::nickname) for how to correlate
    /// entries. Requires at least one profile id.
    pub fn nicknames(
        &self,
        game_name: &str,
        requester: u32,
        profile_ids: &[u32],
    ) -> Result<Vec<Pair>> {
        nickname::run(&self.transport, &self.config, game_name, requester, profile_ids)
    }

    /// Check UDP availability status for a game's service
    pub fn availability(&self, game_name: &str) -> Result<Availability> {
        availability::check(&self.config, game_name)
    }

    /// Derive the master-server hostname for a game; pure, no I/O
    pub fn master_host(&self, game_name: &str) -> String {
        shard::master_host(game_name, &self.config.domain)
    }
}
