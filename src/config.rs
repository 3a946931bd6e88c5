//! Configuration for wfclink
//!
//! Centralized configuration with sensible defaults. Only the backend domain
//! is mandatory; everything else follows the conventional ports and host
//! patterns of the historical service.

/// Conventional TCP port of the nickname-query endpoint
pub const QUERY_PORT: u16 = 29901;

/// Conventional UDP port of the availability endpoint
pub const AVAILABLE_PORT: u16 = 27900;

/// Main configuration for a wfclink client
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Backend
    // -------------------------------------------------------------------------
    /// Domain of the backend service, e.g. "nintendowifi.net" or an
    /// alternative service that reimplements the protocol family
    pub domain: String,

    /// TCP port of the nickname-query endpoint
    pub query_port: u16,

    /// UDP port of the availability endpoint
    pub available_port: u16,

    // -------------------------------------------------------------------------
    // Hardening
    // -------------------------------------------------------------------------
    /// Read timeout in milliseconds; 0 blocks indefinitely (the protocol
    /// itself sets no bound on the response read)
    pub read_timeout_ms: u64,

    /// Maximum accumulated response length in bytes before the exchange is
    /// aborted; 0 means uncapped
    pub max_response_len: usize,
}

impl Config {
    /// Create a config for the given backend domain with default ports
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            query_port: QUERY_PORT,
            available_port: AVAILABLE_PORT,
            read_timeout_ms: 5000,
            max_response_len: 64 * 1024,
        }
    }

    /// Create a new config builder
    pub fn builder(domain: impl Into<String>) -> ConfigBuilder {
        ConfigBuilder {
            config: Config::new(domain),
        }
    }

    /// Host of the nickname-query endpoint: `gpsp.gs.<domain>`
    pub fn query_host(&self) -> String {
        format!("gpsp.gs.{}", self.domain)
    }

    /// Host of the availability endpoint: `<game>.available.gs.<domain>`
    pub fn available_host(&self, game_name: &str) -> String {
        format!("{}.available.gs.{}", game_name, self.domain)
    }
}

/// Builder for Config
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the TCP port of the nickname-query endpoint
    pub fn query_port(mut self, port: u16) -> Self {
        self.config.query_port = port;
        self
    }

    /// Set the UDP port of the availability endpoint
    pub fn available_port(mut self, port: u16) -> Self {
        self.config.available_port = port;
        self
    }

    /// Set the read timeout in milliseconds (0 = block indefinitely)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the maximum accumulated response length (0 = uncapped)
    pub fn max_response_len(mut self, len: usize) -> Self {
        self.config.max_response_len = len;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
