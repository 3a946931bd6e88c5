//! Network Module
//!
//! The stream transport boundary consumed by the query layer.
//!
//! ## Contract
//! - Open a byte-stream connection to host:port
//! - Write the request bytes
//! - Read until a caller-supplied predicate over the accumulated bytes holds
//! - Close the connection
//!
//! One connection per exchange; no pooling, no reuse across calls.

mod transport;

pub use transport::{read_until, TcpTransport, Transport};
