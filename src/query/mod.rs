//! Query Module
//!
//! The three operations the service family offers:
//! - `nickname`: profile-id to nickname translation over TCP (PARAM-STRING)
//! - `availability`: UDP service-status probe
//! - `shard`: pure master-server hostname derivation

pub mod availability;
pub mod nickname;
pub mod shard;

pub use availability::Availability;
