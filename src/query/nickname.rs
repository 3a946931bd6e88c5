//! Nickname query
//!
//! Translates numeric profile ids into display nicknames for a game, over one
//! TCP exchange with the `gpsp.gs.<domain>` endpoint.
//!
//! ## Request
//! ```text
//! \otherslist\sesskey\210997796\profileid\<pid>\numopids\<n>\opids\<id>|<id>|...\namespaceid\16\gamename\<name>\final\
//! ```
//! `sesskey` and `numopids` are mandated by the protocol but ignored by known
//! servers; they are sent verbatim rather than optimized away.
//!
//! ## Response
//! ```text
//! \otherslist\o\<id>\uniquenick\<nick>\...\oldone\\final\
//! ```
//! One `o`/`uniquenick` pair per requested id, ordered by ascending profile
//! id (server-determined, not request order), closed by the `oldone` sentinel
//! and the terminator. The decoded pair sequence is returned as-is; callers
//! correlate ids with the nicknames that follow them by position and treat
//! `oldone` as end-of-list.

use crate::config::Config;
use crate::error::{Result, WfcError};
use crate::net::Transport;
use crate::protocol::{contains_terminator, decode_pairs, Pair, ParamString};

/// Protocol-mandated session key; ignored by known servers
pub const SESSION_KEY: u32 = 210_997_796;

/// Fixed namespace id of the nickname service
pub const NAMESPACE_ID: u32 = 16;

/// Build the outbound request message.
///
/// Entry order is part of the wire contract; `opids` joins the target ids
/// with a pipe, no spaces or brackets.
pub fn build_request(game_name: &str, requester: u32, profile_ids: &[u32]) -> ParamString {
    let opids = profile_ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join("|");

    ParamString::new()
        .add("otherslist")
        .add_value("sesskey", SESSION_KEY)
        .add_value("profileid", requester)
        .add_value("numopids", profile_ids.len())
        .add_value("opids", opids)
        .add_value("namespaceid", NAMESPACE_ID)
        .add_value("gamename", game_name)
        .terminate()
}

/// Perform one nickname query.
///
/// Opens a fresh connection, writes the request, reads until the accumulated
/// response contains the terminator, and decodes the whole buffer into an
/// ordered pair sequence. No retry on failure; the first error propagates.
pub fn run<T: Transport>(
    transport: &T,
    config: &Config,
    game_name: &str,
    requester: u32,
    profile_ids: &[u32],
) -> Result<Vec<Pair>> {
    if profile_ids.is_empty() {
        return Err(WfcError::Protocol(
            "nickname query requires at least one profile id".to_string(),
        ));
    }

    let request = build_request(game_name, requester, profile_ids);
    let host = config.query_host();

    tracing::debug!(
        "querying {} nickname(s) for {} via {}:{}",
        profile_ids.len(),
        game_name,
        host,
        config.query_port
    );

    let raw = transport.exchange(
        &host,
        config.query_port,
        request.as_str().as_bytes(),
        &contains_terminator,
    )?;

    // The protocol is ASCII; anything else is passed through lossily under
    // the trust-the-server model.
    let text = String::from_utf8_lossy(&raw);
    Ok(decode_pairs(&text))
}
