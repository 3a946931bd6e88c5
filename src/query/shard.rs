//! Master-server shard hostname derivation
//!
//! A large set of per-game master-server domains exists under the scheme
//! `<game>.ms<shard>.<domain>`, all pointing at the same backend. Which shard
//! a game resolves to is fixed by a character-folding hash over the
//! lower-cased game name. The constant and the modulo-20 reduction have no
//! documented rationale beyond empirical compatibility with the live
//! service; any deviation changes which shard a name resolves to, so the
//! arithmetic here must stay exactly as deployed clients compute it.
//!
//! Pure function, no I/O.

/// Conventional TCP port of the master database server
pub const MASTER_PORT: u16 = 28910;

/// Multiplier of the character-folding hash
const FOLD_MULTIPLIER: i32 = 0x63306ce7;

/// Number of shards the hash reduces into
const SHARD_COUNT: i32 = 20;

/// Derive the shard index for a game name; always in `[0, 20)`.
///
/// The fold is `server = char_code - server * multiplier` in wrapping 32-bit
/// arithmetic over the lower-cased name, reduced by the Euclidean remainder
/// so the index is non-negative.
pub fn shard_index(game_name: &str) -> i32 {
    let mut server: i32 = 0;
    for c in game_name.to_lowercase().chars() {
        server = (c as i32).wrapping_sub(server.wrapping_mul(FOLD_MULTIPLIER));
    }
    server.rem_euclid(SHARD_COUNT)
}

/// Derive the full master-server hostname: `<game>.ms<shard>.<domain>`.
///
/// The game name is lower-cased both for hashing and in the returned
/// hostname.
pub fn master_host(game_name: &str, domain: &str) -> String {
    let game_name = game_name.to_lowercase();
    let shard = shard_index(&game_name);
    format!("{}.ms{}.{}", game_name, shard, domain)
}
