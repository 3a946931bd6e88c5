//! Protocol codec
//!
//! Escaping and decoding functions for the PARAM-STRING wire protocol.
//!
//! Decoding performs no validation: the protocol's trust model assumes an
//! honest server, and output for text that is not a well-formed PARAM-STRING
//! is unspecified. The one concession to robustness is the odd-trailing-token
//! case, which decodes as a pair with an absent value instead of failing.

use super::Pair;

/// Delimiter bracketing every field on the wire
pub const DELIMITER: char = '\\';

/// Terminator sequence ending every message
pub const TERMINATOR: &str = "\\final\\";

/// Escape a name or value for insertion into the wire text.
///
/// `/` becomes `/1`, then `\` becomes `/2`. The order is mandatory: the
/// delimiter pass introduces slashes of its own, and running the slash pass
/// first keeps them intact; the slash pass introduces no delimiter for the
/// second pass to re-escape.
pub fn escape(raw: &str) -> String {
    raw.replace('/', "/1").replace(DELIMITER, "/2")
}

/// Decode accumulated wire text into an ordered pair sequence.
///
/// The text is split on the delimiter into a flat token list. Trailing empty
/// tokens produced by a trailing delimiter are dropped, the leading empty
/// token (every message starts with a delimiter) is discarded, and the rest
/// are consumed two at a time in encounter order. An odd leftover token
/// yields a final pair with an absent value.
pub fn decode_pairs(text: &str) -> Vec<Pair> {
    let mut tokens: Vec<&str> = text.split(DELIMITER).collect();
    while tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }
    if tokens.len() <= 1 {
        return Vec::new();
    }

    tokens[1..]
        .chunks(2)
        .map(|chunk| Pair::new(chunk[0], chunk.get(1).map(|v| v.to_string())))
        .collect()
}

/// Check whether accumulated response bytes contain the terminator sequence.
///
/// This is the stop condition of the response read loop; every well-formed
/// message ends with `\final\` and nothing follows it.
pub fn contains_terminator(buf: &[u8]) -> bool {
    let term = TERMINATOR.as_bytes();
    buf.len() >= term.len() && buf.windows(term.len()).any(|w| w == term)
}
