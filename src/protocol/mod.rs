//! Protocol Module
//!
//! The PARAM-STRING wire protocol: named parameters and their values sent as
//! a single ASCII string.
//!
//! ## Wire Format
//!
//! ```text
//! \NAME1\VALUE1\NAME2\VALUE2\NAME3\VALUE3\...\final\
//! ```
//!
//! Every field is bracketed by backslash delimiters. Entries may carry a value
//! or be name-only (section markers such as `otherslist`, and the `final`
//! terminator). Names and values are escaped independently before insertion:
//!
//! - `/`  becomes `/1`
//! - `\`  becomes `/2`
//!
//! The slash pass runs first; the substituted forms contain no delimiter, so
//! the passes never interfere. Responses are consumed as-is; the protocol
//! requires no unescaping on the receive path.
//!
//! Ordering is the only indexing the format provides: a decoded message is a
//! flat ordered sequence of key/value pairs and callers correlate related
//! entries by position.

mod codec;
mod pair;
mod param;

pub use codec::{contains_terminator, decode_pairs, escape, DELIMITER, TERMINATOR};
pub use pair::Pair;
pub use param::ParamString;
