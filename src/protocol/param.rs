//! PARAM-STRING message builder

use std::fmt;

use super::codec::{escape, DELIMITER};

/// An outbound PARAM-STRING message under construction.
///
/// The builder is append-only over a single string buffer; once rendered the
/// wire text is exactly the appends in construction order. Two messages are
/// equal iff their wire text is byte-identical.
///
/// Every append emits its own leading delimiter and none of them a trailing
/// one; [`terminate`](ParamString::terminate) closes the message, after which
/// the buffer transmits verbatim.
///
/// ```
/// use wfclink::protocol::ParamString;
///
/// let msg = ParamString::new()
///     .add("otherslist")
///     .add_value("profileid", 302594991_u32)
///     .terminate();
/// assert_eq!(msg.as_str(), "\\otherslist\\profileid\\302594991\\final\\");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamString {
    buf: String,
}

impl ParamString {
    /// Create an empty message
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a name-only parameter: `\name`.
    ///
    /// Used for section markers and the terminator marker.
    pub fn add(mut self, name: &str) -> Self {
        self.buf.push(DELIMITER);
        self.buf.push_str(&escape(name));
        self
    }

    /// Append a parameter with a value: `\name\value`.
    ///
    /// Numeric values render in their canonical decimal form before escaping.
    pub fn add_value(mut self, name: &str, value: impl fmt::Display) -> Self {
        self.buf.push(DELIMITER);
        self.buf.push_str(&escape(name));
        self.buf.push(DELIMITER);
        self.buf.push_str(&escape(&value.to_string()));
        self
    }

    /// Append the `final` marker and the closing delimiter, ending the
    /// message. Every outbound message ends with this call.
    pub fn terminate(self) -> Self {
        let mut msg = self.add("final");
        msg.buf.push(DELIMITER);
        msg
    }

    /// The raw wire text
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consume the message, yielding the raw wire text
    pub fn into_string(self) -> String {
        self.buf
    }
}

impl fmt::Display for ParamString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}
