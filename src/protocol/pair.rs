//! Decoded key/value pairs

/// One decoded PARAM-STRING entry.
///
/// Name-only entries and a truncated trailing token decode with an absent
/// value rather than an empty string, so the two cases stay distinguishable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    /// Parameter name
    pub key: String,

    /// Parameter value; `None` when the wire carried no value token
    pub value: Option<String>,
}

impl Pair {
    /// Create a pair from owned parts
    pub fn new(key: impl Into<String>, value: Option<String>) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}
