//! Error types for parsing and serializing skill envelopes.

/// Errors from request parsing and response serialization.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SkillError {
    /// The inbound JSON does not match the request schema.
    ///
    /// Covers non-object payloads, wrong scalar types, unparsable
    /// timestamps, oversized bodies and slot maps whose keys disagree with
    /// the slot names. Callers reject the request when they see this.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A string did not name any variant of a wire enumeration.
    #[error("unknown {kind} value: {value:?}")]
    UnknownVariant {
        /// The enumeration that was being parsed, e.g. `"locale"`.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// A response tree could not be encoded as JSON.
    #[error("encoding failed: {0}")]
    Encode(#[source] serde_json::Error),
}

impl SkillError {
    /// Whether this error describes bad inbound data rather than a bug.
    #[must_use]
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedInput(_) | Self::UnknownVariant { .. })
    }
}

impl From<serde_json::Error> for SkillError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedInput(err.to_string())
    }
}
