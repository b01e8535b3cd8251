//! Parser configuration.

use serde::{Deserialize, Serialize};

/// Knobs for [`RequestParser`](crate::RequestParser). Every field has a
/// permissive default, so `ParseConfig::default()` accepts anything the
/// schema accepts.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Reject bodies longer than this many bytes. `None` means no limit.
    pub max_body_bytes: Option<usize>,

    /// Reject envelopes whose `intent.slots` keys differ from the `name`
    /// of the slot they hold.
    pub strict_slot_names: bool,
}

impl ParseConfig {
    /// Permissive configuration: no size limit, no slot name check.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the body size limit.
    #[must_use]
    pub fn with_max_body_bytes(mut self, limit: usize) -> Self {
        self.max_body_bytes = Some(limit);
        self
    }

    /// Enable or disable the slot name check.
    #[must_use]
    pub fn with_strict_slot_names(mut self, strict: bool) -> Self {
        self.strict_slot_names = strict;
        self
    }
}
