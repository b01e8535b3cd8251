//! The recognized intent and its slot values.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::{AmazonIntent, ConfirmationStatus, SlotSource};

/// Name of an intent: either a platform built-in or a skill-defined string.
///
/// Serializes as the bare literal. Any `AMAZON.`-prefixed name that is not
/// one of the known built-ins stays [`IntentName::Custom`] so that it still
/// round-trips.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IntentName {
    /// A built-in `AMAZON.*` intent.
    Builtin(AmazonIntent),
    /// A skill-defined intent such as `"MyCustomIntent"`.
    Custom(String),
}

impl IntentName {
    /// Create a name from its wire literal.
    pub fn new(name: impl Into<String>) -> Self {
        Self::from(name.into())
    }

    /// The wire literal.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Builtin(builtin) => builtin.as_str(),
            Self::Custom(name) => name,
        }
    }

    /// Whether the name carries the platform-reserved `AMAZON.` prefix.
    #[must_use]
    pub fn is_amazon(&self) -> bool {
        self.as_str().starts_with("AMAZON.")
    }

    /// The built-in intent, if this is one.
    #[must_use]
    pub fn builtin(&self) -> Option<AmazonIntent> {
        match self {
            Self::Builtin(builtin) => Some(*builtin),
            Self::Custom(_) => None,
        }
    }
}

impl Default for IntentName {
    fn default() -> Self {
        Self::Custom(String::new())
    }
}

impl From<String> for IntentName {
    fn from(name: String) -> Self {
        match name.parse::<AmazonIntent>() {
            Ok(builtin) => Self::Builtin(builtin),
            Err(_) => Self::Custom(name),
        }
    }
}

impl From<&str> for IntentName {
    fn from(name: &str) -> Self {
        Self::from(name.to_owned())
    }
}

impl From<AmazonIntent> for IntentName {
    fn from(builtin: AmazonIntent) -> Self {
        Self::Builtin(builtin)
    }
}

impl From<IntentName> for String {
    fn from(name: IntentName) -> Self {
        match name {
            IntentName::Builtin(builtin) => builtin.as_str().to_owned(),
            IntentName::Custom(name) => name,
        }
    }
}

impl PartialEq<AmazonIntent> for IntentName {
    fn eq(&self, other: &AmazonIntent) -> bool {
        self.builtin() == Some(*other)
    }
}

impl PartialEq<str> for IntentName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for IntentName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for IntentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the user wants, with the slot values recognized in the utterance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Intent {
    /// Intent name.
    pub name: IntentName,
    /// Whether the user confirmed the whole intent.
    pub confirmation_status: ConfirmationStatus,
    /// Slots keyed by slot name. Each key repeats the slot's own `name`.
    pub slots: BTreeMap<String, Slot>,
}

impl Intent {
    /// Create an intent with no slots.
    pub fn new(name: impl Into<IntentName>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add a slot, keyed by its own name.
    #[must_use]
    pub fn with_slot(mut self, slot: Slot) -> Self {
        self.slots.insert(slot.name.clone(), slot);
        self
    }

    /// Look up a slot by name.
    pub fn slot(&self, name: &str) -> Option<&Slot> {
        self.slots.get(name)
    }

    /// The recognized value of a slot, if the slot exists and was filled.
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.slot(name)
            .map(|slot| slot.value.as_str())
            .filter(|value| !value.is_empty())
    }

    /// The first map key whose slot carries a different `name`, if any.
    pub(crate) fn mismatched_slot_key(&self) -> Option<(&str, &str)> {
        self.slots
            .iter()
            .find(|(key, slot)| key.as_str() != slot.name)
            .map(|(key, slot)| (key.as_str(), slot.name.as_str()))
    }
}

/// A named value extracted from the user's utterance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Slot {
    /// Slot name, identical to its key in [`Intent::slots`].
    pub name: String,
    /// Recognized text. Empty when the slot was not filled.
    pub value: String,
    /// Whether the user confirmed this value.
    pub confirmation_status: ConfirmationStatus,
    /// Where the value came from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SlotSource>,
}

impl Slot {
    /// Create a filled slot.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Default::default()
        }
    }
}
