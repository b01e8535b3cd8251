//! The outbound response envelope and its serializer.
//!
//! Optional fields holding their zero value are left out of the JSON
//! entirely; the platform treats a present-but-empty field differently
//! from an absent one.

use serde::{Deserialize, Serialize};

use crate::enums::{CardType, OutputSpeechType, PlayBehavior};
use crate::error::SkillError;
use crate::request::Attributes;

/// Top-level response returned by the skill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResponseEnvelope {
    /// Protocol version, normally `"1.0"`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
    /// Attributes to carry into the next request of the session.
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub session_attributes: Attributes,
    /// What to render and whether to end the session.
    pub response: Response,
}

impl ResponseEnvelope {
    /// Protocol version this crate emits by default.
    pub const VERSION: &'static str = "1.0";

    /// Wrap a response with the default version.
    pub fn new(response: Response) -> Self {
        Self {
            version: Self::VERSION.to_owned(),
            session_attributes: Attributes::new(),
            response,
        }
    }

    /// Add a session attribute.
    #[must_use]
    pub fn with_session_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.session_attributes.insert(key.into(), value.into());
        self
    }

    /// Serialize to a JSON string.
    ///
    /// # Examples
    ///
    /// ```
    /// use alexa_skill_types::{Response, ResponseEnvelope};
    ///
    /// let json = ResponseEnvelope::new(Response::speak_plain("Hello")).to_json().unwrap();
    /// assert_eq!(
    ///     json,
    ///     r#"{"version":"1.0","response":{"outputSpeech":{"type":"PlainText","text":"Hello"}}}"#
    /// );
    /// ```
    pub fn to_json(&self) -> Result<String, SkillError> {
        let json = serde_json::to_string(self).map_err(SkillError::Encode)?;
        tracing::trace!(len = json.len(), "serialized skill response");
        Ok(json)
    }
}

/// Serialize a response envelope to JSON bytes.
///
/// Output is deterministic: fields follow declaration order and maps are
/// ordered by key.
pub fn serialize_response(envelope: &ResponseEnvelope) -> Result<Vec<u8>, SkillError> {
    let bytes = serde_json::to_vec(envelope).map_err(SkillError::Encode)?;
    tracing::trace!(len = bytes.len(), "serialized skill response");
    Ok(bytes)
}

/// What to render to the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Response {
    /// Speech to render.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    /// Card to render in the companion app.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    /// Speech to render if the user does not answer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    /// Device-level actions, in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
    /// End the session after speaking.
    ///
    /// Only `true` is ever written. `false` is omitted, which the platform
    /// reads the same as an absent key.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub should_end_session: bool,
}

impl Response {
    /// A response that speaks the given speech.
    pub fn speak(speech: OutputSpeech) -> Self {
        Self {
            output_speech: Some(speech),
            ..Default::default()
        }
    }

    /// A response that speaks plain text.
    pub fn speak_plain(text: impl Into<String>) -> Self {
        Self::speak(OutputSpeech::plain_text(text))
    }

    /// Set the reprompt speech.
    #[must_use]
    pub fn reprompt(mut self, speech: OutputSpeech) -> Self {
        self.reprompt = Some(Reprompt::new(speech));
        self
    }

    /// Attach a card.
    #[must_use]
    pub fn with_card(mut self, card: Card) -> Self {
        self.card = Some(card);
        self
    }

    /// Append a directive.
    #[must_use]
    pub fn with_directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    /// Ask the platform to end the session after this response.
    #[must_use]
    pub fn end_session(mut self) -> Self {
        self.should_end_session = true;
        self
    }
}

/// Speech to render, used for both `outputSpeech` and `reprompt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSpeech {
    /// Markup of the speech.
    #[serde(rename = "type")]
    pub speech_type: OutputSpeechType,
    /// Speech text when `type` is `PlainText`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// SSML markup when `type` is `SSML`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ssml: String,
    /// Queuing behaviour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_behavior: Option<PlayBehavior>,
}

impl OutputSpeech {
    /// Plain text speech.
    pub fn plain_text(text: impl Into<String>) -> Self {
        Self {
            speech_type: OutputSpeechType::PlainText,
            text: text.into(),
            ssml: String::new(),
            play_behavior: None,
        }
    }

    /// SSML speech. The markup is passed through unchanged.
    pub fn ssml(ssml: impl Into<String>) -> Self {
        Self {
            speech_type: OutputSpeechType::Ssml,
            text: String::new(),
            ssml: ssml.into(),
            play_behavior: None,
        }
    }

    /// Set the queuing behaviour.
    #[must_use]
    pub fn with_play_behavior(mut self, behavior: PlayBehavior) -> Self {
        self.play_behavior = Some(behavior);
        self
    }
}

/// A card rendered in the companion app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Card kind.
    #[serde(rename = "type")]
    pub card_type: CardType,
    /// Title. Not used by `LinkAccount` cards.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Body text of a `Standard` card.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Body text of a `Simple` card.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,
    /// Image of a `Standard` card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

impl Card {
    fn empty(card_type: CardType) -> Self {
        Self {
            card_type,
            title: String::new(),
            text: String::new(),
            content: String::new(),
            image: None,
        }
    }

    /// A `Simple` card with a title and plain content.
    pub fn simple(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::empty(CardType::Simple)
        }
    }

    /// A `Standard` card with a title, text and optional image.
    pub fn standard(
        title: impl Into<String>,
        text: impl Into<String>,
        image: Option<Image>,
    ) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            image,
            ..Self::empty(CardType::Standard)
        }
    }

    /// A `LinkAccount` card.
    pub fn link_account() -> Self {
        Self::empty(CardType::LinkAccount)
    }

    /// An `AskForPermissionsConsent` card.
    ///
    /// The card's `permissions` array is not modelled.
    pub fn ask_for_permissions_consent() -> Self {
        Self::empty(CardType::AskForPermissionsConsent)
    }
}

/// Image URLs for a `Standard` card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    /// Shown on small screens.
    #[serde(rename = "smallImageUrl", skip_serializing_if = "String::is_empty")]
    pub small_image_url: String,
    /// Shown on large screens.
    #[serde(rename = "largeImageUrl", skip_serializing_if = "String::is_empty")]
    pub large_image_url: String,
}

impl Image {
    /// Create an image from its two URLs.
    pub fn new(small: impl Into<String>, large: impl Into<String>) -> Self {
        Self {
            small_image_url: small.into(),
            large_image_url: large.into(),
        }
    }
}

/// Speech to render if the user does not answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    /// The reprompt speech.
    pub output_speech: OutputSpeech,
}

impl Reprompt {
    /// Wrap an output speech.
    pub fn new(output_speech: OutputSpeech) -> Self {
        Self { output_speech }
    }
}

/// A device-level action, e.g. `AudioPlayer.Play`.
///
/// Only `type` is modelled; interface-specific keys live in `fields` and
/// are written after it in key order. A `"type"` entry in `fields` is never
/// written, so the object always carries exactly one `type` key.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Directive {
    /// Directive type, e.g. `"AudioPlayer.Stop"`.
    #[serde(rename = "type")]
    pub directive_type: String,
    /// Interface-specific payload.
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl Directive {
    const TYPE_KEY: &'static str = "type";

    /// A directive with no payload.
    pub fn new(directive_type: impl Into<String>) -> Self {
        Self {
            directive_type: directive_type.into(),
            fields: serde_json::Map::new(),
        }
    }

    /// Add a payload field.
    ///
    /// The `type` key is reserved for [`Directive::directive_type`]; a field
    /// with that name is ignored.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        let key = key.into();
        if key != Self::TYPE_KEY {
            self.fields.insert(key, value);
        }
        self
    }
}

impl Serialize for Directive {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let payload = self.fields.iter().filter(|(key, _)| key.as_str() != Self::TYPE_KEY);
        let mut map = serializer.serialize_map(Some(1 + payload.clone().count()))?;
        map.serialize_entry(Self::TYPE_KEY, &self.directive_type)?;
        for (key, value) in payload {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
