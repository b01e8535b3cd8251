//! The inbound request envelope and its parser.
//!
//! Missing keys take the zero value of their type, unknown keys are
//! ignored. Wrong scalar types, a non-object top level and unparsable
//! timestamps are [`SkillError::MalformedInput`].

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ParseConfig;
use crate::enums::{DialogState, Locale, PlayerActivity, RequestType, SessionEndedReason};
use crate::error::SkillError;
use crate::intent::{Intent, IntentName};
use crate::viewport::Viewport;

/// Session attributes: string keys to string values.
///
/// Ordered so that serialized output is stable across calls.
pub type Attributes = BTreeMap<String, String>;

/// Top-level request sent by the platform to the skill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestEnvelope {
    /// Protocol version, e.g. `"1.0"`.
    pub version: String,
    /// Session data. Zero-valued on requests sent outside a session, such
    /// as audio player events.
    pub session: Session,
    /// Device and service state at the time of the request.
    pub context: Context,
    /// The request itself.
    pub request: Request,
}

impl RequestEnvelope {
    /// The intent carried by the request, if any.
    pub fn intent(&self) -> Option<&Intent> {
        self.request.intent.as_ref()
    }

    /// The application ID the request targets.
    ///
    /// Reads the session copy first and falls back to `context.System`,
    /// which is present on every request.
    pub fn application_id(&self) -> &str {
        let from_session = self.session.application.application_id.as_str();
        if from_session.is_empty() {
            self.context.system.application.application_id.as_str()
        } else {
            from_session
        }
    }
}

/// Conversation session shared by consecutive requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Session {
    /// True on the first request of a session.
    #[serde(rename = "new")]
    pub is_new: bool,
    /// Session identifier, stable for the life of the session.
    pub session_id: String,
    /// Target skill.
    pub application: Application,
    /// Attributes the skill returned in its previous response.
    pub attributes: Attributes,
    /// The user who owns the session.
    pub user: User,
}

/// State of the platform and device when the request was sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Context {
    /// Device, application and user information.
    #[serde(rename = "System", alias = "system")]
    pub system: System,
    /// Playback state of the audio player.
    #[serde(rename = "AudioPlayer", alias = "audioPlayer")]
    pub audio_player: AudioPlayerState,
    /// Screen capabilities, only sent by devices with a display.
    #[serde(
        rename = "Viewport",
        alias = "viewport",
        skip_serializing_if = "Option::is_none"
    )]
    pub viewport: Option<Viewport>,
}

/// Service-level information for the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct System {
    /// The device that sent the request.
    pub device: Device,
    /// Target skill.
    pub application: Application,
    /// The user making the request.
    pub user: User,
    /// Base URI for platform APIs in the user's region.
    pub api_endpoint: String,
    /// Bearer token for calling platform APIs.
    pub api_access_token: String,
}

/// The device that sent the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Device {
    /// Device identifier, unique per skill.
    pub device_id: String,
    /// Interfaces the device supports.
    pub supported_interfaces: SupportedInterfaces,
}

/// Interfaces a device supports. A key's presence is the capability flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportedInterfaces {
    /// Present when the device can stream audio.
    #[serde(
        rename = "AudioPlayer",
        alias = "audioPlayer",
        skip_serializing_if = "Option::is_none"
    )]
    pub audio_player: Option<AudioPlayerInterface>,
}

impl SupportedInterfaces {
    /// Whether the device can stream audio.
    #[must_use]
    pub fn has_audio_player(&self) -> bool {
        self.audio_player.is_some()
    }
}

/// Marker object for the audio player capability. Its content is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioPlayerInterface {}

/// Playback state reported with every user-initiated request.
///
/// `token` and `offset_in_milliseconds` are only filled in for the skill
/// that most recently played audio.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AudioPlayerState {
    /// Raw `playerActivity` literal.
    pub player_activity: String,
    /// Token of the current stream.
    pub token: String,
    /// Position in the current stream.
    pub offset_in_milliseconds: i64,
}

impl AudioPlayerState {
    /// The typed player activity, if the literal is a known one.
    pub fn activity(&self) -> Option<PlayerActivity> {
        self.player_activity.parse().ok()
    }
}

/// Identifies the skill a request is meant for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Application {
    /// Skill application ID.
    pub application_id: String,
}

/// The user making the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    /// User identifier, unique per skill.
    pub user_id: String,
    /// Account-linking token, present once the user linked an account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// Permissions granted by the user.
    pub permissions: Permissions,
}

/// Permissions granted by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Permissions {
    /// Consent token. Deprecated by the platform in favour of
    /// `apiAccessToken`.
    pub consent_token: String,
}

/// The inner `request` object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Request {
    /// Unique request identifier.
    pub request_id: String,
    /// When the request was sent.
    #[serde(
        default,
        with = "crate::timestamp::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<DateTime<Utc>>,
    /// Locale of the user's device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    /// Raw discriminator literal. See [`Request::kind`].
    #[serde(rename = "type")]
    pub request_type: String,
    /// The recognized intent on intent-bearing requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    /// Raw `dialogState` literal on multi-turn intent requests. See
    /// [`Request::dialog`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialog_state: Option<String>,
    /// Raw `reason` literal on `SessionEndedRequest`. See
    /// [`Request::end_reason`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Failure details when `reason` is `ERROR`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<SessionEndedError>,
}

impl Request {
    /// The typed discriminator, or `None` for a literal this crate does not
    /// know.
    pub fn kind(&self) -> Option<RequestType> {
        self.request_type.parse().ok()
    }

    /// The typed dialog state, if present and a known literal.
    pub fn dialog(&self) -> Option<DialogState> {
        self.dialog_state.as_deref()?.parse().ok()
    }

    /// The typed session-ended reason, if present and a known literal.
    pub fn end_reason(&self) -> Option<SessionEndedReason> {
        self.reason.as_deref()?.parse().ok()
    }

    /// The intent name, if the request carries an intent.
    pub fn intent_name(&self) -> Option<&IntentName> {
        self.intent.as_ref().map(|intent| &intent.name)
    }

    /// True iff `type` is exactly `LaunchRequest`.
    #[must_use]
    pub fn is_launch_request(&self) -> bool {
        self.request_type == RequestType::LaunchRequest.as_str()
    }

    /// True iff `type` is exactly `CanFulfillIntentRequest`.
    #[must_use]
    pub fn is_can_fulfill_intent_request(&self) -> bool {
        self.request_type == RequestType::CanFulfillIntentRequest.as_str()
    }

    /// True iff `type` is exactly `SessionEndedRequest`.
    #[must_use]
    pub fn is_session_ended_request(&self) -> bool {
        self.request_type == RequestType::SessionEndedRequest.as_str()
    }

    /// True iff `type` is exactly `IntentRequest`.
    #[must_use]
    pub fn is_intent_request(&self) -> bool {
        self.request_type == RequestType::IntentRequest.as_str()
    }
}

/// Error details attached to a `SessionEndedRequest`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionEndedError {
    /// Error category, e.g. `INVALID_RESPONSE`.
    #[serde(rename = "type")]
    pub error_type: String,
    /// Human-readable description.
    pub message: String,
}

/// Parses request bodies according to a [`ParseConfig`].
#[derive(Debug, Clone, Default)]
pub struct RequestParser {
    config: ParseConfig,
}

impl RequestParser {
    /// Create a parser with the given configuration.
    pub fn new(config: ParseConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Parse raw JSON bytes into a [`RequestEnvelope`].
    pub fn parse(&self, bytes: impl AsRef<[u8]>) -> Result<RequestEnvelope, SkillError> {
        let bytes = bytes.as_ref();
        let result = self.parse_inner(bytes);
        match &result {
            Ok(envelope) => tracing::debug!(
                request_id = %envelope.request.request_id,
                request_type = %envelope.request.request_type,
                "parsed skill request"
            ),
            Err(err) => tracing::debug!(len = bytes.len(), error = %err, "rejected skill request"),
        }
        result
    }

    fn parse_inner(&self, bytes: &[u8]) -> Result<RequestEnvelope, SkillError> {
        if let Some(limit) = self.config.max_body_bytes {
            if bytes.len() > limit {
                return Err(SkillError::MalformedInput(format!(
                    "body is {} bytes, limit is {limit}",
                    bytes.len()
                )));
            }
        }

        // Derived struct visitors also accept JSON arrays, so check the
        // top-level shape before handing off to serde.
        if bytes.iter().find(|b| !b.is_ascii_whitespace()) != Some(&b'{') {
            return Err(SkillError::MalformedInput(
                "top-level value is not a JSON object".to_owned(),
            ));
        }

        let envelope: RequestEnvelope = serde_json::from_slice(bytes)?;

        if self.config.strict_slot_names {
            if let Some((key, name)) = envelope
                .intent()
                .and_then(|intent| intent.mismatched_slot_key())
            {
                return Err(SkillError::MalformedInput(format!(
                    "slot key {key:?} holds slot named {name:?}"
                )));
            }
        }

        Ok(envelope)
    }
}

/// Parse a request body with the default, permissive configuration.
///
/// # Examples
///
/// ```
/// use alexa_skill_types::parse_request;
///
/// let envelope = parse_request(r#"{"version":"1.0","request":{"type":"LaunchRequest"}}"#).unwrap();
/// assert!(envelope.request.is_launch_request());
/// assert!(parse_request("[]").unwrap_err().is_malformed_input());
/// ```
pub fn parse_request(bytes: impl AsRef<[u8]>) -> Result<RequestEnvelope, SkillError> {
    RequestParser::default().parse(bytes)
}
