//! # alexa-skill-types — request and response envelopes for Alexa skills
//!
//! Typed mirrors of the JSON the voice platform sends to a custom skill
//! and the JSON the skill sends back.
//!
//! | Direction | Entry point | Produces |
//! |-----------|-------------|----------|
//! | Inbound | [`parse_request`], [`RequestParser`] | [`RequestEnvelope`] |
//! | Outbound | [`serialize_response`], [`ResponseEnvelope::to_json`] | JSON text |
//!
//! Enumerated wire literals (locales, request types, built-in intents,
//! card types, ...) are closed enums in [`enums`]; each one stringifies to
//! exactly one platform token.
//!
//! Transport, request signature checks, application ID verification and
//! dispatch are left to the caller.
//!
//! ```
//! use alexa_skill_types::*;
//!
//! let envelope = parse_request(
//!     r#"{"version":"1.0","request":{"type":"IntentRequest","intent":{"name":"AMAZON.HelpIntent"}}}"#,
//! )
//! .unwrap();
//! assert!(envelope.request.is_intent_request());
//! assert_eq!(*envelope.request.intent_name().unwrap(), AmazonIntent::Help);
//!
//! let reply = ResponseEnvelope::new(
//!     Response::speak(OutputSpeech::ssml("<speak>Try asking for a fact.</speak>"))
//!         .reprompt(OutputSpeech::plain_text("What would you like?")),
//! );
//! let json = reply.to_json().unwrap();
//! assert!(json.contains(r#""reprompt":{"outputSpeech":{"type":"PlainText""#));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod enums;
pub mod error;
pub mod intent;
pub mod request;
pub mod response;
pub mod timestamp;
pub mod viewport;

pub use config::ParseConfig;
pub use enums::{
    AmazonIntent, CardType, ConfirmationStatus, DialogState, KeyboardMode, Locale,
    OutputSpeechType, PlayBehavior, PlayerActivity, RequestType, SessionEndedReason, SlotSource,
    TouchMode, ViewportShape, ViewportTheme,
};
pub use error::SkillError;
pub use intent::{Intent, IntentName, Slot};
pub use request::{
    Application, Attributes, AudioPlayerInterface, AudioPlayerState, Context, Device, Permissions,
    Request, RequestEnvelope, RequestParser, Session, SessionEndedError, SupportedInterfaces,
    System, User, parse_request,
};
pub use response::{
    Card, Directive, Image, OutputSpeech, Reprompt, Response, ResponseEnvelope,
    serialize_response,
};
pub use timestamp::{format_timestamp, parse_timestamp};
pub use viewport::{Experience, Viewport};
