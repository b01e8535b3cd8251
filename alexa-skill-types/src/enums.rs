//! Closed, string-backed enumerations shared by requests and responses.
//!
//! Every enum maps each variant to exactly one platform literal. The
//! mapping is total: there is no fallback arm, and a value outside the
//! declared set cannot be constructed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SkillError;

/// Declares a wire enumeration with `as_str`, `Display`, `FromStr`, an
/// `ALL` slice and serde renames that all agree on the same literal.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $kind:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The literal token used on the wire.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = SkillError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(SkillError::UnknownVariant {
                        kind: $kind,
                        value: s.to_owned(),
                    }),
                }
            }
        }
    };
}

wire_enum! {
    /// Whether the user explicitly confirmed or denied an intent or slot value.
    #[derive(Default)]
    pub enum ConfirmationStatus as "confirmation status" {
        /// The user has neither confirmed nor denied.
        #[default]
        None => "NONE",
        /// The user confirmed.
        Confirmed => "CONFIRMED",
        /// The user denied.
        Denied => "DENIED",
    }
}

wire_enum! {
    /// Discriminator of the inner `request` object.
    pub enum RequestType as "request type" {
        /// The user opened the skill without a specific intent.
        LaunchRequest => "LaunchRequest",
        /// The platform asks whether the skill could fulfill an intent,
        /// before asking it to act.
        CanFulfillIntentRequest => "CanFulfillIntentRequest",
        /// The session ended.
        SessionEndedRequest => "SessionEndedRequest",
        /// The user expressed an intent.
        IntentRequest => "IntentRequest",
    }
}

wire_enum! {
    /// Built-in intents reserved by the platform under the `AMAZON.` prefix.
    pub enum AmazonIntent as "built-in intent" {
        /// Cancel a transaction or exit the skill.
        Cancel => "AMAZON.CancelIntent",
        /// Utterances that match no other intent.
        Fallback => "AMAZON.FallbackIntent",
        /// Ask how to use the skill.
        Help => "AMAZON.HelpIntent",
        /// Turn off loop mode.
        LoopOff => "AMAZON.LoopOffIntent",
        /// Turn on loop mode.
        LoopOn => "AMAZON.LoopOnIntent",
        /// Pause the action in progress.
        Pause => "AMAZON.PauseIntent",
        /// Go back to the previous item.
        Previous => "AMAZON.PreviousIntent",
        /// Go to the next item.
        Next => "AMAZON.NextIntent",
        /// Repeat the last action.
        Repeat => "AMAZON.RepeatIntent",
        /// Resume the paused action.
        Resume => "AMAZON.ResumeIntent",
        /// Select an item, e.g. from a list.
        Select => "AMAZON.SelectIntent",
        /// Turn off shuffle mode.
        ShuffleOff => "AMAZON.ShuffleOffIntent",
        /// Turn on shuffle mode.
        ShuffleOn => "AMAZON.ShuffleOnIntent",
        /// Restart the game, transaction or track.
        StartOver => "AMAZON.StartOverIntent",
        /// Stop the action or exit the skill.
        Stop => "AMAZON.StopIntent",
        /// Positive answer to a yes/no question.
        Yes => "AMAZON.YesIntent",
        /// Negative answer to a yes/no question.
        No => "AMAZON.NoIntent",
        /// Leave the skill and return to the device home screen.
        NavigateHome => "AMAZON.NavigateHomeIntent",
    }
}

wire_enum! {
    /// Locales the platform sends in `request.locale`.
    pub enum Locale as "locale" {
        /// Arabic (Saudi Arabia).
        ArSa => "ar-SA",
        /// German (Germany).
        DeDe => "de-DE",
        /// English (Australia).
        EnAu => "en-AU",
        /// English (Canada).
        EnCa => "en-CA",
        /// English (United Kingdom).
        EnGb => "en-GB",
        /// English (India).
        EnIn => "en-IN",
        /// English (United States).
        EnUs => "en-US",
        /// Spanish (Spain).
        EsEs => "es-ES",
        /// Spanish (Mexico).
        EsMx => "es-MX",
        /// Spanish (United States).
        EsUs => "es-US",
        /// French (Canada).
        FrCa => "fr-CA",
        /// French (France).
        FrFr => "fr-FR",
        /// Hindi (India).
        HiIn => "hi-IN",
        /// Italian (Italy).
        ItIt => "it-IT",
        /// Japanese (Japan).
        JaJp => "ja-JP",
        /// Dutch (Netherlands).
        NlNl => "nl-NL",
        /// Portuguese (Brazil).
        PtBr => "pt-BR",
    }
}

impl Locale {
    /// The ISO 639-1 language part of the tag, e.g. `"en"` for `en-GB`.
    #[must_use]
    pub fn language(&self) -> &'static str {
        let tag = self.as_str();
        tag.split_once('-').map_or(tag, |(lang, _)| lang)
    }
}

wire_enum! {
    /// How the text of an [`OutputSpeech`](crate::OutputSpeech) is marked up.
    pub enum OutputSpeechType as "output speech type" {
        /// Text marked up with SSML.
        Ssml => "SSML",
        /// Plain text.
        PlainText => "PlainText",
    }
}

wire_enum! {
    /// Queuing behaviour of an output speech.
    pub enum PlayBehavior as "play behavior" {
        /// Add to the end of the queue without interrupting current speech.
        Enqueue => "ENQUEUE",
        /// Interrupt and replace current and queued speech.
        ReplaceAll => "REPLACE_ALL",
        /// Replace queued speech without interrupting current speech.
        ReplaceEnqueued => "REPLACE_ENQUEUED",
    }
}

wire_enum! {
    /// Kind of card rendered in the companion app.
    pub enum CardType as "card type" {
        /// A title and plain text content.
        Simple => "Simple",
        /// A title, text content and an image.
        Standard => "Standard",
        /// A link to the account-linking authorization URI.
        LinkAccount => "LinkAccount",
        /// A request for consent to customer information.
        AskForPermissionsConsent => "AskForPermissionsConsent",
    }
}

wire_enum! {
    /// Physical shape of a device screen.
    pub enum ViewportShape as "viewport shape" {
        /// Rectangular screen.
        Rectangle => "RECTANGLE",
        /// Round screen.
        Round => "ROUND",
    }
}

wire_enum! {
    /// Colour theme the device is currently using.
    pub enum ViewportTheme as "viewport theme" {
        /// Light theme.
        Light => "LIGHT",
        /// Dark theme.
        Dark => "DARK",
    }
}

wire_enum! {
    /// Touch input a screen supports.
    pub enum TouchMode as "touch mode" {
        /// Single-point touch.
        Single => "SINGLE",
    }
}

wire_enum! {
    /// Keyboard input a device supports.
    pub enum KeyboardMode as "keyboard mode" {
        /// Directional pad style navigation.
        Direction => "DIRECTION",
    }
}

wire_enum! {
    /// Where a slot value came from.
    pub enum SlotSource as "slot source" {
        /// The value was spoken by the user.
        User => "USER",
    }
}

wire_enum! {
    /// Progress of a multi-turn dialog on an intent request.
    pub enum DialogState as "dialog state" {
        /// First turn of the dialog.
        Started => "STARTED",
        /// The dialog is in progress.
        InProgress => "IN_PROGRESS",
        /// All required slots are filled and confirmed.
        Completed => "COMPLETED",
    }
}

wire_enum! {
    /// Why a session ended.
    pub enum SessionEndedReason as "session ended reason" {
        /// The user asked to exit.
        UserInitiated => "USER_INITIATED",
        /// An error occurred.
        Error => "ERROR",
        /// The user did not answer the reprompts.
        ExceededMaxReprompts => "EXCEEDED_MAX_REPROMPTS",
    }
}

wire_enum! {
    /// Last known state of audio playback on the device.
    pub enum PlayerActivity as "player activity" {
        /// Nothing was playing.
        Idle => "IDLE",
        /// Playback was paused.
        Paused => "PAUSED",
        /// A stream was playing.
        Playing => "PLAYING",
        /// The buffer ran out during playback.
        BufferUnderrun => "BUFFER_UNDERRUN",
        /// The stream finished.
        Finished => "FINISHED",
        /// Playback was stopped.
        Stopped => "STOPPED",
    }
}
