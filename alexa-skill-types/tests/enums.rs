use alexa_skill_types::*;

/// Checks `as_str`, `Display`, `FromStr` and serde against the expected
/// literal for every variant, and that `ALL` covers the whole table.
macro_rules! assert_literals {
    ($ty:ty, [$(($variant:expr, $literal:literal)),+ $(,)?]) => {{
        let table: &[($ty, &str)] = &[$(($variant, $literal)),+];
        assert_eq!(<$ty>::ALL.len(), table.len(), "ALL is missing variants");
        for (variant, literal) in table {
            assert_eq!(variant.as_str(), *literal);
            assert_eq!(variant.to_string(), *literal);
            assert_eq!(literal.parse::<$ty>().unwrap(), *variant);
            assert_eq!(serde_json::to_string(variant).unwrap(), format!("\"{literal}\""));
            assert_eq!(serde_json::from_str::<$ty>(&format!("\"{literal}\"")).unwrap(), *variant);
            assert!(<$ty>::ALL.contains(variant));
        }
    }};
}

#[test]
fn confirmation_status_literals() {
    assert_literals!(
        ConfirmationStatus,
        [
            (ConfirmationStatus::None, "NONE"),
            (ConfirmationStatus::Confirmed, "CONFIRMED"),
            (ConfirmationStatus::Denied, "DENIED"),
        ]
    );
    assert_eq!(ConfirmationStatus::default(), ConfirmationStatus::None);
}

#[test]
fn request_type_literals() {
    assert_literals!(
        RequestType,
        [
            (RequestType::LaunchRequest, "LaunchRequest"),
            (RequestType::CanFulfillIntentRequest, "CanFulfillIntentRequest"),
            (RequestType::SessionEndedRequest, "SessionEndedRequest"),
            (RequestType::IntentRequest, "IntentRequest"),
        ]
    );
}

#[test]
fn amazon_intent_literals() {
    assert_literals!(
        AmazonIntent,
        [
            (AmazonIntent::Cancel, "AMAZON.CancelIntent"),
            (AmazonIntent::Fallback, "AMAZON.FallbackIntent"),
            (AmazonIntent::Help, "AMAZON.HelpIntent"),
            (AmazonIntent::LoopOff, "AMAZON.LoopOffIntent"),
            (AmazonIntent::LoopOn, "AMAZON.LoopOnIntent"),
            (AmazonIntent::Pause, "AMAZON.PauseIntent"),
            (AmazonIntent::Previous, "AMAZON.PreviousIntent"),
            (AmazonIntent::Next, "AMAZON.NextIntent"),
            (AmazonIntent::Repeat, "AMAZON.RepeatIntent"),
            (AmazonIntent::Resume, "AMAZON.ResumeIntent"),
            (AmazonIntent::Select, "AMAZON.SelectIntent"),
            (AmazonIntent::ShuffleOff, "AMAZON.ShuffleOffIntent"),
            (AmazonIntent::ShuffleOn, "AMAZON.ShuffleOnIntent"),
            (AmazonIntent::StartOver, "AMAZON.StartOverIntent"),
            (AmazonIntent::Stop, "AMAZON.StopIntent"),
            (AmazonIntent::Yes, "AMAZON.YesIntent"),
            (AmazonIntent::No, "AMAZON.NoIntent"),
            (AmazonIntent::NavigateHome, "AMAZON.NavigateHomeIntent"),
        ]
    );
    for intent in AmazonIntent::ALL {
        assert!(intent.as_str().starts_with("AMAZON."));
    }
}

#[test]
fn locale_literals() {
    assert_literals!(
        Locale,
        [
            (Locale::ArSa, "ar-SA"),
            (Locale::DeDe, "de-DE"),
            (Locale::EnAu, "en-AU"),
            (Locale::EnCa, "en-CA"),
            (Locale::EnGb, "en-GB"),
            (Locale::EnIn, "en-IN"),
            (Locale::EnUs, "en-US"),
            (Locale::EsEs, "es-ES"),
            (Locale::EsMx, "es-MX"),
            (Locale::EsUs, "es-US"),
            (Locale::FrCa, "fr-CA"),
            (Locale::FrFr, "fr-FR"),
            (Locale::HiIn, "hi-IN"),
            (Locale::ItIt, "it-IT"),
            (Locale::JaJp, "ja-JP"),
            (Locale::NlNl, "nl-NL"),
            (Locale::PtBr, "pt-BR"),
        ]
    );
    assert_eq!(Locale::EnGb.language(), "en");
    assert_eq!(Locale::PtBr.language(), "pt");
}

#[test]
fn response_enum_literals() {
    assert_literals!(
        OutputSpeechType,
        [(OutputSpeechType::Ssml, "SSML"), (OutputSpeechType::PlainText, "PlainText")]
    );
    assert_literals!(
        PlayBehavior,
        [
            (PlayBehavior::Enqueue, "ENQUEUE"),
            (PlayBehavior::ReplaceAll, "REPLACE_ALL"),
            (PlayBehavior::ReplaceEnqueued, "REPLACE_ENQUEUED"),
        ]
    );
    assert_literals!(
        CardType,
        [
            (CardType::Simple, "Simple"),
            (CardType::Standard, "Standard"),
            (CardType::LinkAccount, "LinkAccount"),
            (CardType::AskForPermissionsConsent, "AskForPermissionsConsent"),
        ]
    );
}

#[test]
fn viewport_enum_literals() {
    assert_literals!(
        ViewportShape,
        [(ViewportShape::Rectangle, "RECTANGLE"), (ViewportShape::Round, "ROUND")]
    );
    assert_literals!(
        ViewportTheme,
        [(ViewportTheme::Light, "LIGHT"), (ViewportTheme::Dark, "DARK")]
    );
    assert_literals!(TouchMode, [(TouchMode::Single, "SINGLE")]);
    assert_literals!(KeyboardMode, [(KeyboardMode::Direction, "DIRECTION")]);
}

#[test]
fn request_detail_enum_literals() {
    assert_literals!(SlotSource, [(SlotSource::User, "USER")]);
    assert_literals!(
        DialogState,
        [
            (DialogState::Started, "STARTED"),
            (DialogState::InProgress, "IN_PROGRESS"),
            (DialogState::Completed, "COMPLETED"),
        ]
    );
    assert_literals!(
        SessionEndedReason,
        [
            (SessionEndedReason::UserInitiated, "USER_INITIATED"),
            (SessionEndedReason::Error, "ERROR"),
            (SessionEndedReason::ExceededMaxReprompts, "EXCEEDED_MAX_REPROMPTS"),
        ]
    );
    assert_literals!(
        PlayerActivity,
        [
            (PlayerActivity::Idle, "IDLE"),
            (PlayerActivity::Paused, "PAUSED"),
            (PlayerActivity::Playing, "PLAYING"),
            (PlayerActivity::BufferUnderrun, "BUFFER_UNDERRUN"),
            (PlayerActivity::Finished, "FINISHED"),
            (PlayerActivity::Stopped, "STOPPED"),
        ]
    );
}

#[test]
fn from_str_is_case_sensitive() {
    let err = "launchrequest".parse::<RequestType>().unwrap_err();
    assert!(matches!(
        err,
        SkillError::UnknownVariant { kind: "request type", ref value } if value == "launchrequest"
    ));
    assert!(err.is_malformed_input());
    assert!("en-us".parse::<Locale>().is_err());
    assert!("ssml".parse::<OutputSpeechType>().is_err());
    assert!("".parse::<CardType>().is_err());
}

#[test]
fn unknown_variant_error_message() {
    let err = "AMAZON.DanceIntent".parse::<AmazonIntent>().unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"unknown built-in intent value: "AMAZON.DanceIntent""#
    );
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// IntentName
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn intent_name_classifies_builtins() {
    for builtin in AmazonIntent::ALL {
        let name = IntentName::new(builtin.as_str());
        assert_eq!(name, IntentName::Builtin(*builtin));
        assert_eq!(name.as_str(), builtin.as_str());
        assert_eq!(name, *builtin);
    }
}

#[test]
fn intent_name_custom() {
    let name = IntentName::from("MyCustomIntent");
    assert_eq!(name, IntentName::Custom("MyCustomIntent".into()));
    assert!(!name.is_amazon());
    assert_eq!(name.builtin(), None);
    assert_eq!(name, "MyCustomIntent");
    assert_eq!(name.to_string(), "MyCustomIntent");
}

#[test]
fn intent_name_serializes_as_bare_string() {
    assert_eq!(
        serde_json::to_string(&IntentName::from(AmazonIntent::Yes)).unwrap(),
        r#""AMAZON.YesIntent""#
    );
    assert_eq!(
        serde_json::to_string(&IntentName::from("GetFact")).unwrap(),
        r#""GetFact""#
    );
    let back: IntentName = serde_json::from_str(r#""AMAZON.NoIntent""#).unwrap();
    assert_eq!(back, AmazonIntent::No);
}

#[test]
fn intent_builder_keys_slots_by_name() {
    let intent = Intent::new(AmazonIntent::Select)
        .with_slot(Slot::new("ListPosition", "2"))
        .with_slot(Slot::new("Item", "the red one"));

    assert_eq!(intent.slots.len(), 2);
    assert_eq!(intent.slot_value("ListPosition"), Some("2"));
    assert_eq!(intent.slot("Item").unwrap().name, "Item");
    assert_eq!(intent.confirmation_status, ConfirmationStatus::None);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Timestamps
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn timestamp_helpers() {
    let ts = parse_timestamp("2019-02-23T05:26:19Z").unwrap();
    assert_eq!(format_timestamp(&ts), "2019-02-23T05:26:19Z");

    let offset = parse_timestamp("2019-02-23T06:26:19+01:00").unwrap();
    assert_eq!(offset, ts);

    let fractional = parse_timestamp("2019-02-23T05:26:19.250Z").unwrap();
    assert_eq!(format_timestamp(&fractional), "2019-02-23T05:26:19.250Z");

    assert!(parse_timestamp("2019-02-23").unwrap_err().is_malformed_input());
}
