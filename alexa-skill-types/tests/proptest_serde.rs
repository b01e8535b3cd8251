//! Property-based tests: enum totality, omission law and response round-trips.

use alexa_skill_types::*;
use proptest::prelude::*;

fn arb_play_behavior() -> impl Strategy<Value = PlayBehavior> {
    proptest::sample::select(PlayBehavior::ALL)
}

fn arb_card_type() -> impl Strategy<Value = CardType> {
    proptest::sample::select(CardType::ALL)
}

fn arb_output_speech() -> impl Strategy<Value = OutputSpeech> {
    (
        any::<bool>(),
        ".*",
        proptest::option::of(arb_play_behavior()),
    )
        .prop_map(|(ssml, body, behavior)| {
            let speech = if ssml {
                OutputSpeech::ssml(body)
            } else {
                OutputSpeech::plain_text(body)
            };
            match behavior {
                Some(b) => speech.with_play_behavior(b),
                None => speech,
            }
        })
}

fn arb_image() -> impl Strategy<Value = Image> {
    ("[a-z:/.]*", "[a-z:/.]*").prop_map(|(small, large)| Image::new(small, large))
}

fn arb_card() -> impl Strategy<Value = Card> {
    (arb_card_type(), ".*", ".*", ".*", proptest::option::of(arb_image())).prop_map(
        |(card_type, title, text, content, image)| Card {
            card_type,
            title,
            text,
            content,
            image,
        },
    )
}

fn arb_payload_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("type".to_owned()),
        Just("token".to_owned()),
        "[A-Za-z][A-Za-z0-9_]{0,11}",
    ]
}

fn arb_payload_value() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        "[a-z]{1,8}".prop_map(serde_json::Value::String),
        any::<i32>().prop_map(serde_json::Value::from),
        Just(serde_json::Value::Bool(true)),
    ]
}

fn arb_directive() -> impl Strategy<Value = Directive> {
    (
        "[A-Za-z]+\\.[A-Za-z]+",
        proptest::collection::vec((arb_payload_key(), arb_payload_value()), 0..5),
    )
        .prop_map(|(t, fields)| {
            fields
                .into_iter()
                .fold(Directive::new(t), |d, (key, value)| d.with_field(key, value))
        })
}

fn arb_response() -> impl Strategy<Value = Response> {
    (
        proptest::option::of(arb_output_speech()),
        proptest::option::of(arb_card()),
        proptest::option::of(arb_output_speech()),
        proptest::collection::vec(arb_directive(), 0..4),
        any::<bool>(),
    )
        .prop_map(|(speech, card, reprompt, directives, end)| Response {
            output_speech: speech,
            card,
            reprompt: reprompt.map(Reprompt::new),
            directives,
            should_end_session: end,
        })
}

fn arb_envelope() -> impl Strategy<Value = ResponseEnvelope> {
    (
        prop_oneof![Just(String::new()), Just("1.0".to_owned())],
        proptest::collection::btree_map("[a-zA-Z]{1,6}", ".*", 0..4),
        arb_response(),
    )
        .prop_map(|(version, session_attributes, response)| ResponseEnvelope {
            version,
            session_attributes,
            response,
        })
}

fn contains_empty_string_or_null(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::String(s) => s.is_empty(),
        serde_json::Value::Array(items) => items.iter().any(contains_empty_string_or_null),
        serde_json::Value::Object(map) => map.values().any(contains_empty_string_or_null),
        _ => false,
    }
}

proptest! {
    #[test]
    fn locale_from_str_inverts_as_str(locale in proptest::sample::select(Locale::ALL)) {
        prop_assert_eq!(locale.as_str().parse::<Locale>().unwrap(), locale);
    }

    #[test]
    fn amazon_intent_from_str_inverts_as_str(
        intent in proptest::sample::select(AmazonIntent::ALL)
    ) {
        prop_assert_eq!(intent.as_str().parse::<AmazonIntent>().unwrap(), intent);
        prop_assert_eq!(IntentName::new(intent.as_str()), IntentName::Builtin(intent));
    }

    #[test]
    fn custom_intent_names_round_trip(name in "[A-Z][A-Za-z]{0,20}Intent") {
        let parsed = IntentName::new(name.clone());
        prop_assert_eq!(parsed.as_str(), name.as_str());
        let json = serde_json::to_string(&parsed).unwrap();
        let back: IntentName = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, parsed);
    }

    #[test]
    fn response_envelope_round_trips(env in arb_envelope()) {
        let bytes = serialize_response(&env).unwrap();
        let back: ResponseEnvelope = serde_json::from_slice(&bytes).unwrap();
        prop_assert_eq!(back, env);
    }

    #[test]
    fn serialization_is_byte_stable(env in arb_envelope()) {
        prop_assert_eq!(serialize_response(&env).unwrap(), serialize_response(&env).unwrap());
    }

    #[test]
    fn zero_values_never_reach_the_wire(env in arb_envelope()) {
        let value: serde_json::Value =
            serde_json::from_slice(&serialize_response(&env).unwrap()).unwrap();
        let response = &value["response"];

        prop_assert_eq!(response.get("card").is_some(), env.response.card.is_some());
        prop_assert_eq!(response.get("reprompt").is_some(), env.response.reprompt.is_some());
        prop_assert_eq!(response.get("directives").is_some(), !env.response.directives.is_empty());
        prop_assert_eq!(
            response.get("shouldEndSession").is_some(),
            env.response.should_end_session
        );
        prop_assert_eq!(
            value.get("sessionAttributes").is_some(),
            !env.session_attributes.is_empty()
        );
        prop_assert_eq!(value.get("version").is_some(), !env.version.is_empty());

        // Session attribute values may legitimately be empty strings; every
        // other string-valued field is skipped when empty.
        prop_assert!(!contains_empty_string_or_null(response));
    }

    #[test]
    fn parser_never_panics(input in ".*") {
        let _ = parse_request(input.as_bytes());
    }
}
