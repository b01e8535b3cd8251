//! Strict RFC3339 handling for `request.timestamp`.
//!
//! The platform stamps every request with an RFC3339 instant such as
//! `2019-02-23T05:26:19Z`. Anything that does not parse is rejected rather
//! than stored as a zero time.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::SkillError;

/// Parse an RFC3339 instant and normalise it to UTC.
///
/// # Examples
///
/// ```
/// use alexa_skill_types::parse_timestamp;
///
/// let ts = parse_timestamp("2019-02-23T05:26:19Z").unwrap();
/// assert_eq!(ts.to_rfc3339(), "2019-02-23T05:26:19+00:00");
/// assert!(parse_timestamp("23/02/2019").is_err());
/// ```
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, SkillError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|err| {
            SkillError::MalformedInput(format!("timestamp {raw:?} is not RFC3339: {err}"))
        })
}

/// Format an instant the way the platform does, with a `Z` suffix.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// `#[serde(with = ...)]` adapter for an optional RFC3339 field.
///
/// A missing key or JSON `null` yields `None`; a present string must parse.
pub(crate) mod optional {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub(crate) fn serialize<S>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_str(&super::format_timestamp(ts)),
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::parse_timestamp(&raw).map_err(D::Error::custom))
            .transpose()
    }
}
