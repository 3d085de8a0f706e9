use serde::{Deserialize, Deserializer, Serialize};

/// One player entry of an attendance record.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RawPlayer {
    pub name: String,
    /// Presence flag reported by the feed. Carried through, never consulted.
    #[serde(default)]
    pub presence: Option<i64>,
}

impl RawPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        RawPlayer {
            name: name.into(),
            presence: None,
        }
    }
}

/// One attendance record as returned by the feed.
///
/// Both fields are optional on the wire so that a missing value reaches the
/// pipeline and is reported as malformed input with the record's position.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct RawSession {
    /// Epoch milliseconds.
    #[serde(
        rename = "startTime",
        default,
        deserialize_with = "deserialize_millis"
    )]
    pub start_time: Option<i64>,
    #[serde(default)]
    pub players: Option<Vec<RawPlayer>>,
}

impl RawSession {
    pub fn new(start_time: i64, players: Vec<RawPlayer>) -> Self {
        RawSession {
            start_time: Some(start_time),
            players: Some(players),
        }
    }
}

/// One page of the attendance feed.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AttendancePage {
    #[serde(default)]
    pub current_page: u32,
    pub has_more_pages: bool,
    #[serde(default)]
    pub data: Vec<RawSession>,
}

/// The feed types `startTime` as a float; integral values are accepted in either form.
fn deserialize_millis<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Millis {
        Int(i64),
        Float(f64),
    }

    match Option::<Millis>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Millis::Int(ms)) => Ok(Some(ms)),
        Some(Millis::Float(ms)) if ms.is_finite() => Ok(Some(ms.round() as i64)),
        Some(Millis::Float(ms)) => Err(serde::de::Error::custom(format!(
            "startTime is not a finite number: {ms}"
        ))),
    }
}
