//! A single logged tasting session.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::parse::{self, ParseError};

/// One tasting/usage session recorded against a tea.
///
/// `date_time` doubles as the key of the session log, so two entries with the
/// same instant collide there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Id of the tea this session used.
    pub tea: i64,

    /// When the session happened.
    pub date_time: DateTime<Utc>,

    pub rating: u8,

    #[serde(default)]
    pub comments: String,

    /// Serialized as whole seconds.
    #[serde(with = "steep_time_secs")]
    pub steep_time: Duration,

    #[serde(default)]
    pub steeping_vessel: i32,

    /// Water temperature, in degrees Fahrenheit.
    #[serde(default)]
    pub steeping_temperature: i32,

    /// Opaque token shared by the entries of one brewing session.
    #[serde(default)]
    pub session_instance: String,

    #[serde(default)]
    pub fixins: Vec<String>,
}

impl Entry {
    /// Creates an entry for `tea` at `date_time` with every other field empty.
    pub fn new(tea: i64, date_time: DateTime<Utc>) -> Self {
        Self {
            tea,
            date_time,
            rating: 0,
            comments: String::new(),
            steep_time: Duration::zero(),
            steeping_vessel: 0,
            steeping_temperature: 0,
            session_instance: String::new(),
            fixins: Vec::new(),
        }
    }

    /// Field-by-field equality. Same as `==`.
    pub fn equal(&self, other: &Self) -> bool {
        self == other
    }

    /// Sets `date_time` from a `M/DD/YYYY` date and an `HHMM` time.
    ///
    /// On error the current value is kept.
    pub fn parse_date_time(&mut self, date: &str, time: &str) -> Result<(), ParseError> {
        self.date_time = parse::parse_date_time(date, time)?;
        Ok(())
    }

    /// Sets `steep_time` from a string such as `4m 20s`.
    ///
    /// On error the current value is kept.
    pub fn parse_steep_time(&mut self, s: &str) -> Result<(), ParseError> {
        self.steep_time = parse::parse_steep_time(s)?;
        Ok(())
    }
}

mod steep_time_secs {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(d.num_seconds())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = i64::deserialize(deserializer)?;
        Duration::try_seconds(secs)
            .ok_or_else(|| serde::de::Error::custom(format!("steep time out of range: {secs}")))
    }
}
