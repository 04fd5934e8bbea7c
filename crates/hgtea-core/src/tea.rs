//! Tea catalog records.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entry::Entry;

/// When in the season a tea was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flush {
    #[default]
    First,
    Second,
    Monsoon,
    Autumn,
    InBetween,
}

impl Flush {
    /// String representation used in files and output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Monsoon => "monsoon",
            Self::Autumn => "autumn",
            Self::InBetween => "in_between",
        }
    }
}

impl fmt::Display for Flush {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Flush {
    type Err = UnknownFlush;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" => Ok(Self::First),
            "second" => Ok(Self::Second),
            "monsoon" => Ok(Self::Monsoon),
            "autumn" => Ok(Self::Autumn),
            "in_between" => Ok(Self::InBetween),
            _ => Err(UnknownFlush(s.to_string())),
        }
    }
}

impl Serialize for Flush {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Flush {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for unknown flush strings.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown flush: {0}")]
pub struct UnknownFlush(String);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Picked {
    pub year: i32,
    pub flush: Flush,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Origin {
    pub country: String,
    pub region: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Storage {
    /// Some of this tea is on the shelf.
    pub stocked: bool,
    /// Being kept on purpose to age.
    pub aging: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Purchased {
    pub location: String,
    /// Free-form purchase date, as written by the buyer.
    pub date: String,
    pub price: f64,
    /// Packaging code.
    pub packaging: i32,
}

/// A tea in the catalog, along with every session logged against it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tea {
    pub id: i64,
    pub name: String,

    /// Free-text category such as "Black" or "Green Flavored".
    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub picked: Picked,
    #[serde(default)]
    pub origin: Origin,
    #[serde(default)]
    pub storage: Storage,
    #[serde(default)]
    pub purchased: Purchased,

    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub leaf_grade: String,

    #[serde(skip)]
    entries: Vec<Entry>,
}

impl Tea {
    /// Creates a tea with the given id and name and every other field empty.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    /// Records a session against this tea. The same entry may be added twice.
    pub fn add(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Sessions recorded against this tea, in the order they were added.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Whether the size marks this as a sample (e.g. "2oz sample").
    pub fn is_sample(&self) -> bool {
        self.size.to_lowercase().contains("sample")
    }

    /// Mean rating of the recorded sessions.
    pub fn average(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let sum: u32 = self.entries.iter().map(|e| u32::from(e.rating)).sum();
        #[expect(
            clippy::cast_precision_loss,
            reason = "session counts are far below f64 precision limits"
        )]
        let count = self.entries.len() as f64;
        Some(f64::from(sum) / count)
    }

    /// Median rating; the mean of the two middle ratings for an even count.
    pub fn median(&self) -> Option<f64> {
        let mut ratings: Vec<u8> = self.entries.iter().map(|e| e.rating).collect();
        if ratings.is_empty() {
            return None;
        }
        ratings.sort_unstable();

        let mid = ratings.len() / 2;
        if ratings.len() % 2 == 1 {
            Some(f64::from(ratings[mid]))
        } else {
            Some(f64::midpoint(f64::from(ratings[mid - 1]), f64::from(ratings[mid])))
        }
    }

    /// Most frequent rating. Ties go to the lowest rating.
    pub fn mode(&self) -> Option<u8> {
        let mut counts: BTreeMap<u8, usize> = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.rating).or_default() += 1;
        }

        // BTreeMap iterates ascending, and max_by_key keeps the last max,
        // so walk it backwards to land on the lowest tied rating.
        counts
            .into_iter()
            .rev()
            .max_by_key(|(_, count)| *count)
            .map(|(rating, _)| rating)
    }
}
