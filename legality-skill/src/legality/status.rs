//! Legality statuses and the per-format legality map.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A card's standing in one competitive format.
///
/// Values outside the four known statuses are kept verbatim as
/// `Unrecognized` so a single-format answer can still speak them, but the
/// classifier never places them in a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LegalityStatus {
    Legal,
    NotLegal,
    Restricted,
    Banned,
    Unrecognized(String),
}

impl LegalityStatus {
    /// Wire form as used by the card database (`not_legal`, `banned`, ...)
    pub fn as_str(&self) -> &str {
        match self {
            LegalityStatus::Legal => "legal",
            LegalityStatus::NotLegal => "not_legal",
            LegalityStatus::Restricted => "restricted",
            LegalityStatus::Banned => "banned",
            LegalityStatus::Unrecognized(raw) => raw.as_str(),
        }
    }

    /// Speakable form: underscores become spaces
    pub fn spoken(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl From<&str> for LegalityStatus {
    fn from(value: &str) -> Self {
        match value {
            "legal" => LegalityStatus::Legal,
            "not_legal" => LegalityStatus::NotLegal,
            "restricted" => LegalityStatus::Restricted,
            "banned" => LegalityStatus::Banned,
            other => LegalityStatus::Unrecognized(other.to_string()),
        }
    }
}

impl fmt::Display for LegalityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LegalityStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LegalityStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(LegalityStatus::from(raw.as_str()))
    }
}

/// Format name to status, in the order the source listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegalityMap {
    entries: Vec<(String, LegalityStatus)>,
}

impl LegalityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a format's status. A replaced format keeps its
    /// original position.
    pub fn insert(&mut self, format: impl Into<String>, status: LegalityStatus) {
        let format = format.into();
        match self.entries.iter_mut().find(|(key, _)| *key == format) {
            Some((_, existing)) => *existing = status,
            None => self.entries.push((format, status)),
        }
    }

    pub fn get(&self, format: &str) -> Option<&LegalityStatus> {
        self.entries
            .iter()
            .find(|(key, _)| key == format)
            .map(|(_, status)| status)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LegalityStatus)> {
        self.entries
            .iter()
            .map(|(format, status)| (format.as_str(), status))
    }
}

impl<S: Into<String>> FromIterator<(S, LegalityStatus)> for LegalityMap {
    fn from_iter<I: IntoIterator<Item = (S, LegalityStatus)>>(iter: I) -> Self {
        let mut map = LegalityMap::new();
        for (format, status) in iter {
            map.insert(format, status);
        }
        map
    }
}

impl Serialize for LegalityMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (format, status) in &self.entries {
            map.serialize_entry(format, status)?;
        }
        map.end()
    }
}

struct LegalityMapVisitor;

impl<'de> Visitor<'de> for LegalityMapVisitor {
    type Value = LegalityMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of format names to legality statuses")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = LegalityMap::new();
        while let Some((format, status)) = access.next_entry::<String, LegalityStatus>()? {
            map.insert(format, status);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for LegalityMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LegalityMapVisitor)
    }
}
