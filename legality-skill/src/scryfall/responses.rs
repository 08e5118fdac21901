//! Response types for Scryfall's named-card endpoint.

use serde::{Deserialize, Serialize};

use crate::legality::LegalityMap;

/// The parts of a Scryfall card object the skill speaks about
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardRecord {
    pub name: String,
    #[serde(default)]
    pub legalities: LegalityMap,
}

/// Scryfall error object, returned when no card matches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// Human-readable explanation, spoken verbatim
    pub details: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Either a card or an error, discriminated by Scryfall's `object` field
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "object", rename_all = "snake_case")]
pub enum LookupOutcome {
    Card(CardRecord),
    Error(ErrorRecord),
}
