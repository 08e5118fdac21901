//! Scryfall card database integration.
//!
//! Resolves a spoken (possibly misspelled) card name to the card's
//! per-format legalities via Scryfall's fuzzy name search
//! (https://scryfall.com/docs/api/cards/named).

use async_trait::async_trait;

mod client;
mod error;
mod responses;

pub use client::ScryfallClient;
pub use error::LookupError;
pub use responses::{CardRecord, ErrorRecord, LookupOutcome};

/// Resolves a fuzzy card name against a card database.
///
/// An unmatched name is an `Ok(LookupOutcome::Error)`; `Err` is reserved for
/// transport and decoding failures.
#[async_trait]
pub trait CardLookup: Send + Sync {
    async fn resolve_card(&self, fuzzy_name: &str) -> Result<LookupOutcome, LookupError>;
}
