//! Compose the spoken answer for a card lookup.

use crate::scryfall::{CardRecord, LookupOutcome};

use super::classifier::classify;
use super::joiner::join_formats;

const LEGAL_PREFIX: &str = "Is legal in ";
const BANNED_PREFIX: &str = "Is banned in ";
const RESTRICTED_PREFIX: &str = "Is restricted in ";
const NOT_LEGAL_PREFIX: &str = "Is not legal in ";

/// Result of composing an answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Utterance {
    /// Text ready to be spoken as-is
    Spoken(String),
    /// The requested format is absent from the card's legality map
    UnrecognizedFormat { format: String },
}

/// Compose the answer for a lookup outcome, for one format or all of them.
pub fn compose(outcome: &LookupOutcome, format: Option<&str>) -> Utterance {
    match outcome {
        LookupOutcome::Error(error) => Utterance::Spoken(error.details.clone()),
        LookupOutcome::Card(card) => match format {
            Some(requested) => compose_single_format(card, requested),
            None => Utterance::Spoken(compose_all_formats(card)),
        },
    }
}

/// Map a spoken format name onto the database's key ("Pauper Commander"
/// becomes "paupercommander").
pub(crate) fn normalize_format(raw: &str) -> String {
    raw.split_whitespace().collect::<String>().to_lowercase()
}

fn compose_single_format(card: &CardRecord, requested: &str) -> Utterance {
    let format = normalize_format(requested);

    match card.legalities.get(&format) {
        Some(status) => Utterance::Spoken(format!(
            "{} is {} in {}",
            card.name,
            status.spoken(),
            format
        )),
        None => Utterance::UnrecognizedFormat {
            format: requested.trim().to_string(),
        },
    }
}

/// Spoken order differs from classification order: legal, banned,
/// restricted, then not legal.
fn compose_all_formats(card: &CardRecord) -> String {
    let buckets = classify(&card.legalities);
    let phrases = [
        (LEGAL_PREFIX, &buckets.legal),
        (BANNED_PREFIX, &buckets.banned),
        (RESTRICTED_PREFIX, &buckets.restricted),
        (NOT_LEGAL_PREFIX, &buckets.not_legal),
    ];

    let mut text = card.name.clone();
    for (prefix, formats) in phrases {
        if formats.is_empty() {
            continue;
        }
        text.push(' ');
        text.push_str(&join_formats(prefix, formats));
    }

    text
}
