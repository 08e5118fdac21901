//! Card legality summarization.
//!
//! Turns a card's per-format legality map into spoken text:
//! - statuses are grouped into buckets by the classifier
//! - each bucket becomes an "X, Y and Z." phrase via the joiner
//! - the composer assembles the final sentence for one or all formats

mod classifier;
mod composer;
mod joiner;
mod status;

pub use composer::{Utterance, compose};
pub use status::{LegalityMap, LegalityStatus};
