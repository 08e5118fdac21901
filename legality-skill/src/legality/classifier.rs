//! Partition a legality map into per-status buckets.

use super::status::{LegalityMap, LegalityStatus};

/// Format names grouped by status, each bucket in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatBuckets {
    pub legal: Vec<String>,
    pub not_legal: Vec<String>,
    pub restricted: Vec<String>,
    pub banned: Vec<String>,
}

/// Sort every format into the bucket for its status.
///
/// Formats with an unrecognized status land in no bucket.
pub fn classify(legalities: &LegalityMap) -> FormatBuckets {
    let mut buckets = FormatBuckets::default();

    for (format, status) in legalities.iter() {
        let bucket = match status {
            LegalityStatus::Legal => &mut buckets.legal,
            LegalityStatus::NotLegal => &mut buckets.not_legal,
            LegalityStatus::Restricted => &mut buckets.restricted,
            LegalityStatus::Banned => &mut buckets.banned,
            LegalityStatus::Unrecognized(_) => continue,
        };
        bucket.push(format.to_string());
    }

    buckets
}
