//! Error types for Scryfall lookups.

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid response from Scryfall")]
    InvalidResponse {
        #[source]
        source: serde_json::Error,
    },
}
