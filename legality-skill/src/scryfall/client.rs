//! Scryfall API client implementation.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;
use std::time::Duration;
use tracing::debug;

use crate::config::ScryfallConfig;

use super::CardLookup;
use super::error::LookupError;
use super::responses::LookupOutcome;

/// Scryfall API client
#[derive(Clone)]
pub struct ScryfallClient {
    client: Client,
    base_url: String,
}

impl ScryfallClient {
    /// Create a new Scryfall client
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ScryfallConfig) -> Result<Self, LookupError> {
        Self::new(&config.base_url, config.timeout_secs, &config.user_agent)
    }

    /// URL of the fuzzy named-card search for `fuzzy_name`
    pub fn named_url(&self, fuzzy_name: &str) -> String {
        format!(
            "{}/cards/named?fuzzy={}",
            self.base_url,
            urlencoding::encode(fuzzy_name)
        )
    }
}

#[async_trait]
impl CardLookup for ScryfallClient {
    async fn resolve_card(&self, fuzzy_name: &str) -> Result<LookupOutcome, LookupError> {
        let url = self.named_url(fuzzy_name);
        debug!(url = %url, "Resolving card");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        // Unmatched names come back as 404 with an error object in the body
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<LookupOutcome>(&body) {
            Ok(outcome) => Ok(outcome),
            Err(source) if status.is_success() => Err(LookupError::InvalidResponse { source }),
            Err(_) => Err(LookupError::ApiError {
                status: status.as_u16(),
                message: body,
            }),
        }
    }
}
