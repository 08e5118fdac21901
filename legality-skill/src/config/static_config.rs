//! Startup configuration for the skill server and its card lookup.

use serde::Deserialize;
use std::time::Duration;

/// Configuration read once at startup
#[derive(Debug, Clone, Deserialize)]
pub struct StaticConfig {
    #[serde(default = "default_server")]
    pub server: ServerConfig,

    #[serde(default = "default_scryfall")]
    pub scryfall: ScryfallConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Upper bound on handling one skill request, lookup included
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Scryfall API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScryfallConfig {
    #[serde(default = "default_scryfall_base_url")]
    pub base_url: String,

    #[serde(default = "default_scryfall_timeout_secs")]
    pub timeout_secs: u64,

    /// Scryfall asks API clients to identify themselves
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            scryfall: default_scryfall(),
        }
    }
}

// ==================== Default Value Functions ====================

pub(crate) fn default_server() -> ServerConfig {
    ServerConfig {
        host: default_host(),
        port: default_port(),
        request_timeout_secs: default_request_timeout_secs(),
    }
}

pub(crate) fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub(crate) fn default_port() -> u16 {
    8080
}

// Voice platforms give up on a skill after roughly eight seconds
pub(crate) fn default_request_timeout_secs() -> u64 {
    8
}

pub(crate) fn default_scryfall() -> ScryfallConfig {
    ScryfallConfig {
        base_url: default_scryfall_base_url(),
        timeout_secs: default_scryfall_timeout_secs(),
        user_agent: default_user_agent(),
    }
}

pub(crate) fn default_scryfall_base_url() -> String {
    "https://api.scryfall.com".to_string()
}

pub(crate) fn default_scryfall_timeout_secs() -> u64 {
    5
}

pub(crate) fn default_user_agent() -> String {
    format!("CardLegalitySkill/{}", env!("CARGO_PKG_VERSION"))
}
