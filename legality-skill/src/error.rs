use thiserror::Error;

use crate::scryfall::LookupError;

/// Main service error type
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Card lookup failed")]
    Lookup(#[from] LookupError),

    #[error("Missing required slot: {slot}")]
    MissingSlot { slot: String },

    #[error("No handler for {request_type}")]
    UnhandledRequest { request_type: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Render an error and all of its sources as one line
pub fn format_error_chain_ref(error: &(dyn std::error::Error + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
