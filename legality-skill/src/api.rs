//! HTTP API for the skill.
//!
//! - `POST /skill`: voice platform request envelope in, response envelope out
//! - `GET /health`: liveness and version

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use std::any::Any;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::config::StaticConfig;
use crate::i18n::{DEFAULT_LOCALE, I18n};
use crate::skill::{RequestEnvelope, ResponseEnvelope, Skill, SpeechResponse};

/// Application state
pub struct AppState {
    pub skill: Arc<Skill>,
    pub start_time: Instant,
    pub request_timeout: Duration,
}

/// Build the API router
pub fn router(skill: Arc<Skill>, static_config: &StaticConfig) -> Router {
    let state = Arc::new(AppState {
        skill,
        start_time: Instant::now(),
        request_timeout: static_config.server.request_timeout(),
    });

    Router::new()
        .route("/health", get(health_handler))
        .route("/skill", post(skill_handler))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// === Skill ===

async fn skill_handler(
    State(state): State<Arc<AppState>>,
    Json(envelope): Json<RequestEnvelope>,
) -> Json<ResponseEnvelope> {
    match tokio::time::timeout(state.request_timeout, state.skill.handle(&envelope)).await {
        Ok(response) => Json(response),
        Err(_) => {
            warn!(
                timeout_secs = state.request_timeout.as_secs(),
                request_type = envelope.request.type_name(),
                "Skill request timed out"
            );
            let locale = envelope.request.locale().unwrap_or(DEFAULT_LOCALE);
            Json(state.skill.apology(locale).into_envelope())
        }
    }
}

/// A panic in a handler still answers with the spoken apology
fn panic_response(_panic: Box<dyn Any + Send + 'static>) -> Response {
    error!("Panic while handling request");
    let apology = I18n::new().get(DEFAULT_LOCALE, "skill-apology", None);
    Json(SpeechResponse::ask(apology.clone(), apology).into_envelope()).into_response()
}

// === Health ===

async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    uptime_seconds: u64,
}
