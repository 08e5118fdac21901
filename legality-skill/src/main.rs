use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

mod api;
mod config;
mod error;
mod i18n;
mod legality;
mod scryfall;
mod skill;

use crate::i18n::I18n;
use crate::scryfall::ScryfallClient;
use crate::skill::Skill;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    init_logging();

    info!(
        "Starting card legality skill v{}",
        env!("CARGO_PKG_VERSION")
    );

    let static_config = config::load_static_config()?;

    info!(
        host = %static_config.server.host,
        port = static_config.server.port,
        scryfall = %static_config.scryfall.base_url,
        "Configuration loaded"
    );

    let lookup = Arc::new(ScryfallClient::from_config(&static_config.scryfall)?);
    let i18n = Arc::new(I18n::new());
    let skill = Arc::new(Skill::new(lookup, i18n));

    let app = api::router(skill, &static_config);

    // Start the server
    let addr = format!(
        "{}:{}",
        static_config.server.host, static_config.server.port
    );
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let format = fmt::format()
        .with_target(true)
        .with_thread_ids(true)
        .compact();

    // Use RUST_LOG if set, otherwise default to info level for our crate
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("legality_skill=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().event_format(format))
        .with(filter)
        .init();
}
