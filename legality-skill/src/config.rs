//! Service configuration.
//!
//! Settings come from an optional `config` file layered under
//! `LEGALITY__*` environment variables. Everything has a default, so the
//! skill starts with no configuration at all.

mod loader;
mod static_config;

pub use loader::load_static_config;
pub use static_config::{ScryfallConfig, StaticConfig};
