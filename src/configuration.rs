use std::path::PathBuf;

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::sqlite::SqliteConnectOptions;

/// Runtime settings of the server and the CLI.
///
/// Values come from built-in defaults, then an optional `configuration.{yaml,toml,json}`
/// file in the working directory, then `TRIVIA__*` environment variables
/// (`TRIVIA__DATABASE__PATH=/var/lib/trivia.db`). A `.env` file is loaded first.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub path: PathBuf,
    pub create_if_missing: bool,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_connections: u32,
}

impl DatabaseSettings {
    pub fn connect_options(&self) -> SqliteConnectOptions {
        SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(self.create_if_missing)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    /// `EnvFilter` directives, overridden by the `LOG_LEVEL` environment variable.
    pub filter: String,
    /// Also log span enter/exit events.
    pub span_events: bool,
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("application.host", "0.0.0.0")?
        .set_default("application.port", 8080_i64)?
        .set_default("database.path", "trivia.db")?
        .set_default("database.create_if_missing", true)?
        .set_default("database.max_connections", 5_i64)?
        .set_default("log.filter", "info,tower_http=debug")?
        .set_default("log.span_events", false)
}

pub fn get_configuration() -> Result<Settings, ConfigError> {
    dotenv::dotenv().ok();
    defaults()?
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(
            config::Environment::with_prefix("TRIVIA")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
}
