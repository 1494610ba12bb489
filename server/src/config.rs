//! Environment-driven configuration.
//!
//! # Design
//! Every variable is optional with a sensible default, so `cargo run`
//! works out of the box. A `.env` file is honored when present. The only
//! failure mode is a value that is set but unparseable.

use std::env;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Startup configuration for the server process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: String,
    /// SQLite connection URL; the file is created if missing.
    pub database_url: String,
    /// Directory served as static assets.
    pub public_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from the environment (and `.env` if present).
    ///
    /// Variables: `APP_HOST` (default `127.0.0.1`), `PORT` (default
    /// `3000`), `DATABASE_URL` (default `sqlite:todos.db`), `PUBLIC_DIR`
    /// (default `public`).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port: u16 = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    key: "PORT".to_string(),
                    message: e.to_string(),
                }
            })?,
            Err(_) => 3000,
        };
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:todos.db".to_string());
        let public_dir = env::var("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("public"));

        Ok(Self {
            bind_addr: format!("{host}:{port}"),
            database_url,
            public_dir,
        })
    }
}
