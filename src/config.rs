//! Application-level configuration resolved from environment variables.

use std::env;

/// Default SQLite database location when `DATABASE_URL` is unset.
const DEFAULT_DATABASE_URL: &str = "sqlite:games.db";
/// Default TCP port when neither `PORT` nor `SERVER_PORT` is set.
const DEFAULT_PORT: u16 = 8080;

/// Immutable runtime configuration shared across the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port the HTTP server binds to.
    pub port: u16,
    /// Connection URL for the SQLite storage backend.
    pub database_url: String,
}

impl AppConfig {
    /// Resolve the configuration from the process environment.
    ///
    /// `PORT` takes precedence over `SERVER_PORT`; unparsable values fall
    /// back to the default rather than failing startup.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .or_else(|_| env::var("SERVER_PORT"))
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());

        Self { port, database_url }
    }
}
