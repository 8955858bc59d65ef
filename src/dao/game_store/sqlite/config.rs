use std::str::FromStr;

use sqlx::sqlite::SqliteConnectOptions;

use super::error::{SqliteDaoError, SqliteResult};

/// Connection settings for the SQLite storage backend.
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    pub(super) options: SqliteConnectOptions,
}

impl SqliteConfig {
    /// Parse a `sqlite:` connection URL. The database file is created on
    /// first use when it does not exist yet.
    pub fn from_url(url: &str) -> SqliteResult<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|source| SqliteDaoError::InvalidUrl {
                url: url.to_owned(),
                source,
            })?
            .create_if_missing(true);

        Ok(Self { options })
    }
}
