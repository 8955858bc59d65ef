use thiserror::Error;

use crate::dao::models::GameId;

/// Result alias for SQLite backend operations.
pub type SqliteResult<T> = std::result::Result<T, SqliteDaoError>;

/// Errors raised by the SQLite storage backend.
#[derive(Debug, Error)]
pub enum SqliteDaoError {
    #[error("failed to parse SQLite connection URL `{url}`")]
    InvalidUrl {
        url: String,
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to open SQLite database")]
    OpenDatabase {
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to ensure schema for table `{table}`")]
    EnsureSchema {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },
    #[error("SQLite liveness probe failed")]
    HealthPing {
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to insert game")]
    InsertGame {
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to update game `{id}`")]
    UpdateGame {
        id: GameId,
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to load game `{id}`")]
    LoadGame {
        id: GameId,
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to delete game `{id}`")]
    DeleteGame {
        id: GameId,
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to list games")]
    ListGames {
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to encode genres column")]
    EncodeGenres {
        #[source]
        source: serde_json::Error,
    },
    #[error("stored genres column of game `{id}` is not valid JSON")]
    DecodeGenres {
        id: GameId,
        #[source]
        source: serde_json::Error,
    },
}
