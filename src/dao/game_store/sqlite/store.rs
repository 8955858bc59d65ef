use futures::future::BoxFuture;
use sqlx::{
    Row,
    sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow},
};

use super::{
    config::SqliteConfig,
    error::{SqliteDaoError, SqliteResult},
};
use crate::dao::{
    game_store::GameStore,
    models::{GameDraft, GameEntity, GameId, Genre},
    storage::StorageResult,
};

const GAMES_TABLE: &str = "games";

/// [`GameStore`] backend persisting records in a SQLite database.
#[derive(Clone)]
pub struct SqliteGameStore {
    pool: SqlitePool,
}

impl SqliteGameStore {
    /// Open (or create) the database and ensure the games table exists.
    pub async fn connect(config: SqliteConfig) -> SqliteResult<Self> {
        let pool = SqlitePoolOptions::new()
            .connect_with(config.options)
            .await
            .map_err(|source| SqliteDaoError::OpenDatabase { source })?;

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Create the games table when missing. Id uniqueness and assignment are
    /// delegated to the autoincrement primary key.
    async fn ensure_schema(&self) -> SqliteResult<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS games (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                engine TEXT,
                developer TEXT NOT NULL,
                genres TEXT NOT NULL,
                cover_image_url TEXT,
                release_date TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(|source| SqliteDaoError::EnsureSchema {
            table: GAMES_TABLE,
            source,
        })?;

        Ok(())
    }

    async fn list_games(&self) -> SqliteResult<Vec<GameEntity>> {
        let rows = sqlx::query(
            "SELECT id, name, description, engine, developer, genres, cover_image_url, release_date
             FROM games ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|source| SqliteDaoError::ListGames { source })?;

        rows.into_iter().map(decode_row).collect()
    }

    async fn find_game(&self, id: GameId) -> SqliteResult<Option<GameEntity>> {
        let row = sqlx::query(
            "SELECT id, name, description, engine, developer, genres, cover_image_url, release_date
             FROM games WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|source| SqliteDaoError::LoadGame { id, source })?;

        row.map(decode_row).transpose()
    }

    async fn insert_game(&self, draft: GameDraft) -> SqliteResult<GameEntity> {
        let genres = encode_genres(&draft.genres)?;

        let result = sqlx::query(
            "INSERT INTO games (name, description, engine, developer, genres, cover_image_url, release_date)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.engine.as_deref())
        .bind(&draft.developer)
        .bind(genres)
        .bind(draft.cover_image_url.as_deref())
        .bind(draft.release_date)
        .execute(&self.pool)
        .await
        .map_err(|source| SqliteDaoError::InsertGame { source })?;

        Ok((result.last_insert_rowid(), draft).into())
    }

    async fn update_game(&self, id: GameId, draft: GameDraft) -> SqliteResult<bool> {
        let genres = encode_genres(&draft.genres)?;

        let result = sqlx::query(
            "UPDATE games
             SET name = ?, description = ?, engine = ?, developer = ?, genres = ?,
                 cover_image_url = ?, release_date = ?
             WHERE id = ?",
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.engine.as_deref())
        .bind(&draft.developer)
        .bind(genres)
        .bind(draft.cover_image_url.as_deref())
        .bind(draft.release_date)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|source| SqliteDaoError::UpdateGame { id, source })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_game(&self, id: GameId) -> SqliteResult<bool> {
        let result = sqlx::query("DELETE FROM games WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|source| SqliteDaoError::DeleteGame { id, source })?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> SqliteResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|source| SqliteDaoError::HealthPing { source })?;
        Ok(())
    }
}

/// Serialize the genre list into the JSON column representation.
fn encode_genres(genres: &[Genre]) -> SqliteResult<String> {
    serde_json::to_string(genres).map_err(|source| SqliteDaoError::EncodeGenres { source })
}

/// Rebuild a [`GameEntity`] from a selected row.
fn decode_row(row: SqliteRow) -> SqliteResult<GameEntity> {
    let id: GameId = row.get("id");
    let genres_json: String = row.get("genres");
    let genres = serde_json::from_str(&genres_json)
        .map_err(|source| SqliteDaoError::DecodeGenres { id, source })?;

    Ok(GameEntity {
        id,
        name: row.get("name"),
        description: row.get("description"),
        engine: row.get("engine"),
        developer: row.get("developer"),
        genres,
        cover_image_url: row.get("cover_image_url"),
        release_date: row.get("release_date"),
    })
}

impl GameStore for SqliteGameStore {
    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_games().await.map_err(Into::into) })
    }

    fn find_game(&self, id: GameId) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.find_game(id).await.map_err(Into::into) })
    }

    fn insert_game(&self, draft: GameDraft) -> BoxFuture<'static, StorageResult<GameEntity>> {
        let store = self.clone();
        Box::pin(async move { store.insert_game(draft).await.map_err(Into::into) })
    }

    fn update_game(&self, id: GameId, draft: GameDraft) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.update_game(id, draft).await.map_err(Into::into) })
    }

    fn delete_game(&self, id: GameId) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.delete_game(id).await.map_err(Into::into) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.ping().await.map_err(Into::into) })
    }
}
