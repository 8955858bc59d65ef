pub mod memory;
#[cfg(feature = "sqlite-store")]
pub mod sqlite;

use futures::future::BoxFuture;

use crate::dao::models::{GameDraft, GameEntity, GameId};
use crate::dao::storage::StorageResult;

/// Abstraction over the persistence layer for game records.
///
/// Handlers and services only ever see this trait; the backend behind it is
/// chosen at startup. Absent records are `Ok(None)` / `Ok(false)` outcomes,
/// never errors.
pub trait GameStore: Send + Sync {
    /// Return every game in id (insertion) order.
    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>>;
    /// Fetch a single game by id.
    fn find_game(&self, id: GameId) -> BoxFuture<'static, StorageResult<Option<GameEntity>>>;
    /// Persist a new game; the store assigns the id and returns the stored row.
    fn insert_game(&self, draft: GameDraft) -> BoxFuture<'static, StorageResult<GameEntity>>;
    /// Replace every mutable field of an existing game. Returns `false` when
    /// the id matched no row (no row is created in that case).
    fn update_game(
        &self,
        id: GameId,
        draft: GameDraft,
    ) -> BoxFuture<'static, StorageResult<bool>>;
    /// Delete a game by id. Returns `false` when the id matched no row.
    fn delete_game(&self, id: GameId) -> BoxFuture<'static, StorageResult<bool>>;
    /// Probe backend liveness.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
}
