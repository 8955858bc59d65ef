//! In-memory storage backend.
//!
//! Substitutes for the SQLite backend in tests and in builds compiled
//! without the `sqlite-store` feature. Ids are assigned from an atomic
//! counter so insertion order and id order coincide, matching the
//! autoincrement behavior of the relational backend.

use std::sync::{
    Arc,
    atomic::{AtomicI64, Ordering},
};

use dashmap::DashMap;
use futures::future::BoxFuture;

use crate::dao::{
    game_store::GameStore,
    models::{GameDraft, GameEntity, GameId},
    storage::StorageResult,
};

/// Process-local [`GameStore`] backed by a concurrent map.
#[derive(Clone, Default)]
pub struct MemoryGameStore {
    inner: Arc<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    games: DashMap<GameId, GameEntity>,
    last_id: AtomicI64,
}

impl MemoryGameStore {
    /// Create an empty store. The first inserted record receives id 1.
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for MemoryGameStore {
    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let inner = self.inner.clone();
        Box::pin(async move {
            let mut games: Vec<GameEntity> =
                inner.games.iter().map(|entry| entry.value().clone()).collect();
            games.sort_by_key(|game| game.id);
            Ok(games)
        })
    }

    fn find_game(&self, id: GameId) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let inner = self.inner.clone();
        Box::pin(async move { Ok(inner.games.get(&id).map(|entry| entry.value().clone())) })
    }

    fn insert_game(&self, draft: GameDraft) -> BoxFuture<'static, StorageResult<GameEntity>> {
        let inner = self.inner.clone();
        Box::pin(async move {
            let id = inner.last_id.fetch_add(1, Ordering::SeqCst) + 1;
            let entity: GameEntity = (id, draft).into();
            inner.games.insert(id, entity.clone());
            Ok(entity)
        })
    }

    fn update_game(&self, id: GameId, draft: GameDraft) -> BoxFuture<'static, StorageResult<bool>> {
        let inner = self.inner.clone();
        Box::pin(async move {
            match inner.games.get_mut(&id) {
                Some(mut slot) => {
                    *slot = (id, draft).into();
                    Ok(true)
                }
                None => Ok(false),
            }
        })
    }

    fn delete_game(&self, id: GameId) -> BoxFuture<'static, StorageResult<bool>> {
        let inner = self.inner.clone();
        Box::pin(async move { Ok(inner.games.remove(&id).is_some()) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async move { Ok(()) })
    }
}
