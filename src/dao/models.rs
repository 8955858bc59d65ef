use time::Date;

/// Identifier assigned by the storage backend when a game is inserted.
pub type GameId = i64;

/// Enumerated classification tag attached to a game record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, utoipa::ToSchema,
)]
pub enum Genre {
    Action,
    Adventure,
    Sandbox,
    Rpg,
    Strategy,
    Simulation,
    Puzzle,
    Platformer,
    Racing,
    Shooter,
    Sports,
}

/// Catalog metadata for a game as supplied by clients, before the storage
/// backend has assigned an identifier.
///
/// Updates reuse the same shape: every field of the stored row is replaced
/// wholesale, there is no field-level merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDraft {
    /// Display title of the game.
    pub name: String,
    /// Short catalog blurb.
    pub description: String,
    /// Engine the game was built on, when known.
    pub engine: Option<String>,
    /// Studio that developed the game.
    pub developer: String,
    /// Ordered genre tags, at most four.
    pub genres: Vec<Genre>,
    /// Cover artwork URL, when the catalog has one.
    pub cover_image_url: Option<String>,
    /// Calendar release date, no time component.
    pub release_date: Date,
}

/// Game record persisted by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEntity {
    /// Primary key, immutable once assigned by the store.
    pub id: GameId,
    /// Display title of the game.
    pub name: String,
    /// Short catalog blurb.
    pub description: String,
    /// Engine the game was built on, when known.
    pub engine: Option<String>,
    /// Studio that developed the game.
    pub developer: String,
    /// Ordered genre tags, at most four.
    pub genres: Vec<Genre>,
    /// Cover artwork URL, when the catalog has one.
    pub cover_image_url: Option<String>,
    /// Calendar release date, no time component.
    pub release_date: Date,
}

impl From<(GameId, GameDraft)> for GameEntity {
    fn from((id, draft): (GameId, GameDraft)) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            engine: draft.engine,
            developer: draft.developer,
            genres: draft.genres,
            cover_image_url: draft.cover_image_url,
            release_date: draft.release_date,
        }
    }
}

impl From<GameEntity> for GameDraft {
    fn from(entity: GameEntity) -> Self {
        Self {
            name: entity.name,
            description: entity.description,
            engine: entity.engine,
            developer: entity.developer,
            genres: entity.genres,
            cover_image_url: entity.cover_image_url,
            release_date: entity.release_date,
        }
    }
}
