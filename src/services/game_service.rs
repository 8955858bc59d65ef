use crate::{
    dao::{game_store::GameStore, models::GameId},
    dto::game::{GamePayload, GameResponse},
    error::ServiceError,
    state::SharedState,
};

/// Return every game in the catalog in storage order.
pub async fn list_games(state: &SharedState) -> Result<Vec<GameResponse>, ServiceError> {
    let games = state.game_store().list_games().await?;
    Ok(games.into_iter().map(Into::into).collect())
}

/// Fetch a single game by its identifier.
pub async fn get_game(state: &SharedState, id: GameId) -> Result<GameResponse, ServiceError> {
    let Some(game) = state.game_store().find_game(id).await? else {
        return Err(ServiceError::NotFound(format!(
            "game with id {id} not found"
        )));
    };

    Ok(game.into())
}

/// Persist a new game and return the stored record with its assigned id.
pub async fn create_game(
    state: &SharedState,
    payload: GamePayload,
) -> Result<GameResponse, ServiceError> {
    let created = state.game_store().insert_game(payload.into()).await?;
    Ok(created.into())
}

/// Replace every field of an existing game with the supplied payload.
pub async fn update_game(
    state: &SharedState,
    id: GameId,
    payload: GamePayload,
) -> Result<(), ServiceError> {
    let updated = state.game_store().update_game(id, payload.into()).await?;
    if updated {
        Ok(())
    } else {
        Err(ServiceError::NotFound(format!(
            "game with id {id} not found"
        )))
    }
}

/// Remove a game from the catalog.
pub async fn delete_game(state: &SharedState, id: GameId) -> Result<(), ServiceError> {
    let deleted = state.game_store().delete_game(id).await?;
    if deleted {
        Ok(())
    } else {
        Err(ServiceError::NotFound(format!(
            "game with id {id} not found"
        )))
    }
}
