use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    routing::get,
};
use validator::Validate;

use crate::{
    dao::models::GameId,
    dto::game::{GamePayload, GameResponse},
    error::AppError,
    services::game_service,
    state::SharedState,
};

/// Routes handling game catalog CRUD operations.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/game", get(list_games).post(create_game))
        .route(
            "/api/game/{id}",
            get(get_game).put(update_game).delete(delete_game),
        )
}

/// List every game in the catalog.
#[utoipa::path(
    get,
    path = "/api/game",
    tag = "game",
    responses(
        (status = 200, description = "All games in storage order", body = [GameResponse]),
        (status = 500, description = "Storage fault")
    )
)]
pub async fn list_games(
    State(state): State<SharedState>,
) -> Result<Json<Vec<GameResponse>>, AppError> {
    Ok(Json(game_service::list_games(&state).await?))
}

/// Look up a single game by its identifier.
#[utoipa::path(
    get,
    path = "/api/game/{id}",
    tag = "game",
    params(("id" = i64, Path, description = "Identifier of the game")),
    responses(
        (status = 200, description = "Matching game", body = GameResponse),
        (status = 404, description = "No game with this id"),
        (status = 500, description = "Storage fault")
    )
)]
pub async fn get_game(
    State(state): State<SharedState>,
    Path(id): Path<GameId>,
) -> Result<Json<GameResponse>, AppError> {
    Ok(Json(game_service::get_game(&state, id).await?))
}

/// Create a new game. The store assigns the identifier and the response
/// carries a `Location` header pointing at the created record.
#[utoipa::path(
    post,
    path = "/api/game",
    tag = "game",
    request_body = GamePayload,
    responses(
        (status = 201, description = "Game created", body = GameResponse),
        (status = 422, description = "Payload failed field validation"),
        (status = 500, description = "Storage fault")
    )
)]
pub async fn create_game(
    State(state): State<SharedState>,
    Json(payload): Json<GamePayload>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<GameResponse>), AppError> {
    payload.validate()?;

    let created = game_service::create_game(&state, payload).await?;
    let location = format!("/api/game/{}", created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// Replace every field of an existing game with the supplied payload.
#[utoipa::path(
    put,
    path = "/api/game/{id}",
    tag = "game",
    params(("id" = i64, Path, description = "Identifier of the game to update")),
    request_body = GamePayload,
    responses(
        (status = 204, description = "Game updated"),
        (status = 404, description = "No game with this id"),
        (status = 422, description = "Payload failed field validation"),
        (status = 500, description = "Storage fault")
    )
)]
pub async fn update_game(
    State(state): State<SharedState>,
    Path(id): Path<GameId>,
    Json(payload): Json<GamePayload>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;

    game_service::update_game(&state, id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a game by its identifier.
#[utoipa::path(
    delete,
    path = "/api/game/{id}",
    tag = "game",
    params(("id" = i64, Path, description = "Identifier of the game to delete")),
    responses(
        (status = 204, description = "Game deleted"),
        (status = 404, description = "No game with this id"),
        (status = 500, description = "Storage fault")
    )
)]
pub async fn delete_game(
    State(state): State<SharedState>,
    Path(id): Path<GameId>,
) -> Result<StatusCode, AppError> {
    game_service::delete_game(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        Router,
        body::Body,
        http::{Method, Request, StatusCode, header},
    };
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::{
        dao::{fixtures::sample_catalog, game_store::GameStore, game_store::memory::MemoryGameStore},
        state::AppState,
    };

    fn test_app() -> Router {
        super::router().with_state(AppState::new(Arc::new(MemoryGameStore::new())))
    }

    async fn seeded_app() -> Router {
        let store = Arc::new(MemoryGameStore::new());
        for draft in sample_catalog() {
            store.insert_game(draft).await.unwrap();
        }
        super::router().with_state(AppState::new(store))
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn delete(uri: &str) -> Request<Body> {
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn sample_payload() -> Value {
        json!({
            "name": "Celeste",
            "description": "A precision platformer about climbing a mountain.",
            "engine": "Custom",
            "developer": "Maddy Makes Games",
            "genres": ["Platformer"],
            "coverImageUrl": "https://example.com/celeste.png",
            "releaseDate": "2018-01-25"
        })
    }

    #[tokio::test]
    async fn list_on_empty_store_returns_empty_array() {
        let (status, body) = send(test_app(), get("/api/game")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn seeded_catalog_lists_three_games() {
        let (status, body) = send(seeded_app().await, get("/api/game")).await;

        assert_eq!(status, StatusCode::OK);
        let games = body.as_array().unwrap();
        assert_eq!(games.len(), 3);

        for name in [
            "The Legend of Zelda: Breath of the Wild",
            "God of War",
            "Minecraft",
        ] {
            assert!(
                games.iter().any(|game| game["name"] == name),
                "missing {name}"
            );
        }
    }

    #[tokio::test]
    async fn post_then_get_round_trips() {
        let app = test_app();
        let payload = sample_payload();

        let response = app
            .clone()
            .oneshot(json_request(Method::POST, "/api/game", &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let location = response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_owned();
        assert_eq!(location, "/api/game/1");

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let created: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(created["id"], 1);

        let (status, fetched) = send(app, get(&location)).await;
        assert_eq!(status, StatusCode::OK);
        for field in [
            "name",
            "description",
            "engine",
            "developer",
            "genres",
            "coverImageUrl",
            "releaseDate",
        ] {
            assert_eq!(fetched[field], payload[field], "field {field} diverged");
        }
    }

    #[tokio::test]
    async fn post_invalid_payload_is_unprocessable() {
        let mut payload = sample_payload();
        payload["genres"] = json!(["Action", "Adventure", "Sandbox", "Rpg", "Strategy"]);

        let (status, body) = send(
            test_app(),
            json_request(Method::POST, "/api/game", &payload),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["details"]["genres"].is_array());
    }

    #[tokio::test]
    async fn get_missing_id_is_not_found() {
        let (status, body) = send(test_app(), get("/api/game/99")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["message"].as_str().unwrap().contains("99"));
    }

    #[tokio::test]
    async fn put_replaces_the_stored_record() {
        let app = seeded_app().await;
        let payload = sample_payload();

        let (status, body) =
            send(app.clone(), json_request(Method::PUT, "/api/game/2", &payload)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);

        let (status, fetched) = send(app, get("/api/game/2")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["id"], 2);
        assert_eq!(fetched["name"], payload["name"]);
        assert_eq!(fetched["releaseDate"], payload["releaseDate"]);
    }

    #[tokio::test]
    async fn put_missing_id_is_not_found_and_creates_nothing() {
        let app = test_app();

        let (status, _body) = send(
            app.clone(),
            json_request(Method::PUT, "/api/game/41", &sample_payload()),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_status, listed) = send(app, get("/api/game")).await;
        assert_eq!(listed, json!([]));
    }

    #[tokio::test]
    async fn put_invalid_payload_is_unprocessable() {
        let mut payload = sample_payload();
        payload["name"] = json!("x".repeat(65));

        let (status, _body) = send(
            seeded_app().await,
            json_request(Method::PUT, "/api/game/1", &payload),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let app = seeded_app().await;

        let (status, _body) = send(app.clone(), delete("/api/game/3")).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _body) = send(app.clone(), get("/api/game/3")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _body) = send(app, delete("/api/game/3")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
