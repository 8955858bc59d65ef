use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the games catalog API.
#[openapi(
    paths(
        crate::routes::game::list_games,
        crate::routes::game::get_game,
        crate::routes::game::create_game,
        crate::routes::game::update_game,
        crate::routes::game::delete_game,
        crate::routes::health::healthcheck,
    ),
    components(
        schemas(
            crate::dto::game::GamePayload,
            crate::dto::game::GameResponse,
            crate::dao::models::Genre,
            crate::dto::health::HealthResponse,
        )
    ),
    tags(
        (name = "game", description = "Game catalog lookup and maintenance"),
        (name = "health", description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
