/// OpenAPI documentation generation.
pub mod documentation;
/// Catalog CRUD operations over the persistence gateway.
pub mod game_service;
/// Health check service.
pub mod health_service;
