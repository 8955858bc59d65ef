use tracing::warn;

use crate::{dao::game_store::GameStore, dto::health::HealthResponse, state::SharedState};

/// Probe the storage backend and report the service health.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    if let Err(err) = state.game_store().health_check().await {
        warn!(error = %err, "storage health check failed");
        return HealthResponse::degraded();
    }

    HealthResponse::ok()
}
