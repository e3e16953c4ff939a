//! Health check handler.

use axum::Json;
use axum::extract::State;
use tracing::warn;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let (status, database) = match state.database.health_check().await {
        Ok(true) => ("ok", "connected"),
        Ok(false) => ("degraded", "unavailable"),
        Err(e) => {
            warn!(error = %e, "Database health check failed");
            ("degraded", "unavailable")
        }
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
        backend: state.database.backend_name().to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}
