//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (dataset has rows)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness probe.
/// An empty dataset renders blank charts, so it is reported as not ready.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if state.dataset.row_count() > 0 {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
///
/// Full health status with dataset details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let rows = state.dataset.row_count();
    let status = if rows > 0 { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        rows,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiConfig;
    use crate::dataset::{fixtures, Dataset};

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_readiness_empty_dataset() {
        let dataset = Dataset::from_reader("Fund\n".as_bytes()).unwrap();
        let state = Arc::new(AppState::new(Arc::new(dataset), ApiConfig::default()));

        assert_eq!(readiness(State(state)).await, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_full_health() {
        let state = Arc::new(AppState::new(
            Arc::new(fixtures::sample()),
            ApiConfig::default(),
        ));

        let Json(health) = full_health(State(state)).await;
        assert_eq!(health.status, "healthy");
        assert_eq!(health.rows, 3);
    }
}
