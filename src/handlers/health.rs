use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::state::AppState;
use crate::store::client::check_health;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseHealth>,
}

/// Database health status
#[derive(Debug, Serialize, Deserialize)]
pub struct DatabaseHealth {
    pub status: String,
}

/// Health check endpoint handler
///
/// Returns 200 OK if the service and its database connection are healthy,
/// 503 Service Unavailable otherwise.
#[instrument(skip(state), fields(service = "/health"))]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let db_healthy = check_health(&state.db).await;

    let (code, status) = if db_healthy {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let response = HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: Some(DatabaseHealth {
            status: if db_healthy { "healthy" } else { "unreachable" }.to_string(),
        }),
    };

    (code, Json(response))
}

/// Liveness probe endpoint
///
/// Simple endpoint that returns 200 OK if the service is running
pub async fn liveness() -> impl IntoResponse {
    StatusCode::OK
}

/// Readiness probe endpoint
///
/// Returns 200 OK once the service can reach its database
#[instrument(skip(state), fields(service = "/health/ready"))]
pub async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    if check_health(&state.db).await {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let response = liveness().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
