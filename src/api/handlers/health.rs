//! Handlers for the greeting and health check endpoints.

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns a fixed greeting.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> Json<&'static str> {
    Json("Hello from my app")
}

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Store readable
/// - **503 Service Unavailable**: Store check failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "uptime_seconds": 42,
///   "checks": {
///     "store": { "status": "ok", "message": "2 publishers, 4 domains" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_store(&state).await;
    let healthy = store_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: (Utc::now() - state.started_at).num_seconds(),
        checks: HealthChecks { store: store_check },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Reads the store and reports publisher and domain counts.
///
/// The in-memory store never fails a read, so this always reports `ok`
/// today. The error arm covers `PublisherRepository` implementations that can.
async fn check_store(state: &AppState) -> CheckStatus {
    match state.publisher_service.list_publishers().await {
        Ok(publishers) => {
            let domains: usize = publishers.iter().map(|p| p.domains.len()).sum();
            CheckStatus {
                status: "ok".to_string(),
                message: Some(format!(
                    "{} publishers, {} domains",
                    publishers.len(),
                    domains
                )),
            }
        }
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Store error: {}", e)),
        },
    }
}
