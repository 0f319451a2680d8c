//! Health check endpoint
//!
//! `GET /` answers infrastructure probes. HEAD is served by the same route
//! with the body stripped.

use axum::{response::Json, routing::get, Router};
use serde::{Deserialize, Serialize};

use super::AppState;

/// Message returned while the service is up
pub const RUNNING_MESSAGE: &str = "Influent Generator API is running.";

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    /// Always "ok" while the process is serving
    pub status: String,
    /// Human-readable status line
    pub message: String,
}

/// Build the health routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(root_handler))
}

/// GET / - Health check endpoint
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
pub async fn root_handler() -> Json<HealthResponse> {
    metrics::counter!("influent_requests_total", "route" => "/").increment(1);

    Json(HealthResponse {
        status: "ok".to_string(),
        message: RUNNING_MESSAGE.to_string(),
    })
}
