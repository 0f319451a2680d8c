//! Route modules for the influent server
//!
//! This module contains endpoint group-specific routers:
//! - health: Health check endpoint
//! - influent: Single and batch sample endpoints
//!
//! Every route is registered with `get`, which also answers HEAD with the
//! same status and an empty body.

pub mod health;
pub mod influent;

use axum::{body::Body, http::Request, response::Json, routing::get, Router};
use influent_core::Sampler;
use std::sync::Arc;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use uuid::Uuid;

use crate::config::ServerConfig;
use crate::openapi::ApiDoc;
use crate::source::SampleSource;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Sampler over the compiled-in range table
    pub sampler: Sampler,
    /// Random source handed to the sampler
    pub source: SampleSource,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Arc<ServerConfig>) -> Self {
        let source = SampleSource::from_seed(config.seed);
        Self {
            config,
            sampler: Sampler::standard(),
            source,
        }
    }
}

/// Assigns a UUID v4 to requests arriving without an `x-request-id`
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestUuid;

impl MakeRequestId for RequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

/// Build the main application router by merging all route modules
pub fn build_router(config: Arc<ServerConfig>) -> Router {
    build_router_with_state(AppState::new(config))
}

/// Build the router over an existing state
pub fn build_router_with_state(state: AppState) -> Router {
    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");
        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    });

    Router::new()
        .merge(health::routes())
        .merge(influent::routes())
        .route("/openapi.json", get(openapi_handler))
        .with_state(state)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(trace)
        .layer(SetRequestIdLayer::x_request_id(RequestUuid))
}

/// GET /openapi.json - OpenAPI document
async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
