//! Influent sample endpoints
//!
//! - `GET /influent`: one sample
//! - `GET /influent/batch?n=`: `n` samples, `n` clamped into `1..=100`
//!
//! `n` is taken as raw text so integers too large for `i64` still clamp
//! instead of failing deserialization.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
    routing::get,
    Router,
};
use influent_core::{BatchSize, InfluentBatch, InfluentSample};
use serde::Deserialize;

use super::AppState;
use crate::error::{ApiError, ApiResult};

/// Query parameters for the batch endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchQuery {
    /// Requested number of samples
    pub n: Option<String>,
}

impl BatchQuery {
    /// Effective batch size after defaulting and clamping
    pub fn size(&self) -> ApiResult<BatchSize> {
        match self.n.as_deref() {
            None => Ok(BatchSize::default()),
            Some(raw) => raw
                .parse::<BatchSize>()
                .map_err(|e| ApiError::InvalidQuery(e.to_string())),
        }
    }
}

/// Build the influent routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/influent", get(single_handler))
        .route("/influent/batch", get(batch_handler))
}

/// GET /influent - One random influent profile
#[utoipa::path(
    get,
    path = "/influent",
    tag = "influent",
    responses(
        (status = 200, description = "One influent sample", body = InfluentSample),
        (status = 500, description = "Random source unavailable", body = crate::error::ErrorResponse)
    )
)]
pub async fn single_handler(State(state): State<AppState>) -> ApiResult<Json<InfluentSample>> {
    metrics::counter!("influent_requests_total", "route" => "/influent").increment(1);

    let sampler = state.sampler;
    let sample = state.source.with_rng(|rng| sampler.sample(rng))?;

    metrics::counter!("influent_samples_generated_total").increment(1);
    tracing::debug!(samples = 1, "Generated influent sample");

    Ok(Json(sample))
}

/// GET /influent/batch - A batch of random influent profiles
#[utoipa::path(
    get,
    path = "/influent/batch",
    tag = "influent",
    params(
        ("n" = Option<i64>, Query, description = "Number of samples; clamped to 1..=100, default 5")
    ),
    responses(
        (status = 200, description = "Batch of influent samples", body = InfluentBatch),
        (status = 400, description = "`n` is not an integer", body = crate::error::ErrorResponse),
        (status = 500, description = "Random source unavailable", body = crate::error::ErrorResponse)
    )
)]
pub async fn batch_handler(
    State(state): State<AppState>,
    query: Result<Query<BatchQuery>, QueryRejection>,
) -> ApiResult<Json<InfluentBatch>> {
    metrics::counter!("influent_requests_total", "route" => "/influent/batch").increment(1);

    let Query(query) = query.map_err(|rejection| ApiError::InvalidQuery(rejection.body_text()))?;
    let size = query.size()?;
    if let Some(requested) = query.n.as_deref() {
        if requested != size.to_string() {
            tracing::debug!(requested, clamped = %size, "Batch size normalized");
        }
    }

    let sampler = state.sampler;
    let batch = state
        .source
        .with_rng(|rng| sampler.sample_batch(rng, size))?;

    metrics::counter!("influent_samples_generated_total").increment(batch.count as u64);
    tracing::debug!(samples = batch.count, "Generated influent batch");

    Ok(Json(batch))
}
