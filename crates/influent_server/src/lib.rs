//! REST API server for synthetic wastewater influent samples
//!
//! This crate exposes the `influent_core` sampler over HTTP:
//! a health check at `/`, a single sample at `/influent`, a batch at
//! `/influent/batch`, and the OpenAPI document at `/openapi.json`.

pub mod config;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod source;

pub use influent_core;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
