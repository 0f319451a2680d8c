//! OpenAPI documentation for the Influent Generator API.
//!
//! Served as JSON at `/openapi.json`.

use influent_core::{InfluentBatch, InfluentSample};
use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::routes::health::HealthResponse;

/// OpenAPI document covering every public route.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Influent Generator API",
        version = "1.0.0",
        description = "Generates realistic influent water quality parameters for use in ML-based wastewater treatment simulations"
    ),
    tags(
        (name = "health", description = "Service liveness"),
        (name = "influent", description = "Synthetic influent samples")
    ),
    paths(
        crate::routes::health::root_handler,
        crate::routes::influent::single_handler,
        crate::routes::influent::batch_handler,
    ),
    components(
        schemas(
            InfluentSample,
            InfluentBatch,
            HealthResponse,
            ErrorResponse,
        )
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_info() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "Influent Generator API");
        assert_eq!(doc.info.version, "1.0.0");
    }

    #[test]
    fn test_openapi_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/"));
        assert!(paths.iter().any(|p| p.as_str() == "/influent"));
        assert!(paths.iter().any(|p| p.as_str() == "/influent/batch"));
    }

    #[test]
    fn test_openapi_schema_uses_wire_names() {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let props = &json["components"]["schemas"]["InfluentSample"]["properties"];
        assert!(props.get("temp_C").is_some());
        assert!(props.get("pH").is_some());
        assert!(props.get("turbidity_in_NTU").is_some());
    }
}
