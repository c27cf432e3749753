//! HTTP adapters - REST API implementations.

pub mod analysis;

pub use analysis::{analysis_router, AnalysisAppState};

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Builds the full application router with CORS and tracing layers.
///
/// No request deadline is applied: a mapping runs to completion once started.
/// An empty origin list allows any origin.
pub fn app_router(state: AnalysisAppState, server: &ServerConfig) -> Router {
    analysis_router()
        .with_state(state)
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(Any)
        .allow_headers(Any)
}
