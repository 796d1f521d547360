//! Top-level router assembly.

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::comments::comment_routes;
use super::content::content_routes;
use super::state::AppState;
use crate::config::ServerConfig;

/// All API routes with state applied and no middleware.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(comment_routes())
        .merge(content_routes())
        .with_state(state)
}

/// The served application: API routes plus tracing, CORS and request timeout.
pub fn app_router(state: AppState, server: &ServerConfig) -> Router {
    api_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(&server.cors_origins_list()))
            .layer(TimeoutLayer::new(server.request_timeout())),
    )
}

/// `*` allows any origin; an empty list allows none.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(allowed)
}
