/// HTTP host routes
pub mod gateway;
pub mod health;
pub mod invoke;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the HTTP host router
///
/// `/health` and `/invoke` are reserved; every other path and method is
/// handed to the dispatcher as a proxy event.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/invoke", post(invoke::invoke))
        .fallback(gateway::gateway)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
