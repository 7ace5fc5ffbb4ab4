//! REST API route definitions.

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, header},
    middleware,
    routing::get,
};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use super::{access_log::access_log, handlers, state::ApiState};

/// Creates the REST API router with all routes.
///
/// Every response asks the client to close the connection.
pub fn create_router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route(
            "/extensions",
            get(handlers::extensions::search).fallback(handlers::not_implemented),
        )
        .route(
            "/install",
            get(handlers::install::install).fallback(handlers::not_implemented),
        )
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(middleware::from_fn(access_log))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            header::CONNECTION,
            HeaderValue::from_static("close"),
        ))
}
