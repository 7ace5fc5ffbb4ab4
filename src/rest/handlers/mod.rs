//! REST API request handlers.

pub mod extensions;
pub mod install;

use axum::{
    Json,
    http::{Method, StatusCode, Uri},
};

use super::types::ApiError;

/// Fallback for paths with no route.
pub async fn not_found(uri: Uri) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError::with_code(
            format!("Not Found: {}", uri.path()),
            "not_found",
        )),
    )
}

/// Fallback for unsupported methods on a known path.
pub async fn not_implemented(method: Method, uri: Uri) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::NOT_IMPLEMENTED,
        Json(ApiError::with_code(
            format!("{} {} is not implemented", method, uri.path()),
            "not_implemented",
        )),
    )
}
