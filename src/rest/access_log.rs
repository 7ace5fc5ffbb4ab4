//! Per-request access logging middleware.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};

/// Logs the client address, request line and response status.
///
/// The client address is only known when the router is served with
/// `into_make_service_with_connect_info`; otherwise `-` is logged.
pub async fn access_log(request: Request, next: Next) -> Response {
    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map_or_else(|| "-".to_string(), |ConnectInfo(addr)| addr.to_string());
    let method = request.method().clone();
    let uri = request.uri().clone();
    let version = request.version();

    let response = next.run(request).await;

    tracing::info!(
        target: "extcat::access",
        client = %client,
        "\"{} {} {:?}\" {}",
        method,
        uri,
        version,
        response.status().as_u16()
    );

    response
}
