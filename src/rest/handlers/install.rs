//! Simulated install handler.

use axum::{
    Json,
    extract::{Query, rejection::QueryRejection},
};

use crate::rest::types::{InstallQuery, InstallResponse, QueryParams};

/// GET /install - Simulate installing an extension.
///
/// Nothing is installed and the catalogue (install counters included) is
/// left untouched; the attempt is only logged. The first non-empty `id`
/// wins; a missing or blank one is reported as `"unknown"`.
pub async fn install(params: Result<Query<QueryParams>, QueryRejection>) -> Json<InstallResponse> {
    let params = params.map(|Query(p)| p).unwrap_or_default();
    let id = InstallQuery::from(&params).id_or_unknown();

    tracing::info!(target: "extcat::install", id = %id, "Simulated install");

    Json(InstallResponse::ok(id))
}
