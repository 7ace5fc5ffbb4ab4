//! Catalogue search handler.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::catalogue::ExtensionRecord;
use crate::rest::{state::ApiState, types::{QueryParams, SearchQuery}};

/// GET /extensions - Search the catalogue.
///
/// The first non-empty `q` wins. A query string that fails to parse is
/// treated as empty.
pub async fn search(
    State(state): State<Arc<ApiState>>,
    params: Result<Query<QueryParams>, QueryRejection>,
) -> Json<Vec<ExtensionRecord>> {
    let params = params.map(|Query(p)| p).unwrap_or_default();
    let query = SearchQuery::from(&params);

    let results: Vec<ExtensionRecord> = state
        .catalogue
        .search(query.keyword())
        .into_iter()
        .cloned()
        .collect();

    tracing::debug!(keyword = query.keyword(), matches = results.len(), "Catalogue search");

    Json(results)
}
