//! Request and response types for the REST API.

use serde::{Deserialize, Serialize};

/// Literal id reported by `/install` when none is given.
pub const UNKNOWN_ID: &str = "unknown";

// ============================================================================
// Query Types
// ============================================================================

/// Raw query string pairs, in the order they were sent.
///
/// Repeated keys are kept, so `?q=a&q=b` still parses.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Returns the first non-empty value for `key`.
    ///
    /// Blank values are skipped, so `?id=` reads the same as no `id`.
    #[must_use]
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, v)| k == key && !v.is_empty())
            .map(|(_, v)| v.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

// ============================================================================
// Catalogue Types
// ============================================================================

/// Query params for GET /extensions
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub q: Option<String>,
}

impl From<&QueryParams> for SearchQuery {
    fn from(params: &QueryParams) -> Self {
        Self {
            q: params.first("q").map(str::to_string),
        }
    }
}

impl SearchQuery {
    /// Returns the keyword, or an empty string when absent.
    #[must_use]
    pub fn keyword(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }
}

/// Query params for GET /install
#[derive(Debug, Clone, Default)]
pub struct InstallQuery {
    pub id: Option<String>,
}

impl From<&QueryParams> for InstallQuery {
    fn from(params: &QueryParams) -> Self {
        Self {
            id: params.first("id").map(str::to_string),
        }
    }
}

impl InstallQuery {
    /// Returns the requested id, or `"unknown"` when absent or empty.
    #[must_use]
    pub fn id_or_unknown(self) -> String {
        self.id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| UNKNOWN_ID.to_string())
    }
}

/// Response for GET /install
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallResponse {
    pub status: String,
    pub id: String,
}

impl InstallResponse {
    #[must_use]
    pub fn ok(id: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            id: id.into(),
        }
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// API error response
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: Option<String>,
}

impl ApiError {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: None,
        }
    }

    #[must_use]
    pub fn with_code(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: Some(code.into()),
        }
    }
}
