//! Shared state for the REST API server.

use crate::catalogue::Catalogue;

/// Shared, read-only state handed to every request handler.
#[derive(Debug, Clone)]
pub struct ApiState {
    /// The catalogue being served.
    pub catalogue: Catalogue,
}

impl ApiState {
    /// Creates a new API state.
    #[must_use]
    pub fn new(catalogue: Catalogue) -> Self {
        Self { catalogue }
    }
}
