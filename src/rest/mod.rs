//! REST API for the extension catalogue.
//!
//! ## Endpoints
//!
//! - `GET /extensions?q=<keyword>` returns the matching records as a JSON
//!   array. A missing or blank `q` returns the whole catalogue.
//! - `GET /install?id=<id>` simulates an install and echoes the id. A
//!   missing `id` is reported as `"unknown"`. The catalogue is not touched.
//!
//! Any other path answers `404`. Other methods on the two endpoints answer
//! `501`.
//!
//! ## Example Usage (Python)
//!
//! ```python
//! import requests
//!
//! API_URL = "http://127.0.0.1:8765"
//!
//! meshers = requests.get(f"{API_URL}/extensions", params={"q": "mesh"}).json()
//! requests.get(f"{API_URL}/install", params={"id": meshers[0]["id"]})
//! ```

pub mod access_log;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;
pub mod types;

use std::net::SocketAddr;

use thiserror::Error;

pub use server::CatalogueServer;
pub use state::ApiState;

/// REST server errors.
#[derive(Debug, Error)]
pub enum RestError {
    /// The listening socket could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    /// Transport/IO error while serving.
    #[error("Transport error: {0}")]
    Transport(#[from] std::io::Error),

    /// The serve task panicked or was cancelled.
    #[error("Server task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
