//! Extcat
//!
//! A read-only extension catalogue served over HTTP.
//!
//! # Architecture
//!
//! - **Catalogue Module**: immutable extension records and keyword search
//! - **REST Module**: axum router, handlers and the server handle
//! - **Config Module**: command-line flags and bind address
//! - **Logging Module**: stdout tracing subscriber
//!
//! # Usage
//!
//! ```no_run
//! use extcat::{Catalogue, CatalogueServer, ServerConfig};
//!
//! # async fn run() -> Result<(), extcat::rest::RestError> {
//! let server = CatalogueServer::start(&ServerConfig::default(), Catalogue::builtin()).await?;
//! server.wait().await?;
//! # Ok(())
//! # }
//! ```

// Clippy configuration - allow common patterns
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

pub mod catalogue;
pub mod config;
pub mod logging;
pub mod rest;

// Re-export main types
pub use catalogue::{Catalogue, CatalogueError, ExtensionRecord};
pub use config::{Cli, DEFAULT_PORT, ServerConfig};
pub use rest::CatalogueServer;
