//! Extcat - Main entry point.
//!
//! Serves the built-in extension catalogue over HTTP on the loopback
//! interface.
//!
//! Usage: extcat [--port <PORT>]
//!
//! Options:
//!   --port <PORT>    Port to listen on (default 8765)

use std::process::ExitCode;

use clap::Parser;

use extcat::logging::{self, LogConfig};
use extcat::{Catalogue, CatalogueServer, Cli, ServerConfig};

#[tokio::main]
async fn main() -> ExitCode {
    // Invalid flags exit here, before anything is bound
    let cli = Cli::parse();

    logging::init(&LogConfig::default());

    let config = ServerConfig::from(&cli);

    let server = match CatalogueServer::start(&config, Catalogue::builtin()).await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Startup failed: {}", e);
            eprintln!("extcat: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = server
        .run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Server stopped: {}", e);
            eprintln!("extcat: {}", e);
            ExitCode::FAILURE
        }
    }
}
