//! REST API HTTP server.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use super::{RestError, router::create_router, state::ApiState};
use crate::catalogue::Catalogue;
use crate::config::ServerConfig;

/// Catalogue server handle.
pub struct CatalogueServer {
    /// Sender for graceful shutdown.
    shutdown_tx: Option<oneshot::Sender<()>>,
    /// Background serve task.
    task: Option<JoinHandle<std::io::Result<()>>>,
    /// API state (shared with handlers).
    state: Arc<ApiState>,
    /// Bound address.
    addr: SocketAddr,
}

impl CatalogueServer {
    /// Binds the listener and starts serving in a background task.
    ///
    /// # Errors
    /// Returns [`RestError::Bind`] if the address cannot be bound, e.g.
    /// when the port is already in use.
    pub async fn start(config: &ServerConfig, catalogue: Catalogue) -> Result<Self, RestError> {
        let addr = config.socket_addr();

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|source| RestError::Bind { addr, source })?;
        let actual_addr = listener.local_addr()?;

        let state = Arc::new(ApiState::new(catalogue));
        let router = create_router(Arc::clone(&state));

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            let server = axum::serve(
                listener,
                router.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            });

            let result = server.await;
            if let Err(e) = &result {
                tracing::error!("Catalogue server error: {}", e);
            }
            result
        });

        tracing::info!(
            "Catalogue server listening on http://{} ({} extensions)",
            actual_addr,
            state.catalogue.len()
        );

        Ok(Self {
            shutdown_tx: Some(shutdown_tx),
            task: Some(task),
            state,
            addr: actual_addr,
        })
    }

    /// Returns the server address.
    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Returns the base URL.
    #[must_use]
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Returns the catalogue being served.
    #[must_use]
    pub fn catalogue(&self) -> &Catalogue {
        &self.state.catalogue
    }

    /// Requests a graceful shutdown.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("Catalogue server shutdown requested");
        }
    }

    /// Serves until `signal` resolves or the server stops on its own, then
    /// shuts down and waits for in-flight requests to finish.
    ///
    /// # Errors
    /// Returns error if the serve task failed.
    pub async fn run_until<F>(mut self, signal: F) -> Result<(), RestError>
    where
        F: Future<Output = ()>,
    {
        let Some(mut task) = self.task.take() else {
            return Ok(());
        };

        tokio::select! {
            result = &mut task => return Ok(result??),
            () = signal => {}
        }

        self.shutdown();
        Ok(task.await??)
    }

    /// Waits for the serve task to finish.
    ///
    /// # Errors
    /// Returns error if the serve task failed.
    pub async fn wait(self) -> Result<(), RestError> {
        self.run_until(std::future::pending()).await
    }
}

impl Drop for CatalogueServer {
    fn drop(&mut self) {
        self.shutdown();
    }
}
