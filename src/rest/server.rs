//! REST API server lifecycle management.
//!
//! Lets the terminal wizard run the mock API in-process: start on a
//! (possibly ephemeral) port, query status, stop on exit.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::{bail, Context, Result};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::rest::{build_router, ApiState};

/// Status of the REST API server
#[derive(Debug, Clone, PartialEq)]
pub enum RestApiStatus {
    Stopped,
    Running { addr: SocketAddr },
    Error(String),
}

impl RestApiStatus {
    /// Returns true if the server is running
    pub fn is_running(&self) -> bool {
        matches!(self, RestApiStatus::Running { .. })
    }
}

/// REST API server handle for lifecycle management
pub struct RestApiServer {
    state: ApiState,
    addr: SocketAddr,
    status: Arc<Mutex<RestApiStatus>>,
    shutdown_tx: Mutex<Option<oneshot::Sender<()>>>,
    task_handle: Mutex<Option<JoinHandle<()>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl RestApiServer {
    /// Create a new server handle. Port 0 picks an ephemeral port on start.
    pub fn new(state: ApiState, addr: SocketAddr) -> Self {
        Self {
            state,
            addr,
            status: Arc::new(Mutex::new(RestApiStatus::Stopped)),
            shutdown_tx: Mutex::new(None),
            task_handle: Mutex::new(None),
        }
    }

    /// Get current server status
    pub fn status(&self) -> RestApiStatus {
        lock(&self.status).clone()
    }

    /// Check if server is running
    pub fn is_running(&self) -> bool {
        self.status().is_running()
    }

    /// Address actually bound, once running
    pub fn local_addr(&self) -> Option<SocketAddr> {
        match self.status() {
            RestApiStatus::Running { addr } => Some(addr),
            _ => None,
        }
    }

    /// Base URL for clients, once running
    pub fn base_url(&self) -> Option<String> {
        self.local_addr().map(|addr| format!("http://{addr}"))
    }

    /// Bind and start serving in a background task.
    ///
    /// Returns once the listener is bound, with the bound address.
    pub async fn start(&self) -> Result<SocketAddr> {
        if let RestApiStatus::Running { addr } = self.status() {
            bail!("REST API already running on {}", addr);
        }

        let listener = match tokio::net::TcpListener::bind(self.addr).await {
            Ok(listener) => listener,
            Err(e) => {
                *lock(&self.status) = RestApiStatus::Error(e.to_string());
                return Err(e).with_context(|| format!("Failed to bind {}", self.addr));
            }
        };
        let addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        *lock(&self.shutdown_tx) = Some(shutdown_tx);

        let router = build_router(self.state.clone());
        let status = Arc::clone(&self.status);
        *lock(&status) = RestApiStatus::Running { addr };
        tracing::info!("REST API listening on http://{}", addr);

        let handle = tokio::spawn(async move {
            let result = axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;

            *lock(&status) = match result {
                Ok(()) => RestApiStatus::Stopped,
                Err(e) => {
                    tracing::error!("REST API failed: {}", e);
                    RestApiStatus::Error(e.to_string())
                }
            };
        });

        *lock(&self.task_handle) = Some(handle);
        Ok(addr)
    }

    /// Stop the server and wait for in-flight requests to finish
    pub async fn stop(&self) {
        let tx = lock(&self.shutdown_tx).take();
        if let Some(tx) = tx {
            let _ = tx.send(());
        }

        let handle = lock(&self.task_handle).take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                tracing::warn!("REST API task ended abnormally: {}", e);
            }
        }

        *lock(&self.status) = RestApiStatus::Stopped;
        tracing::info!("REST API server stopped");
    }
}

impl Drop for RestApiServer {
    fn drop(&mut self) {
        if let Some(tx) = lock(&self.shutdown_tx).take() {
            let _ = tx.send(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn make_server() -> RestApiServer {
        let state = ApiState::new(&Config::default());
        RestApiServer::new(state, SocketAddr::from(([127, 0, 0, 1], 0)))
    }

    #[test]
    fn test_rest_api_status_is_running() {
        let addr = SocketAddr::from(([127, 0, 0, 1], 7008));
        assert!(!RestApiStatus::Stopped.is_running());
        assert!(RestApiStatus::Running { addr }.is_running());
        assert!(!RestApiStatus::Error("test".to_string()).is_running());
    }

    #[test]
    fn test_rest_api_server_initial_status() {
        let server = make_server();
        assert_eq!(server.status(), RestApiStatus::Stopped);
        assert!(!server.is_running());
        assert!(server.base_url().is_none());
    }

    #[tokio::test]
    async fn test_start_binds_ephemeral_port_and_stops() {
        let server = make_server();

        let addr = server.start().await.unwrap();
        assert_ne!(addr.port(), 0);
        assert!(server.is_running());
        assert_eq!(server.base_url(), Some(format!("http://{addr}")));

        server.stop().await;
        assert_eq!(server.status(), RestApiStatus::Stopped);
        assert!(lock(&server.shutdown_tx).is_none());
    }

    #[tokio::test]
    async fn test_double_start_error() {
        let server = make_server();
        server.start().await.unwrap();

        let err = server.start().await.unwrap_err();
        assert!(err.to_string().contains("already running"));

        server.stop().await;
    }

    #[tokio::test]
    async fn test_bind_failure_sets_error_status() {
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = taken.local_addr().unwrap();

        let server = RestApiServer::new(ApiState::new(&Config::default()), addr);
        assert!(server.start().await.is_err());
        assert!(matches!(server.status(), RestApiStatus::Error(_)));
    }
}
