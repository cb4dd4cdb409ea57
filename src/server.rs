//! Host runtime setup.
//!
//! Builds the shared object store and redirect service from [`Config`], and
//! runs the axum server lifecycle.

use crate::application::services::RedirectService;
use crate::config::{Config, StorageBackend};
use crate::domain::SystemClock;
use crate::domain::repositories::ObjectStore;
use crate::infrastructure::storage::{FsObjectStore, S3ObjectStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;

/// Creates the object store selected by the configuration.
pub async fn build_store(config: &Config) -> Arc<dyn ObjectStore> {
    match config.storage_backend {
        StorageBackend::S3 => {
            let store = S3ObjectStore::from_env(config.s3_endpoint_url.as_deref()).await;
            tracing::info!("Storage enabled (S3)");
            Arc::new(store)
        }
        StorageBackend::Fs => {
            tracing::info!(
                "Storage enabled (filesystem at {})",
                config.storage_root.display()
            );
            Arc::new(FsObjectStore::new(&config.storage_root))
        }
    }
}

/// Creates the redirect service shared by every request of this process.
pub async fn build_redirect_service(config: &Config) -> Arc<RedirectService> {
    let store = build_store(config).await;
    Arc::new(RedirectService::new(
        store,
        Arc::new(SystemClock),
        config.bucket.clone(),
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let redirect_service = build_redirect_service(&config).await;
    let state = AppState::new(redirect_service);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
