use std::{io, net::SocketAddr, path::PathBuf, sync::Arc, time::Duration};

use axum::{Router, middleware, routing::get};
use common::Config;
use fetcher::{FetchError, HttpFetcher};
use heads::HeadPipeline;
use image_cache::{CacheError, DiskCache};
use thiserror::Error;
use tokio::{net::TcpListener, signal};
use tower_http::catch_panic::CatchPanicLayer;
use tracing::info;

pub mod logger;
mod routes;
mod service_layers;
mod state;

pub use state::ServerState;

use routes::{
    error_boundary::{not_found_handler, panic_into_fallback, serve_fallback},
    head::{head_by_name_handler, head_by_uuid_handler},
};
use service_layers::build_service_layers;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to read fallback image {path}: {source}")]
    Fallback { path: PathBuf, source: io::Error },
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] FetchError),
    #[error("Failed to open head cache: {0}")]
    Cache(#[from] CacheError),
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        source: io::Error,
    },
    #[error("Server error: {0}")]
    Serve(io::Error),
}

pub fn build_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/head/uuid/{id}", get(head_by_uuid_handler))
        .route("/head/name/{name}", get(head_by_name_handler))
        .layer(CatchPanicLayer::custom(panic_into_fallback))
        .layer(middleware::from_fn_with_state(state.clone(), serve_fallback))
        .fallback(not_found_handler)
        .layer(build_service_layers())
        .with_state(state)
}

/// Loads the fallback image, opens the cache and the shared HTTP client,
/// then serves until ctrl-c or SIGTERM.
pub async fn serve(config: Config) -> Result<(), StartupError> {
    let fallback = tokio::fs::read(&config.fallback_path)
        .await
        .map_err(|source| StartupError::Fallback {
            path: config.fallback_path.clone(),
            source,
        })?;

    let fetcher = Arc::new(HttpFetcher::new(Duration::from_secs(
        config.request_timeout_secs,
    ))?);
    let cache = DiskCache::new(&config.cache_dir).await?;

    let pipeline = HeadPipeline::new(
        fetcher,
        cache,
        &config.name_lookup_url,
        &config.profile_lookup_url,
    );
    let state = Arc::new(ServerState::new(pipeline, fallback));

    let address = SocketAddr::new(config.bind, config.port);
    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| StartupError::Bind { address, source })?;

    info!("Listening on {}", address);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to listen for SIGTERM: {}", err);
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

    info!("Shutdown signal received, draining connections");
}
