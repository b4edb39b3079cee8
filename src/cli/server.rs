use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tasky_contact::{DocumentStore, MemoryStore, firestore::FirestoreStore, sqlite::SqliteStore};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::config::{Config, StoreBackend};
use crate::routes::AppState;

/// Connects the configured document store.
pub async fn build_state(config: Config) -> Result<AppState> {
    let mut pool = None;

    let store: Arc<dyn DocumentStore> = match config.store.backend {
        StoreBackend::Sqlite => {
            let write_pool = crate::db::create_write_pool(&config.database.url).await?;
            tasky_contact::sqlite::migrate(&write_pool).await?;
            pool = Some(write_pool.clone());

            Arc::new(SqliteStore::new(write_pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using the in-memory store, submissions are lost on restart");

            Arc::new(MemoryStore::new())
        }
        StoreBackend::Firestore => {
            let firestore = &config.store.firestore;

            Arc::new(
                FirestoreStore::new(&firestore.project_id, Some(firestore.api_key.clone()))
                    .with_base_url(&firestore.base_url),
            )
        }
    };

    tracing::info!(backend = %config.store.backend, "Document store ready");

    Ok(AppState {
        config,
        store,
        pool,
    })
}

/// The site router with the response layers applied.
pub fn app(state: AppState) -> Router {
    crate::routes::router(state)
        // no-cache for pages, long-lived cache for embedded assets
        .layer(axum::middleware::from_fn(
            crate::middleware::cache_control_middleware,
        ))
        // Minify HTML responses before compression
        .layer(axum::middleware::map_response(
            crate::middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(
    config: Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting tasky server...");

    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    let state = build_state(config).await?;
    let pool = state.pool.clone();

    let app = app(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pool) = pool {
        tracing::info!("Closing database pool...");
        pool.close().await;
    }

    tracing::info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }

    tracing::info!("Starting graceful shutdown...");
}
