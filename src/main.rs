//! GitHub repository search service
//!
//! This is the main entry point for the application.

use anyhow::Result;
use github_repo_search::{
    config,
    github::GithubClient,
    storage::SqliteRepositoryStore,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Starting github-repo-search v{}", github_repo_search::VERSION);

    // Load configuration
    let settings = config::load()?;

    // Initialize GitHub client
    let client = GithubClient::with_settings(&settings.github)?;
    info!("GitHub client initialized for {}", client.base_url());

    // Open the repository store
    let store = SqliteRepositoryStore::connect(&settings.database).await?;

    // Create application state
    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );
    let state = AppState::new(settings, Arc::new(client), Arc::new(store));

    // Create router
    let app = create_router(state);

    info!("Starting server on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolve on Ctrl-C or SIGTERM
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

    info!("Shutting down");
}
