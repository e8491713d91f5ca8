//! FolderTree Server: hierarchical folders over HTTP
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use foldertree_api::AppState;
use foldertree_core::config::{AppConfig, LoggingConfig};
use foldertree_core::error::AppError;
use foldertree_database::DatabasePool;
use foldertree_service::FolderService;

#[tokio::main]
async fn main() {
    let env = std::env::var("FOLDERTREE_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);
    tracing::info!(env = %env, "Starting FolderTree v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    if config.is_json() {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    } else {
        fmt().pretty().with_env_filter(filter).with_target(true).init();
    }
}

/// Connect, make sure the root folder exists, then serve until shutdown.
async fn run(config: AppConfig) -> Result<(), AppError> {
    let db = DatabasePool::connect(&config.database).await?;

    let folder_service =
        FolderService::new(Arc::new(db.folder_repository()), config.folders.clone());
    let root = folder_service.ensure_root().await?;
    tracing::info!(root_id = %root.id, "Root folder ready");

    let result = foldertree_api::serve(AppState::new(config, folder_service)).await;

    db.close().await;
    tracing::info!("FolderTree server shut down gracefully");
    result
}
