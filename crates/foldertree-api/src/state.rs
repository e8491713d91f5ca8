//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use foldertree_core::config::AppConfig;
use foldertree_service::folder::FolderService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Folder tree service
    pub folder_service: Arc<FolderService>,
}

impl AppState {
    /// Bundles configuration and services into handler state.
    pub fn new(config: AppConfig, folder_service: FolderService) -> Self {
        Self {
            config: Arc::new(config),
            folder_service: Arc::new(folder_service),
        }
    }
}
