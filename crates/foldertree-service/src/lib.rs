//! # foldertree-service
//!
//! Business logic for FolderTree. Services receive their folder store
//! through constructor injection as an `Arc<dyn FolderStore>`, so the
//! same code runs against PostgreSQL and the in-memory store.

pub mod folder;

pub use folder::{CreateFolderRequest, FolderService};
