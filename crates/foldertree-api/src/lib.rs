//! # foldertree-api
//!
//! HTTP API layer for FolderTree built on Axum.
//!
//! Provides the folder endpoints, the liveness check, middleware (CORS,
//! request logging, compression, timeouts), extractors, DTOs, and the
//! mapping from [`AppError`](foldertree_core::AppError) to the JSON
//! response envelope.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::serve;
pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
