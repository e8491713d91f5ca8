//! # foldertree-database
//!
//! The [`FolderStore`] abstraction over flat folder records, its
//! PostgreSQL implementation, an in-memory implementation, and
//! connection pool management.

pub mod connection;
pub mod memory;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryFolderStore;
pub use repositories::FolderRepository;
pub use store::FolderStore;
