//! Repository implementations backed by PostgreSQL.

pub mod folder;

pub use folder::FolderRepository;
