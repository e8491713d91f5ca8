//! Folder tree reads, folder creation, and subtree deletion.

pub mod delete;
pub mod root;
pub mod service;
pub mod tree;

pub use delete::delete_subtree;
pub use root::ensure_root;
pub use service::{CreateFolderRequest, FolderService};
pub use tree::build_tree;

#[cfg(test)]
pub(crate) mod testing;
