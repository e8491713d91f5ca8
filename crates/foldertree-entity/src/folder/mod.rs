//! Folder domain entities.

pub mod model;
pub mod tree;

pub use model::{CreateFolder, Folder, ROOT_FOLDER_NAME};
pub use tree::FolderNode;
