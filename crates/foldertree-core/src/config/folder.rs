//! Folder tree limits.

use serde::{Deserialize, Serialize};

/// Limits on the shape of the folder tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderConfig {
    /// Deepest nesting level a folder may sit at; top-level folders are at 0.
    ///
    /// Creates below this level are rejected, and tree reads stop here.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for FolderConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

fn default_max_depth() -> usize {
    100
}
