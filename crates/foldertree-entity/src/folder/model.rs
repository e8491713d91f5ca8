//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Name given to the folder created by the root initializer.
pub const ROOT_FOLDER_NAME: &str = "Root";

/// A folder in the hierarchy, stored as a flat parent-pointer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Unique folder identifier.
    pub id: Uuid,
    /// Folder name (already trimmed).
    pub name: String,
    /// Parent folder ID (null for the root folder).
    pub parent_id: Option<Uuid>,
    /// Whether the folder was created without a parent.
    pub is_root: bool,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Folder {
    /// Check if this is a root folder (no parent).
    ///
    /// This reads `parent_id` rather than the stored `is_root` flag; the
    /// parent pointer is the source of truth.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Data required to create a new folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolder {
    /// Folder name.
    pub name: String,
    /// Parent folder (None for the root).
    pub parent_id: Option<Uuid>,
}

impl CreateFolder {
    /// A folder under an existing parent.
    pub fn child(name: impl Into<String>, parent_id: Uuid) -> Self {
        Self {
            name: name.into(),
            parent_id: Some(parent_id),
        }
    }

    /// The parentless root folder.
    pub fn root() -> Self {
        Self {
            name: ROOT_FOLDER_NAME.to_string(),
            parent_id: None,
        }
    }

    /// The `is_root` flag to persist for this record.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
