//! Request DTOs with validation.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use foldertree_core::error::AppError;
use foldertree_service::folder::CreateFolderRequest as SvcCreateFolder;

use crate::extractors::path::parse_id;

/// Create folder request body.
///
/// Both fields are optional at the JSON level so that a missing name
/// surfaces as a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderRequest {
    /// Folder name; the length limit applies after trimming.
    #[serde(default)]
    #[validate(length(max = 255, message = "Folder name must be at most 255 characters"))]
    pub name: String,
    /// Parent folder ID. Absent, null, or empty means no parent.
    #[serde(default)]
    pub parent_id: Option<String>,
}

impl CreateFolderRequest {
    /// Validates the body and converts it to the service request.
    ///
    /// A `parentId` that is not a UUID cannot name an existing folder and
    /// is reported the same way as an unknown one.
    pub fn into_service(mut self) -> Result<SvcCreateFolder, AppError> {
        self.name = self.name.trim().to_string();
        self.validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        let parent_id: Option<Uuid> = match self.parent_id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_id(raw, "Parent folder not found")?),
        };

        Ok(SvcCreateFolder {
            name: self.name,
            parent_id,
        })
    }
}
