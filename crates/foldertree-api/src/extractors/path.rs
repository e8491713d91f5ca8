//! Typed path parameter helpers.

use uuid::Uuid;

use foldertree_core::error::AppError;

/// Parses a folder ID from a path segment.
///
/// Anything that is not a UUID cannot name a stored folder, so it is
/// reported as not found.
pub fn parse_folder_id(raw: &str) -> Result<Uuid, AppError> {
    parse_id(raw, "Folder not found")
}

pub(crate) fn parse_id(raw: &str, not_found: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::not_found(not_found))
}
