//! Folder tree, create, and delete handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use foldertree_entity::folder::{Folder, FolderNode};

use crate::dto::request::CreateFolderRequest;
use crate::dto::response::{ApiResponse, DeleteFolderResponse};
use crate::error::ApiError;
use crate::extractors::{JsonBody, parse_folder_id};
use crate::state::AppState;

/// GET /api/folders
pub async fn get_tree(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<FolderNode>>>, ApiError> {
    let tree = state.folder_service.get_tree().await?;
    Ok(Json(ApiResponse::ok(tree)))
}

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateFolderRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Folder>>), ApiError> {
    let folder = state
        .folder_service
        .create_folder(req.into_service()?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(folder).with_message("Folder created successfully")),
    ))
}

/// DELETE /api/folders/{id}
pub async fn delete_folder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DeleteFolderResponse>>, ApiError> {
    let id = parse_folder_id(&id)?;
    let deleted_count = state.folder_service.delete_folder(id).await?;

    Ok(Json(
        ApiResponse::ok(DeleteFolderResponse { id, deleted_count })
            .with_message("Folder and its children deleted successfully"),
    ))
}
