use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::domain::folder::{CreateFolderRequest, FolderResponse, RenameFolderRequest};
use crate::domain::shared::response_dto::MutationResponse;
use crate::infrastructure::http::extract::AppJson;
use crate::{
    domain::folder::{FolderService, FolderServiceApi},
    error::AppResult,
};

pub struct FolderController {
    folder_service: Arc<FolderService>,
}

impl FolderController {
    pub fn new(folder_service: Arc<FolderService>) -> Self {
        Self { folder_service }
    }

    /// GET /get-folders - List folders with their audios
    pub async fn list_folders(
        State(controller): State<Arc<FolderController>>,
    ) -> AppResult<Json<Vec<FolderResponse>>> {
        let folders = controller.folder_service.list_folders().await?;
        Ok(Json(folders))
    }

    /// POST /create-folder - Create new folder
    pub async fn create_folder(
        State(controller): State<Arc<FolderController>>,
        AppJson(request): AppJson<CreateFolderRequest>,
    ) -> AppResult<Json<MutationResponse>> {
        let folder_id = controller.folder_service.create_folder(request).await?;
        Ok(Json(MutationResponse::created(folder_id)))
    }

    /// PUT /edit-folder/{id} - Rename folder
    pub async fn rename_folder(
        State(controller): State<Arc<FolderController>>,
        Path(folder_id): Path<i64>,
        AppJson(request): AppJson<RenameFolderRequest>,
    ) -> AppResult<Json<MutationResponse>> {
        controller
            .folder_service
            .rename_folder(folder_id, request)
            .await?;
        Ok(Json(MutationResponse::ok()))
    }

    /// DELETE /delete-folder/{id} - Delete folder, its audios and their files
    pub async fn delete_folder(
        State(controller): State<Arc<FolderController>>,
        Path(folder_id): Path<i64>,
    ) -> AppResult<Json<MutationResponse>> {
        controller.folder_service.delete_folder(folder_id).await?;
        Ok(Json(MutationResponse::with_message(
            "Folder deleted successfully",
        )))
    }
}
