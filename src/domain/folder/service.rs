use super::error::FolderServiceError;
use crate::domain::audio::{Audio, AudioSummary};
use crate::domain::folder::{CreateFolderRequest, FolderResponse, RenameFolderRequest};
use crate::domain::shared::validation::required_text;
use crate::infrastructure::repositories::{AudioRepository, FolderRepository};
use crate::infrastructure::storage::FileStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

pub struct FolderService {
    folder_repo: Arc<FolderRepository>,
    audio_repo: Arc<AudioRepository>,
    file_store: Arc<FileStore>,
}

impl FolderService {
    pub fn new(
        folder_repo: Arc<FolderRepository>,
        audio_repo: Arc<AudioRepository>,
        file_store: Arc<FileStore>,
    ) -> Self {
        Self {
            folder_repo,
            audio_repo,
            file_store,
        }
    }
}

#[async_trait]
pub trait FolderServiceApi: Send + Sync {
    /// All folders in creation order, each with its audios
    async fn list_folders(&self) -> Result<Vec<FolderResponse>, FolderServiceError>;

    async fn create_folder(&self, request: CreateFolderRequest) -> Result<i64, FolderServiceError>;

    async fn rename_folder(
        &self,
        folder_id: i64,
        request: RenameFolderRequest,
    ) -> Result<(), FolderServiceError>;

    /// Delete a folder together with its audios and their files.
    ///
    /// Files that cannot be removed are logged and skipped; the rows go either way.
    async fn delete_folder(&self, folder_id: i64) -> Result<(), FolderServiceError>;
}

#[async_trait]
impl FolderServiceApi for FolderService {
    async fn list_folders(&self) -> Result<Vec<FolderResponse>, FolderServiceError> {
        let folders = self.folder_repo.find_all().await?;
        let audios = self.audio_repo.find_all().await?;

        let mut by_folder: HashMap<i64, Vec<AudioSummary>> = HashMap::new();
        for audio in audios {
            by_folder
                .entry(audio.folder_id)
                .or_default()
                .push(AudioSummary::from(audio));
        }

        Ok(folders
            .into_iter()
            .map(|folder| FolderResponse {
                audios: by_folder.remove(&folder.id).unwrap_or_default(),
                id: folder.id,
                name: folder.name,
            })
            .collect())
    }

    async fn create_folder(&self, request: CreateFolderRequest) -> Result<i64, FolderServiceError> {
        let name = required_text(request.name, "Folder name").map_err(FolderServiceError::Invalid)?;

        let mut tx = self.folder_repo.begin().await?;
        let folder_id = self.folder_repo.create(&mut *tx, &name).await?;
        tx.commit()
            .await
            .map_err(|e| FolderServiceError::Dependency(e.to_string()))?;

        tracing::info!(folder_id, name = %name, "Folder created");
        Ok(folder_id)
    }

    async fn rename_folder(
        &self,
        folder_id: i64,
        request: RenameFolderRequest,
    ) -> Result<(), FolderServiceError> {
        let name = required_text(request.name, "Folder name").map_err(FolderServiceError::Invalid)?;

        let mut tx = self.folder_repo.begin().await?;
        if !self.folder_repo.update_name(&mut *tx, folder_id, &name).await? {
            return Err(FolderServiceError::NotFound);
        }
        tx.commit()
            .await
            .map_err(|e| FolderServiceError::Dependency(e.to_string()))?;

        tracing::info!(folder_id, name = %name, "Folder renamed");
        Ok(())
    }

    async fn delete_folder(&self, folder_id: i64) -> Result<(), FolderServiceError> {
        let mut tx = self.folder_repo.begin().await?;

        self.folder_repo
            .lock_by_id(&mut *tx, folder_id)
            .await?
            .ok_or(FolderServiceError::NotFound)?;

        let audios = self.audio_repo.lock_by_folder(&mut *tx, folder_id).await?;
        let files_removed = self.remove_audio_files(&audios).await;

        let rows_removed = self.audio_repo.delete_by_folder(&mut *tx, folder_id).await?;
        self.folder_repo.delete(&mut *tx, folder_id).await?;
        tx.commit()
            .await
            .map_err(|e| FolderServiceError::Dependency(e.to_string()))?;

        tracing::info!(
            folder_id,
            audios_deleted = rows_removed,
            files_deleted = files_removed,
            "Folder deleted"
        );
        Ok(())
    }
}

impl FolderService {
    /// Best-effort removal of the files behind `audios`; returns how many were deleted
    async fn remove_audio_files(&self, audios: &[Audio]) -> usize {
        let mut removed = 0;
        for audio in audios {
            if FileStore::file_name_of(&audio.file_path).is_none() {
                tracing::warn!(
                    audio_id = audio.id,
                    file_path = %audio.file_path,
                    "Audio has no file in the store, skipping file cleanup"
                );
                continue;
            }

            match self.file_store.delete(&audio.file_path).await {
                Ok(true) => removed += 1,
                Ok(false) => {}
                Err(e) => tracing::error!(
                    audio_id = audio.id,
                    file_path = %audio.file_path,
                    error = %e,
                    "Error deleting audio file"
                ),
            }
        }
        removed
    }
}
