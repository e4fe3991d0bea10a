use super::error::AudioServiceError;
use crate::domain::audio::{MoveAudioRequest, RenameAudioRequest, SaveAudioRequest};
use crate::domain::shared::validation::{required_id, required_text};
use crate::infrastructure::repositories::{AudioRepository, FolderRepository};
use crate::infrastructure::storage::FileStore;
use async_trait::async_trait;
use std::sync::Arc;

pub struct AudioService {
    audio_repo: Arc<AudioRepository>,
    folder_repo: Arc<FolderRepository>,
    file_store: Arc<FileStore>,
}

impl AudioService {
    pub fn new(
        audio_repo: Arc<AudioRepository>,
        folder_repo: Arc<FolderRepository>,
        file_store: Arc<FileStore>,
    ) -> Self {
        Self {
            audio_repo,
            folder_repo,
            file_store,
        }
    }
}

#[async_trait]
pub trait AudioServiceApi: Send + Sync {
    /// Record an already-written audio file under a folder
    async fn save_audio(&self, request: SaveAudioRequest) -> Result<i64, AudioServiceError>;

    async fn rename_audio(
        &self,
        audio_id: i64,
        request: RenameAudioRequest,
    ) -> Result<(), AudioServiceError>;

    /// Reassign an audio to another existing folder
    async fn move_audio(&self, request: MoveAudioRequest) -> Result<(), AudioServiceError>;

    /// Remove the backing file (if still present), then the record
    async fn delete_audio(&self, audio_id: i64) -> Result<(), AudioServiceError>;
}

#[async_trait]
impl AudioServiceApi for AudioService {
    async fn save_audio(&self, request: SaveAudioRequest) -> Result<i64, AudioServiceError> {
        let name = required_text(request.name, "Audio name").map_err(AudioServiceError::Invalid)?;
        let audio_path =
            required_text(request.audio_path, "audioPath").map_err(AudioServiceError::Invalid)?;
        let folder_id = required_id(request.folder_id, "folderId").map_err(AudioServiceError::Invalid)?;

        self.ensure_file_exists(&audio_path).await?;

        let mut tx = self.audio_repo.begin().await?;
        if !self.folder_repo.exists(&mut *tx, folder_id).await? {
            return Err(AudioServiceError::FolderNotFound);
        }
        let audio_id = self
            .audio_repo
            .create(&mut *tx, &name, &audio_path, folder_id)
            .await?;
        tx.commit()
            .await
            .map_err(|e| AudioServiceError::Dependency(e.to_string()))?;

        tracing::info!(audio_id, folder_id, audio_path = %audio_path, "Audio saved");
        Ok(audio_id)
    }

    async fn rename_audio(
        &self,
        audio_id: i64,
        request: RenameAudioRequest,
    ) -> Result<(), AudioServiceError> {
        let name = required_text(request.name, "Audio name").map_err(AudioServiceError::Invalid)?;

        let mut tx = self.audio_repo.begin().await?;
        if !self.audio_repo.update_name(&mut *tx, audio_id, &name).await? {
            return Err(AudioServiceError::AudioNotFound);
        }
        tx.commit()
            .await
            .map_err(|e| AudioServiceError::Dependency(e.to_string()))?;

        tracing::info!(audio_id, name = %name, "Audio renamed");
        Ok(())
    }

    async fn move_audio(&self, request: MoveAudioRequest) -> Result<(), AudioServiceError> {
        let audio_id = required_id(request.audio_id, "audioId").map_err(AudioServiceError::Invalid)?;
        let target_folder_id =
            required_id(request.target_folder_id, "targetFolderId").map_err(AudioServiceError::Invalid)?;

        // Folder before audio, the same order delete_folder takes its locks in
        let mut tx = self.audio_repo.begin().await?;
        if !self.folder_repo.exists(&mut *tx, target_folder_id).await? {
            return Err(AudioServiceError::FolderNotFound);
        }

        let audio = self
            .audio_repo
            .lock_by_id(&mut *tx, audio_id)
            .await?
            .ok_or(AudioServiceError::AudioNotFound)?;

        self.audio_repo
            .update_folder(&mut *tx, audio_id, target_folder_id)
            .await?;
        tx.commit()
            .await
            .map_err(|e| AudioServiceError::Dependency(e.to_string()))?;

        tracing::info!(
            audio_id,
            from_folder_id = audio.folder_id,
            to_folder_id = target_folder_id,
            "Audio moved"
        );
        Ok(())
    }

    async fn delete_audio(&self, audio_id: i64) -> Result<(), AudioServiceError> {
        let mut tx = self.audio_repo.begin().await?;
        let audio = self
            .audio_repo
            .lock_by_id(&mut *tx, audio_id)
            .await?
            .ok_or(AudioServiceError::AudioNotFound)?;

        if FileStore::file_name_of(&audio.file_path).is_some() {
            self.file_store.delete(&audio.file_path).await?;
        } else {
            tracing::warn!(
                audio_id,
                file_path = %audio.file_path,
                "Audio has no file in the store, deleting record only"
            );
        }

        self.audio_repo.delete(&mut *tx, audio_id).await?;
        tx.commit()
            .await
            .map_err(|e| AudioServiceError::Dependency(e.to_string()))?;

        tracing::info!(audio_id, folder_id = audio.folder_id, "Audio deleted");
        Ok(())
    }
}

impl AudioService {
    async fn ensure_file_exists(&self, audio_path: &str) -> Result<(), AudioServiceError> {
        if FileStore::file_name_of(audio_path).is_none() {
            return Err(AudioServiceError::Invalid(format!(
                "Invalid audio reference: {}",
                audio_path
            )));
        }
        if !self.file_store.exists(audio_path).await? {
            return Err(AudioServiceError::Invalid(format!(
                "Audio file does not exist: {}",
                audio_path
            )));
        }
        Ok(())
    }
}
