use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum AudioServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("audio not found")]
    AudioNotFound,
    #[error("folder not found")]
    FolderNotFound,
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<AppError> for AudioServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => AudioServiceError::Invalid(msg),
            // Repositories only raise NotFound for a dangling folder reference
            AppError::NotFound(_) => AudioServiceError::FolderNotFound,
            AppError::Storage(msg) => AudioServiceError::Storage(msg),
            _ => AudioServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<AudioServiceError> for AppError {
    fn from(err: AudioServiceError) -> Self {
        match err {
            AudioServiceError::Invalid(msg) => AppError::BadRequest(msg),
            AudioServiceError::AudioNotFound => AppError::NotFound("Audio not found".to_string()),
            AudioServiceError::FolderNotFound => AppError::NotFound("Folder not found".to_string()),
            AudioServiceError::Storage(msg) => AppError::Storage(msg),
            AudioServiceError::Dependency(msg) => AppError::Internal(msg),
        }
    }
}
