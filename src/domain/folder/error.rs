use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum FolderServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("folder not found")]
    NotFound,
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<AppError> for FolderServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => FolderServiceError::Invalid(msg),
            AppError::NotFound(_) => FolderServiceError::NotFound,
            AppError::Storage(msg) => FolderServiceError::Storage(msg),
            _ => FolderServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<FolderServiceError> for AppError {
    fn from(err: FolderServiceError) -> Self {
        match err {
            FolderServiceError::Invalid(msg) => AppError::BadRequest(msg),
            FolderServiceError::NotFound => AppError::NotFound("Folder not found".to_string()),
            FolderServiceError::Storage(msg) => AppError::Storage(msg),
            FolderServiceError::Dependency(msg) => AppError::Internal(msg),
        }
    }
}
