use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum TranslationServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
}

impl From<TranslationServiceError> for AppError {
    fn from(err: TranslationServiceError) -> Self {
        match err {
            TranslationServiceError::Invalid(msg) => AppError::BadRequest(msg),
        }
    }
}
