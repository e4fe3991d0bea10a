use crate::domain::translation::LanguageCode;
use async_trait::async_trait;

/// Repository for text translation.
/// Abstracts the underlying translation provider (Google, OpenAI)
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// Translate `text` (source language auto-detected) into `target`
    ///
    /// # Errors
    /// Returns error if the provider rejects the request or is unavailable
    async fn translate(&self, text: &str, target: &LanguageCode) -> Result<String, String>;
}
