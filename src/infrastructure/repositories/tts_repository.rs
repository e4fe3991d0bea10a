use crate::domain::translation::LanguageCode;
use async_trait::async_trait;

/// Repository for speech synthesis.
/// Abstracts the underlying TTS provider (Google, OpenAI, AWS Polly)
///
/// Implementations are responsible for:
/// - Handling provider-specific text length limitations
/// - Splitting text into batches if needed
/// - Merging audio chunks into a single MP3 stream
/// - Provider-specific voice selection
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize text to speech in the given language
    ///
    /// Returns merged audio data ready for playback (MP3 format)
    ///
    /// # Errors
    /// Returns error if synthesis fails, the language has no voice, or the provider is unavailable
    async fn synthesize(&self, text: &str, language: &LanguageCode) -> Result<Vec<u8>, String>;
}
