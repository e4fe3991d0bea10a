use super::text_batches::split_into_batches;
use super::tts_repository::TtsRepository;
use crate::domain::translation::LanguageCode;
use async_openai::{
    config::OpenAIConfig,
    types::{CreateSpeechRequest, SpeechModel, Voice},
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;

/// OpenAI has a limit of 4096 characters per request
const MAX_BATCH_SIZE: usize = 4096;

/// OpenAI TTS implementation of TTS repository
pub struct OpenAiTtsRepository {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
    default_voice: String,
}

impl OpenAiTtsRepository {
    pub fn new(client: Arc<Client<OpenAIConfig>>, model: String, default_voice: String) -> Self {
        Self {
            client,
            model,
            default_voice,
        }
    }

    /// OpenAI voices are multilingual; pick one whose character suits the language
    fn voice_for_language(language: &LanguageCode) -> &'static str {
        match language.primary() {
            "es" => "echo",
            "fr" => "nova",
            "de" => "onyx",
            "it" => "fable",
            "pt" => "shimmer",
            _ => "alloy",
        }
    }

    fn parse_voice(voice: &str) -> Voice {
        match voice.to_lowercase().as_str() {
            "echo" => Voice::Echo,
            "fable" => Voice::Fable,
            "onyx" => Voice::Onyx,
            "nova" => Voice::Nova,
            "shimmer" => Voice::Shimmer,
            _ => Voice::Alloy,
        }
    }

    /// Call OpenAI TTS API to synthesize a single text batch
    async fn call_openai(&self, text: &str, voice: &str) -> Result<Vec<u8>, String> {
        tracing::debug!(
            model = %self.model,
            voice = voice,
            text_length = text.len(),
            "Calling OpenAI TTS API"
        );

        let model = match self.model.as_str() {
            "tts-1" => SpeechModel::Tts1,
            "tts-1-hd" => SpeechModel::Tts1Hd,
            other => SpeechModel::Other(other.to_string()),
        };

        let request = CreateSpeechRequest {
            model,
            input: text.to_string(),
            voice: Self::parse_voice(voice),
            response_format: None, // Defaults to MP3
            speed: None,
        };

        let response = self.client.audio().speech(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                model = %self.model,
                voice = voice,
                text_length = text.len(),
                "OpenAI TTS API call failed"
            );
            format!("OpenAI TTS error: {}", e)
        })?;

        Ok(response.bytes.to_vec())
    }
}

#[async_trait]
impl TtsRepository for OpenAiTtsRepository {
    async fn synthesize(&self, text: &str, language: &LanguageCode) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        let voice = if self.default_voice.is_empty() {
            Self::voice_for_language(language).to_string()
        } else {
            self.default_voice.clone()
        };

        let batches = split_into_batches(text, MAX_BATCH_SIZE);
        let mut merged_audio = Vec::new();
        for batch in &batches {
            merged_audio.extend(self.call_openai(batch, &voice).await?);
        }

        tracing::info!(
            provider = "openai",
            model = %self.model,
            voice = %voice,
            language = %language,
            latency_ms = start_time.elapsed().as_millis(),
            characters_count = text.len(),
            batch_count = batches.len(),
            audio_size_bytes = merged_audio.len(),
            "TTS synthesis completed"
        );

        Ok(merged_audio)
    }
}
