use super::text_batches::split_into_batches;
use super::tts_repository::TtsRepository;
use crate::domain::translation::LanguageCode;
use async_trait::async_trait;
use aws_sdk_polly::{
    types::{Engine, OutputFormat, VoiceId},
    Client as PollyClient,
};
use std::sync::Arc;

/// AWS Polly has a limit of 3000 characters per request
const MAX_BATCH_SIZE: usize = 3000;

/// AWS Polly implementation of TTS repository
pub struct PollyTtsRepository {
    polly_client: Arc<PollyClient>,
}

impl PollyTtsRepository {
    pub fn new(polly_client: Arc<PollyClient>) -> Self {
        Self { polly_client }
    }

    /// Neural Polly voice for a language, if Polly has one
    fn voice_for_language(language: &LanguageCode) -> Option<&'static str> {
        let voice = match language.as_str() {
            "pt-BR" => "Camila",
            "es-US" | "es-MX" => "Lupe",
            "en-GB" => "Amy",
            "fr-CA" => "Gabrielle",
            _ => match language.primary() {
                "en" => "Joanna",
                "es" => "Lucia",
                "fr" => "Lea",
                "de" => "Vicki",
                "it" => "Bianca",
                "pt" => "Ines",
                "nl" => "Laura",
                "pl" => "Ola",
                "sv" => "Elin",
                "da" => "Sofie",
                "nb" | "no" => "Ida",
                "fi" => "Suvi",
                "ca" => "Arlet",
                "tr" => "Burcu",
                "hi" => "Kajal",
                "ar" => "Hala",
                "ja" => "Takumi",
                "ko" => "Seoyeon",
                "zh" => "Zhiyu",
                _ => return None,
            },
        };
        Some(voice)
    }

    /// Call AWS Polly to synthesize a single text batch
    async fn call_polly(&self, text: &str, voice_name: &str) -> Result<Vec<u8>, String> {
        let voice_id = VoiceId::from(voice_name);

        tracing::debug!(
            voice = voice_name,
            engine = "neural",
            text_length = text.len(),
            "Calling AWS Polly synthesize_speech"
        );

        let result = self
            .polly_client
            .synthesize_speech()
            .text(text)
            .voice_id(voice_id)
            .output_format(OutputFormat::Mp3)
            .engine(Engine::Neural)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    voice = voice_name,
                    text_length = text.len(),
                    "AWS Polly synthesize_speech failed"
                );
                format!("AWS Polly error: {}", e)
            })?;

        let audio_stream = result.audio_stream.collect().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to collect audio stream from Polly response");
            format!("Failed to read audio stream: {}", e)
        })?;

        Ok(audio_stream.into_bytes().to_vec())
    }
}

#[async_trait]
impl TtsRepository for PollyTtsRepository {
    async fn synthesize(&self, text: &str, language: &LanguageCode) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        let voice = Self::voice_for_language(language)
            .ok_or_else(|| format!("AWS Polly has no voice for language '{}'", language))?;

        let batches = split_into_batches(text, MAX_BATCH_SIZE);
        let mut merged_audio = Vec::new();
        for batch in &batches {
            merged_audio.extend(self.call_polly(batch, voice).await?);
        }

        tracing::info!(
            provider = "polly",
            voice = voice,
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
