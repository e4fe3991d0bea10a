use super::text_batches::split_into_batches;
use super::tts_repository::TtsRepository;
use crate::domain::translation::LanguageCode;
use async_trait::async_trait;
use std::time::Duration;

const GOOGLE_TTS_URL: &str = "https://translate.google.com/translate_tts";

/// The translate TTS endpoint only accepts short snippets
const MAX_BATCH_SIZE: usize = 100;

/// Google translate TTS implementation of TTS repository
pub struct GoogleTtsRepository {
    http_client: reqwest::Client,
}

impl GoogleTtsRepository {
    pub fn new(request_timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder().timeout(request_timeout).build()?;
        Ok(Self { http_client })
    }

    /// Call the TTS endpoint for a single text batch
    async fn call_google(
        &self,
        text: &str,
        language: &LanguageCode,
        index: usize,
        total: usize,
    ) -> Result<Vec<u8>, String> {
        tracing::debug!(
            language = %language,
            batch_index = index,
            text_length = text.len(),
            "Calling Google TTS"
        );

        let text_len = text.chars().count().to_string();
        let idx = index.to_string();
        let total = total.to_string();

        let response = self
            .http_client
            .get(GOOGLE_TTS_URL)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language.as_str()),
                ("q", text),
                ("textlen", text_len.as_str()),
                ("idx", idx.as_str()),
                ("total", total.as_str()),
            ])
            .send()
            .await
            .map_err(|e| format!("Google TTS request failed: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!(status = %status, language = %language, "Google TTS rejected request");
            return Err(format!(
                "Google TTS error ({}): language '{}' may not be supported",
                status, language
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| format!("Failed to read Google TTS audio: {}", e))?;

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl TtsRepository for GoogleTtsRepository {
    async fn synthesize(&self, text: &str, language: &LanguageCode) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        let batches = split_into_batches(text, MAX_BATCH_SIZE);
        let mut merged_audio = Vec::new();
        for (index, batch) in batches.iter().enumerate() {
            let audio_data = self.call_google(batch, language, index, batches.len()).await?;
            merged_audio.extend(audio_data);
        }

        tracing::info!(
            provider = "google",
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
