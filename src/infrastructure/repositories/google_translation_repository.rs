use super::text_batches::split_into_batches;
use super::translation_repository::TranslationRepository;
use crate::domain::translation::LanguageCode;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

const GOOGLE_TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";

/// The web endpoint rejects very long query strings
const MAX_BATCH_SIZE: usize = 4500;

/// Google web translate implementation of translation repository
pub struct GoogleTranslationRepository {
    http_client: reqwest::Client,
}

impl GoogleTranslationRepository {
    pub fn new(request_timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder().timeout(request_timeout).build()?;
        Ok(Self { http_client })
    }

    /// Extract the translated text from the nested array response.
    ///
    /// The payload looks like `[[["Hola","Hello",null,null,10], ...], null, "en", ...]`;
    /// the first element holds one segment per source sentence.
    pub fn parse_response(body: &Value) -> Result<String, String> {
        let segments = body
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| "Unexpected translation response format".to_string())?;

        let translated: String = segments
            .iter()
            .filter_map(|segment| segment.get(0).and_then(Value::as_str))
            .collect();

        if translated.trim().is_empty() {
            return Err("Translation response contained no text".to_string());
        }
        Ok(translated)
    }

    async fn call_google(&self, text: &str, target: &LanguageCode) -> Result<String, String> {
        tracing::debug!(
            target_language = %target,
            text_length = text.len(),
            "Calling Google translate"
        );

        let response = self
            .http_client
            .get(GOOGLE_TRANSLATE_URL)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| format!("Google translate request failed: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(status = %status, target_language = %target, "Google translate rejected request");
            return Err(format!("Google translate error ({}): {}", status, error_text));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse Google translate response: {}", e))?;

        Self::parse_response(&body)
    }
}

#[async_trait]
impl TranslationRepository for GoogleTranslationRepository {
    async fn translate(&self, text: &str, target: &LanguageCode) -> Result<String, String> {
        let start_time = std::time::Instant::now();
        let batches = split_into_batches(text, MAX_BATCH_SIZE);

        let mut translated = Vec::with_capacity(batches.len());
        for batch in &batches {
            translated.push(self.call_google(batch, target).await?);
        }

        tracing::info!(
            provider = "google",
            target_language = %target,
            batch_count = batches.len(),
            latency_ms = start_time.elapsed().as_millis(),
            "Translation completed"
        );

        Ok(translated.join(" "))
    }
}
