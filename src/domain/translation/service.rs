use super::error::TranslationServiceError;
use super::language::LanguageCode;
use super::{LanguageOutcome, TranslateRequest};
use crate::infrastructure::repositories::{TranslationRepository, TtsRepository};
use crate::infrastructure::storage::FileStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use moka::future::Cache;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

pub struct TranslationService {
    translator: Arc<dyn TranslationRepository>,
    tts_repo: Arc<dyn TtsRepository>,
    file_store: Arc<FileStore>,
    call_timeout: Duration,
    cache: Option<Cache<String, String>>,
}

impl TranslationService {
    pub fn new(
        translator: Arc<dyn TranslationRepository>,
        tts_repo: Arc<dyn TtsRepository>,
        file_store: Arc<FileStore>,
        call_timeout: Duration,
        cache_enabled: bool,
    ) -> Self {
        let cache = if cache_enabled {
            Some(
                Cache::builder()
                    .max_capacity(500)
                    .time_to_idle(Duration::from_secs(30 * 60)) // 30 minutes, refreshes on access
                    .build(),
            )
        } else {
            None
        };

        Self {
            translator,
            tts_repo,
            file_store,
            call_timeout,
            cache,
        }
    }
}

/// File name for a freshly synthesized clip: `audio_<YYYYMMDD_HHMMSS>_<lang>_<8 hex>.mp3`
pub fn audio_filename(now: DateTime<Utc>, language: &LanguageCode) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "audio_{}_{}_{}.mp3",
        now.format("%Y%m%d_%H%M%S"),
        language,
        &suffix[..8]
    )
}

#[async_trait]
pub trait TranslationServiceApi: Send + Sync {
    /// Translate the script into every requested language and synthesize speech for each.
    ///
    /// Fails only when the script or language list is missing. Per-language
    /// failures are reported in the returned outcomes and never stop the batch.
    async fn translate_and_synthesize(
        &self,
        request: TranslateRequest,
    ) -> Result<Vec<LanguageOutcome>, TranslationServiceError>;
}

#[async_trait]
impl TranslationServiceApi for TranslationService {
    async fn translate_and_synthesize(
        &self,
        request: TranslateRequest,
    ) -> Result<Vec<LanguageOutcome>, TranslationServiceError> {
        let script = request.script.unwrap_or_default();
        let languages = request.languages.unwrap_or_default();

        if script.trim().is_empty() || languages.is_empty() {
            return Err(TranslationServiceError::Invalid(
                "Script and languages are required".to_string(),
            ));
        }

        tracing::info!(
            script_length = script.len(),
            language_count = languages.len(),
            "Translation batch started"
        );

        let mut results = Vec::with_capacity(languages.len());
        for language in &languages {
            results.push(self.process_language(&script, language).await);
        }

        let succeeded = results.iter().filter(|r| r.is_success()).count();
        tracing::info!(
            succeeded,
            failed = results.len() - succeeded,
            "Translation batch finished"
        );

        Ok(results)
    }
}

impl TranslationService {
    async fn process_language(&self, script: &str, raw_language: &str) -> LanguageOutcome {
        let start_time = std::time::Instant::now();

        match self.translate_and_store(script, raw_language).await {
            Ok((translation, file_name)) => {
                tracing::info!(
                    language = raw_language,
                    file_name = %file_name,
                    latency_ms = start_time.elapsed().as_millis(),
                    "Language processed"
                );
                LanguageOutcome::Translated {
                    language: raw_language.to_string(),
                    translation,
                    audio_file: FileStore::url_for(&file_name),
                }
            }
            Err(error) => {
                tracing::warn!(
                    language = raw_language,
                    error = %error,
                    "Error processing language"
                );
                LanguageOutcome::Failed {
                    language: raw_language.to_string(),
                    error,
                }
            }
        }
    }

    /// Translate, synthesize and write the clip; returns the translation and stored file name
    async fn translate_and_store(
        &self,
        script: &str,
        raw_language: &str,
    ) -> Result<(String, String), String> {
        let language = LanguageCode::parse(raw_language)?;

        let translation = self.translate(script, &language).await?;

        let audio = self
            .with_timeout(
                "Speech synthesis",
                self.tts_repo.synthesize(&translation, &language),
            )
            .await?;
        if audio.is_empty() {
            return Err("Speech synthesis returned no audio".to_string());
        }

        let file_name = audio_filename(Utc::now(), &language);
        self.file_store
            .write(&file_name, &audio)
            .await
            .map_err(|e| e.to_string())?;

        Ok((translation, file_name))
    }

    async fn translate(&self, script: &str, language: &LanguageCode) -> Result<String, String> {
        let cache_key = format!("{}:{}", language, script);

        if let Some(cache) = &self.cache {
            if let Some(cached) = cache.get(&cache_key).await {
                tracing::debug!(language = %language, "Translation cache hit");
                return Ok(cached);
            }
        }

        let translation = self
            .with_timeout("Translation", self.translator.translate(script, language))
            .await?;
        let translation = translation.trim().to_string();
        if translation.is_empty() {
            return Err("Translation returned empty text".to_string());
        }

        if let Some(cache) = &self.cache {
            cache.insert(cache_key, translation.clone()).await;
        }

        Ok(translation)
    }

    async fn with_timeout<T>(
        &self,
        stage: &str,
        call: impl Future<Output = Result<T, String>>,
    ) -> Result<T, String> {
        match tokio::time::timeout(self.call_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(format!("{} timed out after {:?}", stage, self.call_timeout)),
        }
    }
}
