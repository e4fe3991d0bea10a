use async_trait::async_trait;
use scriptcast_backend::domain::translation::LanguageCode;
use scriptcast_backend::infrastructure::repositories::{TranslationRepository, TtsRepository};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Translation to this language never finishes within the test timeout
pub const SLOW_TRANSLATION_LANGUAGE: &str = "de";

/// MP3 frame header, enough for the store and media endpoint
pub const FAKE_AUDIO: &[u8] = &[0xFF, 0xFB, 0x90, 0x44, 0x00, 0x00];

/// Translator that prefixes the text with the target language
pub struct FakeTranslator {
    calls: AtomicUsize,
}

impl FakeTranslator {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranslationRepository for FakeTranslator {
    async fn translate(&self, text: &str, target: &LanguageCode) -> Result<String, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if target.as_str() == SLOW_TRANSLATION_LANGUAGE {
            tokio::time::sleep(Duration::from_secs(5)).await;
        }
        Ok(format!("[{}] {}", target, text))
    }
}

/// Synthesizer returning a fixed clip, failing for one language
pub struct FakeTts {
    calls: AtomicUsize,
    failing_language: &'static str,
}

impl FakeTts {
    pub fn failing_for(language: &'static str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            failing_language: language,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TtsRepository for FakeTts {
    async fn synthesize(&self, _text: &str, language: &LanguageCode) -> Result<Vec<u8>, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if language.as_str() == self.failing_language {
            return Err(format!("No voice available for {}", language));
        }
        Ok(FAKE_AUDIO.to_vec())
    }
}
