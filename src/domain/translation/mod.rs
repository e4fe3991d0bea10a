pub mod error;
pub mod language;
pub mod service;

pub use error::TranslationServiceError;
pub use language::LanguageCode;
pub use service::{audio_filename, TranslationService, TranslationServiceApi};

use serde::{Deserialize, Serialize};

/// Request for POST /translate
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub script: Option<String>,
    pub languages: Option<Vec<String>>,
}

/// Response for POST /translate, one entry per requested language in order
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub results: Vec<LanguageOutcome>,
}

/// Result of translating and synthesizing the script for one language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LanguageOutcome {
    Translated {
        language: String,
        translation: String,
        audio_file: String,
    },
    Failed {
        language: String,
        error: String,
    },
}

impl LanguageOutcome {
    pub fn language(&self) -> &str {
        match self {
            LanguageOutcome::Translated { language, .. } | LanguageOutcome::Failed { language, .. } => {
                language
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LanguageOutcome::Translated { .. })
    }
}
