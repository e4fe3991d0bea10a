use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // File store
    pub audio_dir: String,
    // Collaborators
    pub translation_provider: TranslationProvider,
    pub tts_provider: TtsProvider,
    pub openai_api_key: Option<String>,
    pub openai_translation_model: String,
    pub openai_tts_model: String,
    pub openai_tts_voice: String,
    pub aws_region: String,
    pub collaborator_timeout_secs: u64,
    // Translation cache
    pub translation_cache_enabled: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    Google,
    OpenAi,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TtsProvider {
    Google,
    OpenAi,
    Polly,
}

impl TranslationProvider {
    pub fn parse(value: &str) -> Result<Self, String> {
        match value.to_lowercase().as_str() {
            "google" => Ok(TranslationProvider::Google),
            "openai" => Ok(TranslationProvider::OpenAi),
            other => Err(format!("Unknown TRANSLATION_PROVIDER: {}", other)),
        }
    }
}

impl TtsProvider {
    pub fn parse(value: &str) -> Result<Self, String> {
        match value.to_lowercase().as_str() {
            "google" => Ok(TtsProvider::Google),
            "openai" => Ok(TtsProvider::OpenAi),
            "polly" => Ok(TtsProvider::Polly),
            other => Err(format!("Unknown TTS_PROVIDER: {}", other)),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let translation_provider = TranslationProvider::parse(
            &env::var("TRANSLATION_PROVIDER").unwrap_or_else(|_| "google".to_string()),
        )?;
        let tts_provider =
            TtsProvider::parse(&env::var("TTS_PROVIDER").unwrap_or_else(|_| "google".to_string()))?;
        let openai_api_key = env::var("OPENAI_API_KEY").ok().filter(|key| !key.is_empty());

        let needs_openai = translation_provider == TranslationProvider::OpenAi
            || tts_provider == TtsProvider::OpenAi;
        if needs_openai && openai_api_key.is_none() {
            return Err("OPENAI_API_KEY is required when an OpenAI provider is selected".into());
        }

        let config = Config {
            database_url: env::var("DATABASE_URL")?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5001".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .as_str()
            {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            audio_dir: env::var("AUDIO_DIR").unwrap_or_else(|_| "translations".to_string()),
            translation_provider,
            tts_provider,
            openai_api_key,
            openai_translation_model: env::var("OPENAI_TRANSLATION_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            openai_tts_model: env::var("OPENAI_TTS_MODEL").unwrap_or_else(|_| "tts-1".to_string()),
            openai_tts_voice: env::var("OPENAI_TTS_VOICE").unwrap_or_default(),
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "eu-west-1".to_string()),
            collaborator_timeout_secs: env::var("COLLABORATOR_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()?,
            translation_cache_enabled: env::var("TRANSLATION_CACHE_ENABLED")
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(false),
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn collaborator_timeout(&self) -> Duration {
        Duration::from_secs(self.collaborator_timeout_secs)
    }
}
