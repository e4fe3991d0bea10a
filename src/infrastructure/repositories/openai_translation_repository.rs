use super::translation_repository::TranslationRepository;
use crate::domain::translation::LanguageCode;
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;

/// OpenAI chat-completions implementation of translation repository
pub struct OpenAiTranslationRepository {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
}

impl OpenAiTranslationRepository {
    pub fn new(client: Arc<Client<OpenAIConfig>>, model: String) -> Self {
        Self { client, model }
    }

    fn system_prompt(target: &LanguageCode) -> String {
        format!(
            "You are a professional translator. \
            Translate the user's text from its original language into the language with \
            code '{}'. Keep the meaning, tone and punctuation. \
            ONLY include the translated text in your response.",
            target
        )
    }
}

#[async_trait]
impl TranslationRepository for OpenAiTranslationRepository {
    async fn translate(&self, text: &str, target: &LanguageCode) -> Result<String, String> {
        let start_time = std::time::Instant::now();

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .temperature(0.3)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(Self::system_prompt(target))
                    .build()
                    .map_err(|e| format!("Invalid translation prompt: {}", e))?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(text)
                    .build()
                    .map_err(|e| format!("Invalid translation prompt: {}", e))?
                    .into(),
            ])
            .build()
            .map_err(|e| format!("Invalid translation request: {}", e))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                model = %self.model,
                target_language = %target,
                "OpenAI translation call failed"
            );
            format!("OpenAI translation error: {}", e)
        })?;

        let translated = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| "OpenAI returned no translation".to_string())?;

        tracing::info!(
            provider = "openai",
            model = %self.model,
            target_language = %target,
            latency_ms = start_time.elapsed().as_millis(),
            "Translation completed"
        );

        Ok(translated.trim().to_string())
    }
}
