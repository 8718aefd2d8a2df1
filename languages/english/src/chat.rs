use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};
use wordlog_config::provider::ChatProviderConfig;
use wordlog_core::dictionary::{Entry, EntrySource};
use wordlog_provider::{DefinitionProvider, ProviderError, ProviderMetadata};

use crate::extract::{ParsedDefinitions, parse_definitions};

/// Answer text locations used by the supported chat-completion APIs
const ANSWER_POINTERS: &[&str] = &["/choices/0/message/content", "/choices/0/messages/0/text"];

/// Definition provider backed by an OpenAI-style chat-completion endpoint
#[derive(Clone)]
pub struct ChatCompletionProvider {
    client: reqwest::Client,
    config: ChatProviderConfig,
    source: EntrySource,
    name: String,
}

impl ChatCompletionProvider {
    pub fn new(config: ChatProviderConfig, source: EntrySource) -> Self {
        let name = config.model.clone();
        Self {
            client: reqwest::Client::new(),
            config,
            source,
            name,
        }
    }

    pub fn primary(config: ChatProviderConfig) -> Self {
        Self::new(config, EntrySource::PrimaryModel)
    }

    pub fn backup(config: ChatProviderConfig) -> Self {
        Self::new(config, EntrySource::BackupModel)
    }

    fn request_body(&self, word: &str) -> Value {
        json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": system_prompt(&self.config.gloss_language) },
                { "role": "user", "content": user_prompt(word, &self.config.gloss_language) },
            ],
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
        })
    }
}

fn system_prompt(language: &str) -> String {
    format!(
        "You are a helpful assistant that provides {language} definitions for English words in JSON format."
    )
}

fn user_prompt(word: &str, language: &str) -> String {
    format!(
        "Provide the {language} definition for the English word \"{word}\". Return ONLY a JSON object:\n\
         {{\"definitions\":[{{\"partOfSpeech\":\"part of speech\",\"definition\":\"{language} definition\",\
         \"example\":\"English example sentence\",\"exampleTranslation\":\"{language} translation\"}}]}}\n\
         Only return JSON, nothing else."
    )
}

/// Pull the model's answer text out of a completion response
fn answer_text(response: &Value) -> Option<&str> {
    ANSWER_POINTERS
        .iter()
        .find_map(|pointer| response.pointer(pointer).and_then(Value::as_str))
}

#[async_trait]
impl DefinitionProvider for ChatCompletionProvider {
    async fn lookup(&self, word: &str) -> Result<Entry, ProviderError> {
        if !self.is_configured() {
            return Err(ProviderError::NotConfigured);
        }

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&self.request_body(word))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::from_status(status));
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(format!("Failed to parse response: {}", e)))?;

        let content = answer_text(&json)
            .ok_or_else(|| ProviderError::Parse("No answer in response".to_string()))?;

        let parsed = parse_definitions(content);
        if parsed.is_heuristic() {
            tracing::debug!("{} answered without usable JSON for '{}'", self.name, word);
        }

        match parsed {
            ParsedDefinitions::Failed => Err(ProviderError::Parse(format!(
                "No definitions in {} answer",
                self.name
            ))),
            parsed => Ok(Entry::new(word, parsed.into_senses(), self.source)),
        }
    }

    fn is_configured(&self) -> bool {
        self.config.is_usable()
    }

    fn timeout(&self) -> Duration {
        Duration::from_millis(self.config.timeout_ms)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: self.name.clone(),
            source: self.source,
        }
    }
}
