//! Fallback provider for the public Free Dictionary API.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use wordlog_config::provider::DictionaryApiConfig;
use wordlog_core::dictionary::{Entry, EntrySource, PartOfSpeech, Sense};
use wordlog_provider::{DefinitionProvider, ProviderError, ProviderMetadata};

/// Senses taken from one meaning block
const MAX_SENSES_PER_MEANING: usize = 3;
/// Stop reading meanings once this many senses are collected
const MAX_TOTAL_SENSES: usize = 3;

#[derive(Debug, Deserialize)]
struct ApiEntry {
    #[serde(default)]
    phonetic: Option<String>,
    #[serde(default)]
    phonetics: Vec<ApiPhonetic>,
    #[serde(default)]
    meanings: Vec<ApiMeaning>,
}

#[derive(Debug, Deserialize)]
struct ApiPhonetic {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    audio: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiMeaning {
    #[serde(default)]
    part_of_speech: String,
    #[serde(default)]
    definitions: Vec<ApiDefinition>,
}

#[derive(Debug, Deserialize)]
struct ApiDefinition {
    #[serde(default)]
    definition: String,
    #[serde(default)]
    example: Option<String>,
}

#[derive(Clone)]
pub struct FreeDictionaryProvider {
    client: reqwest::Client,
    config: DictionaryApiConfig,
}

impl FreeDictionaryProvider {
    pub fn new(config: DictionaryApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn word_url(&self, word: &str) -> Result<reqwest::Url, ProviderError> {
        let mut url = reqwest::Url::parse(&self.config.api_url)
            .map_err(|e| ProviderError::InvalidEndpoint(format!("{}: {}", self.config.api_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| ProviderError::InvalidEndpoint(self.config.api_url.clone()))?
            .pop_if_empty()
            .push(word);

        Ok(url)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Map the first API entry onto a dictionary entry
fn to_entry(word: &str, api: &ApiEntry) -> Entry {
    let mut senses = Vec::new();
    for meaning in &api.meanings {
        let pos = PartOfSpeech::from_provider_label(&meaning.part_of_speech);

        for def in meaning.definitions.iter().take(MAX_SENSES_PER_MEANING) {
            let mut sense = Sense::new(pos, def.definition.trim());
            if let Some(example) = non_blank(&def.example) {
                sense = sense.with_example(example);
            }
            senses.push(sense);
        }

        if senses.len() >= MAX_TOTAL_SENSES {
            break;
        }
    }

    let mut entry = Entry::new(word, senses, EntrySource::Dictionary);
    entry.pronunciation = non_blank(&api.phonetic)
        .or_else(|| api.phonetics.iter().find_map(|p| non_blank(&p.text)))
        .map(str::to_string);
    entry.audio_url = api
        .phonetics
        .iter()
        .find_map(|p| non_blank(&p.audio))
        .map(str::to_string);
    entry
}

#[async_trait]
impl DefinitionProvider for FreeDictionaryProvider {
    async fn lookup(&self, word: &str) -> Result<Entry, ProviderError> {
        if !self.is_configured() {
            return Err(ProviderError::NotConfigured);
        }

        let url = self.word_url(word)?;
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::from_status(status));
        }

        let entries: Vec<ApiEntry> = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(format!("Failed to parse response: {}", e)))?;

        let first = entries.first().ok_or(ProviderError::NotFound)?;
        Ok(to_entry(word, first))
    }

    fn is_configured(&self) -> bool {
        self.config.enabled
    }

    fn timeout(&self) -> Duration {
        Duration::from_millis(self.config.timeout_ms)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Free Dictionary API".to_string(),
            source: EntrySource::Dictionary,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::serve_once;

    const SAMPLE: &str = r#"[{
        "word": "run",
        "phonetics": [
            { "text": "/ɹʌn/", "audio": "" },
            { "audio": "https://example.org/run-us.mp3" }
        ],
        "meanings": [
            {
                "partOfSpeech": "verb",
                "definitions": [
                    { "definition": "To move swiftly.", "example": "Run to the store." },
                    { "definition": "To flee." },
                    { "definition": "To go at a fast pace." },
                    { "definition": "To compete in a race." }
                ]
            },
            {
                "partOfSpeech": "noun",
                "definitions": [{ "definition": "An act of running." }]
            }
        ]
    }, {
        "word": "run",
        "meanings": [{ "partOfSpeech": "adjective", "definitions": [{ "definition": "Melted." }] }]
    }]"#;

    fn config(url: &str) -> DictionaryApiConfig {
        DictionaryApiConfig {
            api_url: url.to_string(),
            ..DictionaryApiConfig::default()
        }
    }

    #[test]
    fn caps_senses_and_captures_phonetics() {
        let entries: Vec<ApiEntry> = serde_json::from_str(SAMPLE).unwrap();
        let entry = to_entry("run", &entries[0]);

        assert_eq!(entry.senses.len(), 3);
        assert!(entry.senses.iter().all(|s| s.part_of_speech == PartOfSpeech::Verb));
        assert_eq!(entry.senses[0].example.as_deref(), Some("Run to the store."));
        assert_eq!(entry.pronunciation.as_deref(), Some("/ɹʌn/"));
        assert_eq!(entry.audio_url.as_deref(), Some("https://example.org/run-us.mp3"));
        assert_eq!(entry.source, EntrySource::Dictionary);
    }

    #[test]
    fn short_meanings_continue_to_the_next_block() {
        let api: ApiEntry = serde_json::from_str(
            r#"{
                "meanings": [
                    { "partOfSpeech": "noun", "definitions": [{ "definition": "one" }] },
                    { "partOfSpeech": "verb", "definitions": [{ "definition": "two" }, { "definition": "three" }, { "definition": "four" }] },
                    { "partOfSpeech": "adverb", "definitions": [{ "definition": "five" }] }
                ]
            }"#,
        )
        .unwrap();

        let definitions: Vec<String> = to_entry("x", &api)
            .senses
            .into_iter()
            .map(|s| s.definition)
            .collect();
        assert_eq!(definitions, vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn word_is_appended_as_path_segment() {
        let provider = FreeDictionaryProvider::new(DictionaryApiConfig::default());
        assert_eq!(
            provider.word_url("well-being").unwrap().as_str(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/well-being"
        );

        let trailing = FreeDictionaryProvider::new(config("http://localhost/entries/"));
        assert_eq!(
            trailing.word_url("run").unwrap().as_str(),
            "http://localhost/entries/run"
        );
    }

    #[test]
    fn rejects_bad_endpoint() {
        let provider = FreeDictionaryProvider::new(config("not a url"));
        assert!(matches!(
            provider.word_url("run"),
            Err(ProviderError::InvalidEndpoint(_))
        ));
    }

    #[tokio::test]
    async fn looks_up_first_entry() {
        let url = serve_once(200, SAMPLE).await;
        let provider = FreeDictionaryProvider::new(config(&url));

        let entry = provider.lookup("run").await.unwrap();
        assert_eq!(entry.word, "run");
        assert_eq!(entry.senses[1].definition, "To flee.");
    }

    #[tokio::test]
    async fn missing_word_is_not_found() {
        let url = serve_once(404, r#"{"title":"No Definitions Found"}"#).await;
        let provider = FreeDictionaryProvider::new(config(&url));

        assert!(matches!(
            provider.lookup("zzxq").await,
            Err(ProviderError::NotFound)
        ));
    }
}
