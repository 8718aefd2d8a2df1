use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_temperature() -> f32 {
    0.3
}

fn default_max_tokens() -> u32 {
    500
}

fn default_gloss_language() -> String {
    "English".to_string()
}

fn default_primary_url() -> String {
    "https://open.bigmodel.cn/api/paas/v4/chat/completions".to_string()
}

fn default_primary_model() -> String {
    "glm-4-flash".to_string()
}

fn default_primary_timeout_ms() -> u64 {
    8000
}

fn default_backup_url() -> String {
    "https://api.minimax.chat/v1/text/chatcompletion_v2".to_string()
}

fn default_backup_model() -> String {
    "abab6.5s-chat".to_string()
}

fn default_backup_timeout_ms() -> u64 {
    10000
}

fn default_dictionary_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en".to_string()
}

fn default_dictionary_timeout_ms() -> u64 {
    5000
}

/// Chat-completion definition provider settings.
///
/// Endpoint, model and timeout are required when the block is present in a
/// config file; omit the whole block to get the built-in defaults.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChatProviderConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Empty key means the provider is skipped
    #[serde(default)]
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub timeout_ms: u64,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Language the definitions are requested in
    #[serde(default = "default_gloss_language")]
    pub gloss_language: String,
}

impl ChatProviderConfig {
    /// Primary provider, key from `GLM_API_KEY`
    pub fn primary() -> Self {
        Self {
            enabled: default_enabled(),
            api_key: env::var("GLM_API_KEY").unwrap_or_default(),
            api_url: env::var("WORDLOG_PRIMARY_URL").unwrap_or_else(|_| default_primary_url()),
            model: env::var("WORDLOG_PRIMARY_MODEL").unwrap_or_else(|_| default_primary_model()),
            timeout_ms: env_u64("WORDLOG_PRIMARY_TIMEOUT_MS")
                .unwrap_or_else(default_primary_timeout_ms),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            gloss_language: env::var("WORDLOG_GLOSS_LANGUAGE")
                .unwrap_or_else(|_| default_gloss_language()),
        }
    }

    /// Backup provider, key from `MINIMAX_API_KEY`
    pub fn backup() -> Self {
        Self {
            enabled: default_enabled(),
            api_key: env::var("MINIMAX_API_KEY").unwrap_or_default(),
            api_url: env::var("WORDLOG_BACKUP_URL").unwrap_or_else(|_| default_backup_url()),
            model: env::var("WORDLOG_BACKUP_MODEL").unwrap_or_else(|_| default_backup_model()),
            timeout_ms: env_u64("WORDLOG_BACKUP_TIMEOUT_MS")
                .unwrap_or_else(default_backup_timeout_ms),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            gloss_language: env::var("WORDLOG_GLOSS_LANGUAGE")
                .unwrap_or_else(|_| default_gloss_language()),
        }
    }

    /// Enabled and holding a credential
    pub fn is_usable(&self) -> bool {
        self.enabled && !self.api_key.trim().is_empty()
    }
}

impl Default for ChatProviderConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_key: String::new(),
            api_url: default_primary_url(),
            model: default_primary_model(),
            timeout_ms: default_primary_timeout_ms(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            gloss_language: default_gloss_language(),
        }
    }
}

/// Public dictionary API settings (no key required)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DictionaryApiConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_dictionary_url")]
    pub api_url: String,
    #[serde(default = "default_dictionary_timeout_ms")]
    pub timeout_ms: u64,
}

impl DictionaryApiConfig {
    pub fn new() -> Self {
        Self {
            enabled: default_enabled(),
            api_url: env::var("WORDLOG_DICTIONARY_URL")
                .unwrap_or_else(|_| default_dictionary_url()),
            timeout_ms: env_u64("WORDLOG_DICTIONARY_TIMEOUT_MS")
                .unwrap_or_else(default_dictionary_timeout_ms),
        }
    }
}

impl Default for DictionaryApiConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_url: default_dictionary_url(),
            timeout_ms: default_dictionary_timeout_ms(),
        }
    }
}

/// All remote providers, in lookup priority order
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ProvidersConfig {
    pub primary: ChatProviderConfig,
    #[serde(default = "backup_defaults")]
    pub backup: ChatProviderConfig,
    pub dictionary: DictionaryApiConfig,
}

fn backup_defaults() -> ChatProviderConfig {
    ChatProviderConfig {
        api_url: default_backup_url(),
        model: default_backup_model(),
        timeout_ms: default_backup_timeout_ms(),
        ..ChatProviderConfig::default()
    }
}

impl ProvidersConfig {
    pub fn new() -> Self {
        Self {
            primary: ChatProviderConfig::primary(),
            backup: ChatProviderConfig::backup(),
            dictionary: DictionaryApiConfig::new(),
        }
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            primary: ChatProviderConfig::default(),
            backup: backup_defaults(),
            dictionary: DictionaryApiConfig::default(),
        }
    }
}

pub(crate) fn env_u64(key: &str) -> Option<u64> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}
