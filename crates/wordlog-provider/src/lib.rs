use std::time::Duration;

use wordlog_core::dictionary::{Entry, EntrySource};

/// Definition lookup source interface
#[async_trait::async_trait]
pub trait DefinitionProvider: Send + Sync {
    /// Look up a normalized word. An `Ok` entry may still carry no valid
    /// sense; the resolver decides whether that counts as a hit.
    async fn lookup(&self, word: &str) -> Result<Entry, ProviderError>;

    /// Whether credentials are present. Unconfigured providers are skipped
    /// without being attempted.
    fn is_configured(&self) -> bool;

    /// How long a single lookup may take before it is abandoned
    fn timeout(&self) -> Duration;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub source: EntrySource,
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Provider is not configured")]
    NotConfigured,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status}")]
    Http { status: u16 },

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,

    #[error("No definition found")]
    NotFound,

    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl ProviderError {
    /// Map a non-success status code onto the error taxonomy
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        match status.as_u16() {
            404 => ProviderError::NotFound,
            429 => ProviderError::RateLimitExceeded,
            401 | 403 => ProviderError::AuthenticationError,
            code => ProviderError::Http { status: code },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_status_codes() {
        assert!(matches!(
            ProviderError::from_status(reqwest::StatusCode::TOO_MANY_REQUESTS),
            ProviderError::RateLimitExceeded
        ));
        assert!(matches!(
            ProviderError::from_status(reqwest::StatusCode::FORBIDDEN),
            ProviderError::AuthenticationError
        ));
        assert!(matches!(
            ProviderError::from_status(reqwest::StatusCode::NOT_FOUND),
            ProviderError::NotFound
        ));
        assert!(matches!(
            ProviderError::from_status(reqwest::StatusCode::BAD_GATEWAY),
            ProviderError::Http { status: 502 }
        ));
    }
}
