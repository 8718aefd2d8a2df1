use serde::{Deserialize, Serialize};

use crate::provider::env_u64;

fn default_enabled() -> bool {
    true
}

fn default_batch_concurrency() -> usize {
    3
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ResolverConfig {
    /// Consult the curated builtin table before any remote provider
    #[serde(default = "default_enabled")]
    pub builtin_enabled: bool,
    /// Retry placeholder results with the morphology base form
    #[serde(default = "default_enabled")]
    pub retry_with_base_form: bool,
    /// Max resolutions in flight during batch lookups
    #[serde(default = "default_batch_concurrency")]
    pub batch_concurrency: usize,
}

impl ResolverConfig {
    pub fn new() -> Self {
        let batch_concurrency = env_u64("WORDLOG_BATCH_CONCURRENCY")
            .map(|v| v as usize)
            .filter(|v| *v > 0)
            .unwrap_or_else(default_batch_concurrency);

        Self {
            builtin_enabled: default_enabled(),
            retry_with_base_form: default_enabled(),
            batch_concurrency,
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            builtin_enabled: default_enabled(),
            retry_with_base_form: default_enabled(),
            batch_concurrency: default_batch_concurrency(),
        }
    }
}
