use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;
use wordlog_config::Config;

/// Config file picked up from the working directory when no path is given
const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Resolve the active configuration.
///
/// An explicit path must exist. Otherwise `config.json` in the working
/// directory is used when present, and the environment when not. Keys left
/// empty in a file are filled from the environment.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match path {
        Some(path) => Some(path.to_path_buf()),
        None => Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|p| p.exists()),
    };

    let Some(path) = path else {
        tracing::info!("No config file, reading settings from the environment");
        return Ok(Config::new());
    };

    tracing::info!("Loading config from {}", path.display());
    let mut config = Config::from_file(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;

    fill_keys_from_env(&mut config);
    Ok(config)
}

fn fill_keys_from_env(config: &mut Config) {
    let providers = &mut config.providers;
    for (provider, var) in [
        (&mut providers.primary, "GLM_API_KEY"),
        (&mut providers.backup, "MINIMAX_API_KEY"),
    ] {
        if provider.api_key.trim().is_empty() {
            if let Ok(key) = env::var(var) {
                provider.api_key = key;
            }
        }
    }
}
