//! API key and database location resolution.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::CliError;

#[derive(Debug, Deserialize)]
struct ConfigFile {
    api_key: String,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("gamedex").join("config.toml"))
}

pub fn default_db_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("gamedex").join("favorites.db"))
}

/// Resolve the API key: CLI flag, then environment, then config file.
pub fn resolve_api_key(flag: Option<String>) -> Result<String, CliError> {
    if let Some(key) = flag {
        return Ok(key);
    }
    if let Ok(key) = std::env::var("RAWG_API_KEY") {
        if !key.is_empty() {
            return Ok(key);
        }
    }
    let path = config_path();
    if let Some(path) = &path {
        if path.exists() {
            let text = std::fs::read_to_string(path)?;
            let config: ConfigFile = toml::from_str(&text)
                .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
            return Ok(config.api_key);
        }
    }
    let hint = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "the config file".to_string());
    Err(CliError::MissingApiKey(hint))
}
