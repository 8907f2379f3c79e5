//! Persistent user preferences for the shell. Ledger data itself is never stored.

use std::{
    env,
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Period;

const CONFIG_DIR_ENV: &str = "FINANCE_CORE_CONFIG_DIR";
const CONFIG_FILE_NAME: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),
}

/// Stores user-configurable shell preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Language tag that selects the amount separators, e.g. `pt-BR`.
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "Config::default_true")]
    pub ui_color_enabled: bool,
    #[serde(default = "Config::default_true")]
    pub seed_sample_data: bool,
    #[serde(default)]
    pub default_period: Period,
    #[serde(default)]
    pub high_contrast: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            currency_symbol: Self::default_currency_symbol(),
            ui_color_enabled: true,
            seed_sample_data: true,
            default_period: Period::All,
            high_contrast: false,
        }
    }
}

impl Config {
    pub fn default_locale() -> String {
        "en-US".into()
    }

    pub fn default_currency_symbol() -> String {
        "R$".into()
    }

    fn default_true() -> bool {
        true
    }
}

/// Handles loading and saving [`Config`] as JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Resolves the config directory from `FINANCE_CORE_CONFIG_DIR`, falling
    /// back to the platform config dir.
    pub fn from_env() -> Self {
        let base = env::var_os(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                dirs::config_dir()
                    .or_else(dirs::home_dir)
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("finance_core")
            });
        Self::new(base.join(CONFIG_FILE_NAME))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns defaults when no file has been written yet.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.config_path)?;
        serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.config_path);
        write_all(&tmp, &json)?;
        fs::rename(&tmp, &self.config_path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tmp_path_appends_suffix() {
        let path = PathBuf::from("/tmp/finance/config.json");
        assert_eq!(tmp_path(&path), PathBuf::from("/tmp/finance/config.json.tmp"));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{ "locale": "pt-BR" }"#).unwrap();
        assert_eq!(config.locale, "pt-BR");
        assert_eq!(config.currency_symbol, "R$");
        assert!(config.seed_sample_data);
        assert_eq!(config.default_period, Period::All);
    }

    #[test]
    fn locale_is_optional() {
        let config: Config = serde_json::from_str(r#"{ "currency_symbol": "$" }"#).unwrap();
        assert_eq!(config.locale, "en-US");
        assert_eq!(config.currency_symbol, "$");
    }
}
