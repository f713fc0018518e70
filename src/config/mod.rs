use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    currency::CurrencyCode,
    errors::ExpenseError,
    utils::paths::{config_file_in, ensure_dir, write_atomic},
};

const DEFAULT_STORAGE_FILE: &str = "storage.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Currency shown until the user picks one. Stored selections take precedence.
    pub default_currency: String,
    /// Storage file name, relative to the data directory unless absolute.
    pub storage_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_currency: CurrencyCode::default().as_str().into(),
            storage_file: PathBuf::from(DEFAULT_STORAGE_FILE),
        }
    }
}

impl Config {
    /// Resolves the configured fallback currency, ignoring codes outside the catalog.
    pub fn fallback_currency(&self) -> CurrencyCode {
        CurrencyCode::parse(&self.default_currency).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "configured default currency ignored");
            CurrencyCode::default()
        })
    }

    pub fn storage_path_in(&self, base: &Path) -> PathBuf {
        if self.storage_file.is_absolute() {
            self.storage_file.clone()
        } else {
            base.join(&self.storage_file)
        }
    }
}

/// Loads and saves [`Config`] as `config.json` inside the data directory.
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(base: impl Into<PathBuf>) -> Result<Self, ExpenseError> {
        let base = base.into();
        ensure_dir(&base)?;
        let path = config_file_in(&base);
        Ok(Self { base, path })
    }

    /// A missing file gives defaults. An unreadable one is logged and also
    /// gives defaults; the next `save` replaces it.
    pub fn load(&self) -> Result<Config, ExpenseError> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read(&self.path)?;
        match serde_json::from_slice(&data) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "ignoring unreadable config file"
                );
                Ok(Config::default())
            }
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ExpenseError> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
