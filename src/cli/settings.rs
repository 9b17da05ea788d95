use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use workon::client::ClientConfig;

pub const CONFIG_FILE_NAME: &str = ".workon_cli.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("could not encode settings: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliSettings {
    pub endpoint: String,
    pub key_id: String,
    pub timeout: u64,
    pub source_system: String,
}

impl Default for CliSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:5001".to_string(),
            key_id: "test-key-id".to_string(),
            timeout: 30,
            source_system: "WorkOn CLI".to_string(),
        }
    }
}

impl CliSettings {
    /// `$HOME/.workon_cli.toml`, or the working directory when `HOME` is unset.
    pub fn default_path() -> PathBuf {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_FILE_NAME)
    }

    /// A missing file yields the defaults; keys absent from the file keep their default.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn masked_key_id(&self) -> String {
        "*".repeat(self.key_id.chars().count())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.endpoint)
            .with_key_id(&self.key_id)
            .with_timeout_seconds(self.timeout)
    }
}
