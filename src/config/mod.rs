use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    errors::{Result, StateError},
    utils::{
        paths::{app_data_dir, config_file_in, state_dir_in},
        persistence::{ensure_dir, write_atomic},
    },
};

pub const DEFAULT_NAMESPACE: &str = "financial_statements";
pub const DEFAULT_NUM_PERIODS: usize = 12;

/// Storage layout and defaults for the state store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage_namespace: String,
    pub state_key: String,
    pub version_key: String,
    /// Written next to every saved blob; a mismatch on load is logged.
    pub schema_version: String,
    pub default_num_periods: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_namespace: DEFAULT_NAMESPACE.into(),
            state_key: "state".into(),
            version_key: "version".into(),
            schema_version: env!("CARGO_PKG_VERSION").into(),
            default_num_periods: DEFAULT_NUM_PERIODS,
            data_dir: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        let keys = [
            ("storage_namespace", &self.storage_namespace),
            ("state_key", &self.state_key),
            ("version_key", &self.version_key),
        ];
        for (name, value) in keys {
            if value.trim().is_empty() {
                return Err(StateError::InvalidArgument(format!("{} must not be empty", name)));
            }
        }
        if self.state_key == self.version_key {
            return Err(StateError::InvalidArgument(
                "state_key and version_key must differ".into(),
            ));
        }
        Ok(())
    }

    /// Directory for persisted state blobs: `data_dir` if set, else the app data dir.
    pub fn resolve_state_dir(&self) -> PathBuf {
        let base = self.data_dir.clone().unwrap_or_else(app_data_dir);
        state_dir_in(&base)
    }
}

/// Loads and saves [`Config`] as `config/config.json` under a base directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        let path = config_file_in(&base);
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        Ok(Self { path })
    }

    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let config: Config = serde_json::from_str(&data)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
