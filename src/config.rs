use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use crate::storage::StoreOptions;
use crate::{Error, Result};

pub const DEFAULT_DATABASE: &str = "snippets.db";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SnippetsConfig {
    pub database: Option<String>,
    pub busy_timeout_ms: Option<u64>,
    pub log_file: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("snippets.toml")
}

/// Load the config file.
///
/// With no explicit path, a missing `snippets.toml` is fine. A path given on
/// the command line must exist.
pub fn load_config(path: Option<&Path>) -> Result<Option<SnippetsConfig>> {
    let explicit = path.is_some();
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        if explicit {
            return Err(Error::Config(format!("config file {} not found", path.display())));
        }
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: SnippetsConfig = toml::from_str(&contents)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    Ok(Some(config))
}

/// Effective settings after merging flags, config file and defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database: PathBuf,
    pub store: StoreOptions,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// `--database` beats the config file, which beats the default
    pub fn resolve(database_flag: Option<PathBuf>, config: Option<SnippetsConfig>) -> Self {
        let config = config.unwrap_or_default();

        let database = database_flag
            .or_else(|| config.database.map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE));

        let store = match config.busy_timeout_ms {
            Some(ms) => StoreOptions { busy_timeout: Duration::from_millis(ms) },
            None => StoreOptions::default(),
        };

        Self {
            database,
            store,
            log_file: config.log_file.map(PathBuf::from),
        }
    }
}
