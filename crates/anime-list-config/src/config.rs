use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::paths::PathManager;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Profile URL used when the command line does not name one.
    #[serde(default)]
    pub default_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Base directory for collected data; the `ANIMELISTER_BASE_PATH`
    /// environment variable takes precedence over this value.
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    // Browser-like User-Agent, the site serves a different page to bots
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Load the config file from the platform config directory, falling
    /// back to defaults when no file exists.
    pub fn load_or_default() -> Result<Self> {
        match PathManager::config_file() {
            Some(path) if path.exists() => {
                debug!("Loading config from {}", path.display());
                Self::load_from(&path)
            }
            _ => {
                debug!("No config file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Build the path manager for this config, honoring the environment
    /// override first and the configured base directory second.
    pub fn path_manager(&self) -> PathManager {
        match std::env::var("ANIMELISTER_BASE_PATH") {
            Ok(base) => PathManager::new(base),
            Err(_) => match &self.storage.base_dir {
                Some(base) => PathManager::new(base.clone()),
                None => PathManager::new("."),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_file_yields_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert!(config.profile.default_url.is_none());
        assert_eq!(config.http.timeout_secs, 30);
        assert!(config.storage.base_dir.is_none());
    }

    #[test]
    fn partial_file_keeps_section_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[profile]").unwrap();
        writeln!(file, "default_url = \"https://myanimelist.net/profile/Rawwhite\"").unwrap();
        writeln!(file, "[http]").unwrap();
        writeln!(file, "timeout_secs = 10").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(
            config.profile.default_url.as_deref(),
            Some("https://myanimelist.net/profile/Rawwhite")
        );
        assert_eq!(config.http.timeout_secs, 10);
        assert!(config.http.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "profile = \"not a table\"").unwrap();
        assert!(Config::load_from(file.path()).is_err());
    }
}
