use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::filesystem::NodeDefaults;

pub const DEFAULT_PROMPT: &str = "memfs> ";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings read from `config.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Owner given to nodes created by the shell and archive imports
    pub default_owner: String,
    /// Mode bits for new nodes
    pub default_permissions: u32,
    pub prompt: String,
    /// `.tar.gz` image loaded into the tree at startup
    pub seed_archive: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let defaults = NodeDefaults::default();
        Self {
            default_owner: defaults.owner,
            default_permissions: defaults.permissions,
            prompt: DEFAULT_PROMPT.to_string(),
            seed_archive: None,
        }
    }
}

impl Config {
    /// Read the config file at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("No config file at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io { path: path.to_path_buf(), source });
            }
        };

        let config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn node_defaults(&self) -> NodeDefaults {
        NodeDefaults {
            owner: self.default_owner.clone(),
            permissions: self.default_permissions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_owner, "root");
        assert_eq!(config.default_permissions, 0o755);
        assert_eq!(config.prompt, DEFAULT_PROMPT);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_owner = \"alice\"\nseed_archive = \"base.tar.gz\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.default_owner, "alice");
        assert_eq!(config.default_permissions, 0o755);
        assert_eq!(config.seed_archive, Some(PathBuf::from("base.tar.gz")));

        let fs = crate::FileSystem::with_defaults(config.node_defaults());
        assert_eq!(fs.defaults().owner, "alice");
        assert_eq!(fs.stat("/").unwrap().owner, "alice");
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_permissions = \"not a number\"").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }
}
