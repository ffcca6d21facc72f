use std::path::PathBuf;
use directories::ProjectDirs;
use std::fs;

/// Where memfs looks for its configuration and seed images.
/// Uses the XDG directories when they can be created, the current directory otherwise.
#[derive(Debug, Clone)]
pub struct PathManager {
    /// Directory holding `config.toml`
    pub config_dir: PathBuf,
    /// Directory holding seed archives
    pub data_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Self {
        let Some(proj_dirs) = ProjectDirs::from("", "", "memfs") else {
            return Self::new_fallback();
        };

        let config_dir = proj_dirs.config_dir().to_path_buf();
        let data_dir = proj_dirs.data_dir().to_path_buf();

        if fs::create_dir_all(&config_dir).is_err() {
            log::warn!("Cannot create XDG config directory {config_dir:?}, falling back to current directory");
            return Self::new_fallback();
        }
        if fs::create_dir_all(&data_dir).is_err() {
            log::warn!("Cannot create XDG data directory {data_dir:?}, falling back to current directory");
            return Self::new_fallback();
        }

        log::debug!("Using XDG directories: {config_dir:?} {data_dir:?}");
        Self { config_dir, data_dir }
    }

    fn new_fallback() -> Self {
        log::debug!("Using current directory for configuration");
        let base_dir = PathBuf::from(".");
        Self {
            config_dir: base_dir.clone(),
            data_dir: base_dir,
        }
    }

    /// Default configuration file path
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Resolve a seed archive name against the data directory unless it is already absolute
    pub fn seed_file(&self, name: &std::path::Path) -> PathBuf {
        if name.is_absolute() {
            name.to_path_buf()
        } else {
            self.data_dir.join(name)
        }
    }

    pub fn log_paths(&self) {
        log::info!("Path configuration:");
        log::info!("  Config directory: {}", self.config_dir.display());
        log::info!("  Data directory: {}", self.data_dir.display());
        log::info!("  Config file: {}", self.config_file().display());
    }
}

impl Default for PathManager {
    fn default() -> Self {
        Self::new()
    }
}
