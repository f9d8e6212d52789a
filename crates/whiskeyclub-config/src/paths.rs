use anyhow::Result;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configuration directory
pub const CONFIG_DIR_ENV: &str = "WHISKEYCLUB_CONFIG_DIR";

pub struct PathManager {
    config_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(Self::from_base(PathBuf::from(dir)));
        }

        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("whiskeyclub");

        Ok(Self::from_base(base_dir))
    }

    pub fn from_base(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }
}
