//! Profile configuration: where a widget session keeps its store.
//! One profile directory plays the role of an origin; every widget
//! bound to the same profile sees the same persisted feed.

use crate::constant::{CONFIG_FILE, PROFILE_DIR, STORE_FILE};
use crate::{PlazaError, PlazaResult};
use home::home_dir;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlazaConfig {
    /// Directory holding the profile.
    pub dirpath: PathBuf,
    /// Path to the sqlite-backed kv store.
    pub store: PathBuf,
}

impl Default for PlazaConfig {
    fn default() -> Self {
        let home = home_dir().unwrap_or_else(std::env::temp_dir);
        Self::with_dir(home.join(PROFILE_DIR))
    }
}

impl PlazaConfig {
    /// A profile rooted at the given directory.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        let dirpath = dir.into();
        Self {
            store: dirpath.join(STORE_FILE),
            dirpath,
        }
    }

    /// Path of the config file inside the profile directory.
    pub fn filepath(&self) -> PathBuf {
        self.dirpath.join(CONFIG_FILE)
    }

    /// Write the config to its profile directory.
    pub fn save(&self) -> PlazaResult<()> {
        std::fs::create_dir_all(&self.dirpath)?;
        let content = toml::to_string_pretty(self)?;
        std::fs::write(self.filepath(), content)?;
        Ok(())
    }

    /// Load the config stored in `dir`; a directory without one gets
    /// the defaults for that directory.
    pub fn load(dir: impl Into<PathBuf>) -> PlazaResult<Self> {
        let config = Self::with_dir(dir);
        let filepath = config.filepath();
        if !std::fs::exists(&filepath)? {
            return Ok(config);
        }
        let content = std::fs::read_to_string(filepath)?;
        Ok(toml::from_str(&content)
            .map_err(|err| PlazaError::config_error(err.to_string()))?)
    }
}
