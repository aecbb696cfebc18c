//! Configuration module for storekeep
//!
//! The allowed-root set is fixed at process start and never modifiable at
//! runtime. Resolution order for the config file:
//! 1. Explicit path (CLI flag, highest priority)
//! 2. STOREKEEP_CONFIG environment variable
//! 3. ./storekeep.toml
//! 4. User config (~/.config/storekeep/config.toml)
//!
//! Format:
//!
//! ```toml
//! [[roots]]
//! name = "audio"
//! path = "/srv/store/audio"
//!
//! [[roots]]
//! name = "covers"
//! path = "/srv/store/covers"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AllowedRoot, RootSet};
use crate::error::{StorekeepError, StorekeepResult};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "STOREKEEP_CONFIG";

/// One configured root entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootEntry {
    pub name: String,
    pub path: PathBuf,
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub roots: Vec<RootEntry>,
}

impl Config {
    /// Load configuration from a specific file.
    pub fn load(path: &Path) -> StorekeepResult<Self> {
        let raw = fs::read_to_string(path).map_err(|source| StorekeepError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|err| StorekeepError::ConfigParse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    /// Resolve and load the configuration for this process.
    ///
    /// Walks the resolution order and loads the first file that exists; an
    /// explicit path that does not exist is an error rather than a
    /// fallthrough, so a typo in `--config` cannot silently pick up a
    /// different root set.
    pub fn resolve(explicit: Option<&Path>) -> StorekeepResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Ok(from_env) = std::env::var(CONFIG_ENV) {
            return Self::load(Path::new(&from_env));
        }

        let local = Path::new("storekeep.toml");
        if local.exists() {
            return Self::load(local);
        }

        if let Some(user) = user_config_path() {
            if user.exists() {
                return Self::load(&user);
            }
        }

        Err(StorekeepError::NoRoots)
    }

    /// Validate the entries into the closed root set used by the gate and
    /// the walk.
    pub fn root_set(&self) -> StorekeepResult<RootSet> {
        let mut roots = Vec::with_capacity(self.roots.len());
        for entry in &self.roots {
            roots.push(AllowedRoot::new(entry.name.clone(), entry.path.clone())?);
        }
        RootSet::new(roots)
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("storekeep").join("config.toml"))
}
