//! Global configuration loader
//!
//! Search order (highest to lowest):
//! 1. Explicit path (`--config`)
//! 2. $TERRALESS_CONFIG (environment variable)
//! 3. ./terraless.toml (project-specific)
//! 4. ~/.config/terraless/config.toml (user-global)

use crate::config::GlobalConfig;
use crate::types::{ExtensionError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CONFIG_ENV_VAR: &str = "TERRALESS_CONFIG";
pub const PROJECT_CONFIG_FILE: &str = "terraless.toml";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the global configuration from the first existing candidate path
    pub fn load(explicit: Option<&Path>) -> Result<GlobalConfig> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ExtensionError::ConfigNotFound(path.to_path_buf()));
            }
            return Self::from_path(path);
        }

        for path in Self::candidates() {
            if path.exists() {
                return Self::from_path(&path);
            }
            debug!("No config at: {}", path.display());
        }

        Err(ExtensionError::NoConfigFile)
    }

    /// Implicit candidate locations, in priority order
    pub fn candidates() -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        // Environment variable
        if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
            candidates.push(PathBuf::from(config_path));
        }

        // Project-specific config
        if let Ok(cwd) = std::env::current_dir() {
            candidates.push(cwd.join(PROJECT_CONFIG_FILE));
        }

        // User-global config
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("terraless").join("config.toml"));
        }

        candidates
    }

    /// Read, parse and validate the configuration at `path`
    pub fn from_path(path: &Path) -> Result<GlobalConfig> {
        debug!("Loading global config from: {}", path.display());
        let content = std::fs::read_to_string(path)?;

        let config = Self::parse(&content, path)?;
        info!(
            "Loaded {} team(s) from {}",
            config.teams.len(),
            path.display()
        );

        Ok(config)
    }

    /// Parse and validate TOML content; `origin` is only used in errors
    pub fn parse(content: &str, origin: &Path) -> Result<GlobalConfig> {
        let config: GlobalConfig = toml::from_str(content).map_err(|source| ExtensionError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }
}
