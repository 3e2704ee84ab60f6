//! Configuration for FIRE
//!
//! A single TOML file next to the plugin controls logging and the script
//! class that native functions are registered under:
//!
//! ```toml
//! version = 1
//! debug = false
//! script_class = "FIRE"
//! # log_filter = "fire_core=trace"
//! ```
//!
//! A default file is written on first load.

mod loader;

use std::path::Path;

use serde::{Deserialize, Serialize};

use fire_sdk::PROJECT_NAME;

pub use loader::{core_config_path, game_base_dir, plugins_dir};

/// Configuration system errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read or write config file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse TOML content
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config to TOML
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// Could not determine config directory from the host executable location
    #[error("Config directory not available - could not resolve game base path")]
    NoConfigDirectory,
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Core plugin configuration.
///
/// Loaded from `Data/SKSE/Plugins/FIRE.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Config version for future migration support
    pub version: u32,

    /// Enable debug logging
    pub debug: bool,

    /// Explicit `tracing` filter directive, overrides `debug`
    pub log_filter: Option<String>,

    /// Script class all native functions are registered under
    pub script_class: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            version: 1,
            debug: false,
            log_filter: None,
            script_class: PROJECT_NAME.to_string(),
        }
    }
}

impl CoreConfig {
    /// Load core config from file, creating default if missing.
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(&core_config_path()?)
    }

    /// Save core config to file.
    pub fn save(&self) -> ConfigResult<()> {
        self.save_to(&core_config_path()?)
    }

    /// Reload core config from file.
    pub fn reload(&mut self) -> ConfigResult<()> {
        let path = core_config_path()?;
        let content = std::fs::read_to_string(&path)?;
        *self = toml::from_str(&content)?;
        tracing::debug!("Reloaded core config from {:?}", path);
        Ok(())
    }

    /// Load config from an explicit path, creating default if missing.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = toml::from_str(&content)?;
            tracing::debug!("Loaded core config from {:?}", path);
            Ok(config)
        } else {
            let default = Self::default();
            default.save_to(path)?;
            tracing::info!("Created default core config at {:?}", path);
            Ok(default)
        }
    }

    /// Save config to an explicit path.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::debug!("Saved core config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_config_default() {
        let config = CoreConfig::default();
        assert_eq!(config.version, 1);
        assert!(!config.debug);
        assert!(config.log_filter.is_none());
        assert_eq!(config.script_class, "FIRE");
    }

    #[test]
    fn test_core_config_serialize() {
        let config = CoreConfig {
            version: 2,
            debug: true,
            log_filter: None,
            script_class: "MyScript".to_string(),
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("version = 2"));
        assert!(toml_str.contains("debug = true"));
        assert!(toml_str.contains("script_class = \"MyScript\""));
    }

    #[test]
    fn test_core_config_missing_fields_use_defaults() {
        let config: CoreConfig = toml::from_str("debug = true").unwrap();
        assert!(config.debug);
        assert_eq!(config.version, 1);
        assert_eq!(config.script_class, "FIRE");
    }

    #[test]
    fn test_load_from_creates_default() {
        let dir = std::env::temp_dir().join(format!("fire-config-{}", std::process::id()));
        let path = dir.join("FIRE.toml");
        let _ = std::fs::remove_file(&path);

        let config = CoreConfig::load_from(&path).unwrap();
        assert_eq!(config, CoreConfig::default());
        assert!(path.exists());

        let reloaded = CoreConfig::load_from(&path).unwrap();
        assert_eq!(reloaded, config);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
