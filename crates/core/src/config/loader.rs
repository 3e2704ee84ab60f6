//! Config path resolution
//!
//! Handles resolving paths for configuration files based on the host
//! executable's location.

use std::path::PathBuf;

use fire_sdk::PROJECT_NAME;

use super::{ConfigError, ConfigResult};

/// Returns the game root directory (the directory holding the host executable).
pub fn game_base_dir() -> ConfigResult<PathBuf> {
    let exe = std::env::current_exe().map_err(ConfigError::IoError)?;

    exe.parent()
        .map(PathBuf::from)
        .ok_or(ConfigError::NoConfigDirectory)
}

/// Returns the plugin directory.
///
/// Path: `Data/SKSE/Plugins/`
pub fn plugins_dir() -> ConfigResult<PathBuf> {
    Ok(plugins_dir_in(game_base_dir()?))
}

/// Returns the core config path.
///
/// Path: `Data/SKSE/Plugins/FIRE.toml`
pub fn core_config_path() -> ConfigResult<PathBuf> {
    Ok(core_config_path_in(game_base_dir()?))
}

fn plugins_dir_in(base: PathBuf) -> PathBuf {
    base.join("Data").join("SKSE").join("Plugins")
}

fn core_config_path_in(base: PathBuf) -> PathBuf {
    plugins_dir_in(base).join(format!("{}.toml", PROJECT_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_config_path_format() {
        let base = PathBuf::from("/games/skyrim");
        let path = core_config_path_in(base);

        assert!(path.ends_with("Data/SKSE/Plugins/FIRE.toml"));
    }
}
