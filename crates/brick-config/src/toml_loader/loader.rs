use std::path::Path;

use brick_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};
use crate::schema::BridgeConfig;
use crate::validation;

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. A file that parses but fails
/// validation is logged and replaced by the default config.
pub fn load_from_path(path: &Path) -> Result<BridgeConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
    })?;

    let config: BridgeConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
        warn!("falling back to default config");
        return Ok(BridgeConfig::default());
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// If the file does not exist, a commented default is written there and
/// the defaults are returned.
pub fn load_default() -> Result<BridgeConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(&path)?;
        return Ok(BridgeConfig::default());
    }

    load_from_path(&path)
}
