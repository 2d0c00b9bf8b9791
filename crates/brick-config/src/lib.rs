//! Bridge configuration.
//!
//! TOML-based configuration for the origin allow-list and the native host
//! origin. Every section has defaults, so a missing or partial file works.
//!
//! ```rust,no_run
//! use brick_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{BridgeConfig, HostConfig, OriginConfig, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{default_config_path, load_from_path};

use brick_common::ConfigError;

/// Load config from the platform default path, creating it if absent.
///
/// A file that fails validation yields the default config.
pub fn load_config() -> Result<BridgeConfig, ConfigError> {
    toml_loader::load_default()
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &BridgeConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&BridgeConfig::default());
        assert!(json.contains("\"origins\""));
        assert!(json.contains("\"schemes\""));
        assert!(json.contains("\"hosts\""));
        assert!(json.contains("\"host\""));
        assert!(json.contains("\"capacitor://localhost\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&BridgeConfig::default());
        let parsed: BridgeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.origins, OriginConfig::default());
        assert_eq!(parsed.host.origin, "capacitor://localhost");
    }
}
