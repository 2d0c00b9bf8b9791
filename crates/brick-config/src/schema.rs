//! Configuration schema types for the bridge.
//!
//! All structs use `serde(default)` so partial configs work correctly.

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for the bridge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub origins: OriginConfig,
    pub host: HostConfig,
}

/// Origin allow-list applied to every inbound message.
///
/// A sender is trusted when its origin is `<scheme>://<host>` with an
/// optional port, where scheme and host each appear in these lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OriginConfig {
    pub schemes: Vec<String>,
    pub hosts: Vec<String>,
}

impl Default for OriginConfig {
    fn default() -> Self {
        Self {
            schemes: vec!["http".into(), "https".into(), "capacitor".into()],
            hosts: vec!["localhost".into(), "brick1100".into()],
        }
    }
}

/// Settings for the native host side of the bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Origin stamped on messages the host posts into an embedded page.
    pub origin: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            origin: "capacitor://localhost".into(),
        }
    }
}
