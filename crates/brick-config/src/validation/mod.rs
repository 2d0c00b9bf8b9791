//! Full configuration validation.
//!
//! Checks origin allow-list entries and the host origin, collecting every
//! problem into a single error.

mod helpers;


use brick_common::ConfigError;

use crate::schema::BridgeConfig;
use helpers::{validate_each, validate_non_empty, HOST_RE, ORIGIN_RE, SCHEME_RE};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &BridgeConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_non_empty(&mut errors, "origins.schemes", &config.origins.schemes);
    validate_non_empty(&mut errors, "origins.hosts", &config.origins.hosts);
    validate_each(&mut errors, "origins.schemes", &config.origins.schemes, &SCHEME_RE);
    validate_each(&mut errors, "origins.hosts", &config.origins.hosts, &HOST_RE);

    if !ORIGIN_RE.is_match(&config.host.origin) {
        errors.push(format!(
            "host.origin = {:?} is not of the form scheme://host[:port]",
            config.host.origin
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
