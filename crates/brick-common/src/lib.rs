pub mod errors;

pub use errors::{BrickError, BridgeError, ConfigError};

pub type Result<T> = std::result::Result<T, BrickError>;
