use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("missing event name")]
    MissingEventName,

    #[error("unknown event: {0}")]
    UnknownEvent(String),

    #[error("invalid origin pattern: {0}")]
    InvalidOriginPattern(String),

    #[error("malformed message: {0}")]
    MalformedMessage(String),

    #[error("transport error: {0}")]
    Transport(String),
}

#[derive(Debug, thiserror::Error)]
pub enum BrickError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),
}
