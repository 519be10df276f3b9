use thiserror::Error;

/// Main error type for ee operations
#[derive(Debug, Error)]
pub enum EeError {
    #[error("No config value with key '{key}' set")]
    ConfigKeyNotFound { key: String },

    #[error("No config values found!")]
    EmptyConfig,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl EeError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn key_not_found<S: Into<String>>(key: S) -> Self {
        Self::ConfigKeyNotFound { key: key.into() }
    }

    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        Self::SerializationError(msg.into())
    }
}

/// Result type alias for ee operations
pub type Result<T> = std::result::Result<T, EeError>;
