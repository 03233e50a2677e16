//! Error types for configuration loading

use std::path::PathBuf;
use thiserror::Error;

/// Configuration store errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File not found
    #[error("Configuration file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The file extension does not name a supported format
    #[error("Unsupported configuration format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// The layered configuration could not be extracted into the target type
    #[error("Configuration extraction error: {0}")]
    Extract(#[from] figment::Error),

    /// A value could not be turned into a configuration layer
    #[error("Configuration serialization error: {0}")]
    Serialize(String),

    /// JSON encoding errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML encoding errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
