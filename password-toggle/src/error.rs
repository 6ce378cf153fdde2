//! Error types for password toggle option handling

use std::path::PathBuf;
use thiserror::Error;

/// Result type for configuration loading
pub type ConfigurationResult<T> = Result<T, ConfigurationError>;

/// Errors raised while loading the application-wide configuration.
///
/// These are fatal at process bootstrap: the host must not start serving
/// forms without a valid [`OptionSchema`](crate::OptionSchema).
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// A recognized key carries a value that violates its rule
    #[error("Invalid configuration value for key '{key}': {rule}")]
    InvalidValue { key: String, rule: String },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Configuration file format not supported
    #[error("Unsupported configuration file format: {format}")]
    UnsupportedFormat { format: String },

    /// Configuration parsing failed
    #[error("Failed to parse configuration: {source}")]
    Parse {
        #[source]
        source: Box<figment::Error>,
    },
}

impl ConfigurationError {
    /// Name of the offending key, when the error is about a single key
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::InvalidValue { key, .. } => Some(key),
            _ => None,
        }
    }
}

impl From<figment::Error> for ConfigurationError {
    fn from(error: figment::Error) -> Self {
        ConfigurationError::Parse {
            source: Box::new(error),
        }
    }
}

/// A per-field override violates the option schema.
///
/// Recoverable at the call site: only the field that carried the override
/// fails to build.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("The option \"{key}\" is expected to be of type {expected}, but is of type {received} ({value})")]
pub struct InvalidOptionsError {
    /// The offending option name
    pub key: String,
    /// Human-readable expected type
    pub expected: String,
    /// Type of the value that was received
    pub received: String,
    /// The received value rendered as JSON
    pub value: String,
}

/// A named form field could not be built.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("field '{field}': {source}")]
pub struct FieldError {
    pub field: String,
    #[source]
    pub source: InvalidOptionsError,
}
