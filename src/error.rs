use thiserror::Error;

/// Classifies configuration errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    /// File open/read failure
    FileError,
    /// TOML syntax or decoding error
    InvalidData,
    /// Parsed data has the wrong shape (e.g. a scope table is not a table)
    InvalidShape,
}

/// Store router error types
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Config error: {message}")]
    ConfigError {
        kind: ConfigErrorKind,
        message: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl StoreError {
    /// Build a config error with the given kind.
    pub(crate) fn config(kind: ConfigErrorKind, message: impl Into<String>) -> Self {
        StoreError::ConfigError {
            kind,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
