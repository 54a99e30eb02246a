//! Configuration error model.

use thiserror::Error;

/// Result type used across the configuration layer.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration-level error.
///
/// Emission never fails; every error in this crate is raised synchronously at
/// the configuration call site.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A known field was supplied with an incompatible shape.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Direct field-style configuration referenced an unrecognized key.
    ///
    /// Only the field-style path raises this; the free-form `configure` path
    /// routes unknown keys to the extras list instead.
    #[error("unknown configuration field: {0}")]
    UnknownField(String),
}

impl ConfigError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unknown_field(msg: impl Into<String>) -> Self {
        Self::UnknownField(msg.into())
    }
}
