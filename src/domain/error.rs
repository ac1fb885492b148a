use std::io;

use thiserror::Error;

use super::validation::Violation;

/// Library-wide error type for mcfleet operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Fleet declaration file missing.
    #[error("Fleet config not found: {0}")]
    FleetConfigMissing(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Instance name is invalid.
    #[error(
        "Invalid instance name '{0}': use up to 64 ASCII letters, digits, '-' or '_', \
         starting with a letter or digit"
    )]
    InvalidInstanceName(String),

    /// Instance not declared in the fleet.
    #[error("Server '{0}' is not declared in the fleet config")]
    InstanceNotFound(String),

    /// Fleet validation failed; nothing was provisioned.
    #[error("Fleet validation failed with {} violation(s)", violations.len())]
    FleetInvalid { violations: Vec<Violation> },

    /// A value cannot be written into a unit file directive.
    #[error("Value {value:?} cannot be used for unit directive {directive}=")]
    InvalidUnitValue { directive: String, value: String },

    /// Template rendering failed.
    #[error("Failed to render template '{name}': {details}")]
    TemplateError { name: String, details: String },

    /// Embedded asset missing or malformed.
    #[error("Internal error: {0}")]
    InternalError(String),

    /// Serialization of a host declaration failed.
    #[error("Failed to serialize {what}: {details}")]
    SerializeError { what: String, details: String },
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view for callers matching on error class.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::TomlParseError(_)
            | AppError::InvalidInstanceName(_)
            | AppError::InvalidUnitValue { .. }
            | AppError::FleetInvalid { .. } => io::ErrorKind::InvalidInput,
            AppError::FleetConfigMissing(_) | AppError::InstanceNotFound(_) => {
                io::ErrorKind::NotFound
            }
            AppError::TemplateError { .. }
            | AppError::InternalError(_)
            | AppError::SerializeError { .. } => io::ErrorKind::Other,
        }
    }
}
