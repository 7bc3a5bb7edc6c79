//! Settings error types.

use lumina_core::LuminaError;
use thiserror::Error;

/// Errors that can occur when loading settings or resolving credentials.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Failed to read the settings file from disk.
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    /// Failed to parse JSON in the settings file.
    #[error("failed to parse settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A settings value was invalid.
    #[error("invalid settings value: {0}")]
    InvalidValue(String),
    /// A required credential was not supplied.
    #[error("missing credential: {0} (set it in the environment or settings file)")]
    MissingCredential(&'static str),
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;

impl From<SettingsError> for LuminaError {
    fn from(err: SettingsError) -> Self {
        LuminaError::Configuration(err.to_string())
    }
}
