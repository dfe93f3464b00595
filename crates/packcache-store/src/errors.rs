//! Error handling for packcache-store
//!
//! Wraps packcache-core ExError with store-specific helpers

use packcache_core::errors::{ExError, ExErrorKind};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error for a filesystem operation on `path`
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_path(path.display().to_string())
        .with_message(err.to_string())
}

/// Create an encode/decode error
pub fn serialization_error(operation: &str, reason: impl std::fmt::Display) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation.to_string())
        .with_message(reason.to_string())
}

/// Create a restore failure (persisted state unusable)
pub fn restore_failure(path: &Path, reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::RestoreFailure)
        .with_op("restore")
        .with_path(path.display().to_string())
        .with_message(reason)
}

/// Create a settings validation error
pub fn invalid_settings(path: &Path, reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("settings_load")
        .with_path(path.display().to_string())
        .with_message(reason)
}
