//! Error handling for emojipack-store
//!
//! Wraps emojipack-core ExError with store-specific helpers

use emojipack_core::errors::{ExError, ExErrorKind};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation)
        .with_path(path.display().to_string())
        .with_message(err.to_string())
}

/// Create an archive structure error (unreadable zip or entry)
pub fn archive_error(path: &Path, reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::InvalidArchive)
        .with_op("read_pack")
        .with_path(path.display().to_string())
        .with_message(reason)
}

/// Create an error for a snippet entry that lacks a required field
pub fn missing_field(path: &Path, entry: &str, reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::MissingField)
        .with_op("read_pack")
        .with_subject(entry)
        .with_path(path.display().to_string())
        .with_message(reason)
}

/// Create a serialization error
pub fn serialization_error(operation: &str, reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation)
        .with_message(reason)
}

/// Create an error for a failed or rejected source request
pub fn fetch_error(url: &str, reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::ExternalService)
        .with_op("fetch_source")
        .with_subject(url)
        .with_message(reason)
}

/// Create an error from a zip failure while writing
pub fn from_zip_write(err: zip::result::ZipError) -> ExError {
    serialization_error("write_pack", err.to_string())
}

/// Create an error from a plist failure
pub fn from_plist(operation: &str, err: plist::Error) -> ExError {
    serialization_error(operation, err.to_string())
}
