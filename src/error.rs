//! Error types for daybook.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level validation errors live in [`crate::domain::errors`]; the enums here
//! cover book operations, persistence, configuration, and the command boundary.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur during book operations.
#[derive(Error, Debug)]
pub enum BookError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact stored under the given name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// No note stored under the given title
    #[error("Note not found: {0}")]
    NoteNotFound(String),

    /// The contact has no phone with the given value
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// A different note already owns the target title
    #[error("A note titled '{0}' already exists")]
    DuplicateTitle(String),
}

/// Errors that can occur while saving or loading a book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or invalid persisted data
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors produced at the command boundary.
///
/// The REPL layer maps these (and the core errors they wrap) to the
/// messages shown to the user.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The caller supplied the wrong shape or count of arguments
    #[error("{0}")]
    Usage(String),

    /// A core operation failed
    #[error(transparent)]
    Book(#[from] BookError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        Self::Book(BookError::Validation(err))
    }
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::ContactNotFound("Alice".to_string());
        assert_eq!(err.to_string(), "Contact not found: Alice");

        let err = BookError::NoteNotFound("draft".to_string());
        assert_eq!(err.to_string(), "Note not found: draft");

        let err = ConfigError::InvalidValue {
            var: "DAYBOOK_BIRTHDAY_WINDOW_DAYS".to_string(),
            reason: "Must be a positive number".to_string(),
        };
        assert!(err.to_string().contains("DAYBOOK_BIRTHDAY_WINDOW_DAYS"));
    }

    #[test]
    fn test_validation_error_converts_to_command_error() {
        let err: CommandError = ValidationError::EmptyName.into();
        assert_eq!(err.to_string(), "Name cannot be empty");
    }
}
