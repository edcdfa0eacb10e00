//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided birthday string is not a valid `DD.MM.YYYY` date.
    InvalidBirthday(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided address is empty.
    EmptyAddress,

    /// The provided note title is empty.
    EmptyTitle,

    /// The provided note text is empty.
    EmptyText,

    /// The provided tag is invalid.
    InvalidTag(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhone(phone) => {
                write!(f, "Phone number must be exactly 10 digits: {}", phone)
            }
            Self::InvalidBirthday(raw) => {
                write!(f, "Invalid date format (expected DD.MM.YYYY): {}", raw)
            }
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::EmptyAddress => write!(f, "Address cannot be empty"),
            Self::EmptyTitle => write!(f, "Note title cannot be empty"),
            Self::EmptyText => write!(f, "Note text cannot be empty"),
            Self::InvalidTag(tag) => write!(f, "Invalid tag: {}", tag),
        }
    }
}

impl std::error::Error for ValidationError {}
