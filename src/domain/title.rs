//! NoteTitle value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for note titles.
///
/// The title is a note's identity and map key, so it is validated at
/// construction time and cannot be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NoteTitle(String);

impl NoteTitle {
    /// Create a new NoteTitle, validating that it's not empty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyTitle` if the provided title is empty.
    pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(Self(title))
    }

    /// Get the title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for NoteTitle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for NoteTitle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NoteTitle::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for NoteTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_valid() {
        let title = NoteTitle::new("groceries").unwrap();
        assert_eq!(title.as_str(), "groceries");
    }

    #[test]
    fn test_title_rejects_empty() {
        assert!(NoteTitle::new("").is_err());
    }

    #[test]
    fn test_title_deserialization_empty_fails() {
        let result: Result<NoteTitle, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
