//! NoteText value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for note bodies.
///
/// Free-form text, validated only to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NoteText(String);

impl NoteText {
    /// Create a new NoteText, validating that it's not empty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyText` if the provided text is empty.
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.is_empty() {
            return Err(ValidationError::EmptyText);
        }
        Ok(Self(text))
    }

    /// Get the text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for NoteText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for NoteText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NoteText::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for NoteText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_valid() {
        let text = NoteText::new("buy milk and eggs").unwrap();
        assert_eq!(text.as_str(), "buy milk and eggs");
    }

    #[test]
    fn test_text_rejects_empty() {
        assert!(NoteText::new("").is_err());
    }
}
