//! Tag value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for note tags.
///
/// A note carries at most one tag, so the value may not contain a comma
/// separator (a comma would smuggle in a list). Empty tags are rejected;
/// absence of a tag is modeled as `Option<Tag>` on the note.
///
/// # Example
///
/// ```
/// use daybook::domain::Tag;
///
/// let tag = Tag::new("work").unwrap();
/// assert_eq!(tag.as_str(), "work");
/// assert!(Tag::new("work,home").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag(String);

impl Tag {
    /// Create a new Tag, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidTag` if the tag is empty or
    /// contains a comma.
    pub fn new(tag: impl Into<String>) -> Result<Self, ValidationError> {
        let tag = tag.into();
        if tag.is_empty() || tag.contains(',') {
            return Err(ValidationError::InvalidTag(tag));
        }
        Ok(Self(tag))
    }

    /// Get the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Tag::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_valid() {
        let tag = Tag::new("work").unwrap();
        assert_eq!(tag.as_str(), "work");
    }

    #[test]
    fn test_tag_rejects_empty() {
        assert!(Tag::new("").is_err());
    }

    #[test]
    fn test_tag_rejects_comma_separated_list() {
        assert!(Tag::new("work,home").is_err());
        assert!(Tag::new(",").is_err());
    }

    #[test]
    fn test_tag_serialization() {
        let tag = Tag::new("work").unwrap();
        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(json, "\"work\"");
    }

    #[test]
    fn test_tag_deserialization_invalid_fails() {
        let result: Result<Tag, _> = serde_json::from_str("\"a,b\"");
        assert!(result.is_err());
    }
}
