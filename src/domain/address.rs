//! Address value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for postal addresses.
///
/// Free-form text, validated only to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    /// Create a new Address, validating that it's not empty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyAddress` if the provided address is empty.
    pub fn new(address: impl Into<String>) -> Result<Self, ValidationError> {
        let address = address.into();
        if address.is_empty() {
            return Err(ValidationError::EmptyAddress);
        }
        Ok(Self(address))
    }

    /// Get the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_valid() {
        let address = Address::new("12 Main St, Springfield").unwrap();
        assert_eq!(address.as_str(), "12 Main St, Springfield");
    }

    #[test]
    fn test_address_rejects_empty() {
        assert!(Address::new("").is_err());
    }

    #[test]
    fn test_address_serialization() {
        let address = Address::new("12 Main St").unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, "\"12 Main St\"");
    }
}
