//! Contact record aggregating validated fields for one person.

use crate::domain::{Address, Birthday, Email, Name, Phone, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the address book.
///
/// Aggregates one required [`Name`] (the contact's identity, immutable
/// after construction) with an ordered list of phone numbers and optional
/// birthday, email, and address fields. Every field slot holds a validated
/// value object; "editing" a slot constructs a new validated value and
/// replaces it, so an invalid field can never be stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    name: Name,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<Email>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<Address>,
}

impl Contact {
    /// Create a new contact with the given name and no other fields.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
            email: None,
            address: None,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// All phone numbers, in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The contact's birthday, when set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// The contact's email address, when set.
    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    /// The contact's postal address, when set.
    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// Validate `raw` as a phone number and append it to the list.
    ///
    /// Duplicates are permitted.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(raw)?);
        Ok(())
    }

    /// Remove the first phone equal to `value`. A no-op when absent.
    pub fn remove_phone(&mut self, value: &str) {
        if let Some(pos) = self.phones.iter().position(|p| p.as_str() == value) {
            self.phones.remove(pos);
        }
    }

    /// Replace the first phone equal to `old` with a validated `new` value.
    ///
    /// The new value is validated before anything is touched, so a failed
    /// edit leaves the phone list unchanged.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` if `new` is malformed, or
    /// `BookError::PhoneNotFound` if no phone equals `old`.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let replacement = Phone::new(new)?;
        match self.phones.iter().position(|p| p.as_str() == old) {
            Some(pos) => {
                self.phones[pos] = replacement;
                Ok(())
            }
            None => Err(BookError::PhoneNotFound(old.to_string())),
        }
    }

    /// Find the first phone equal to `value`.
    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Validate `raw` and make it the contact's only phone.
    ///
    /// The old list is dropped only after the new value validates.
    pub fn replace_phones(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(raw)?;
        self.phones.clear();
        self.phones.push(phone);
        Ok(())
    }

    /// Validate and store a birthday, overwriting any prior value.
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    /// Validate and store an email address, overwriting any prior value.
    pub fn set_email(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.email = Some(Email::new(raw)?);
        Ok(())
    }

    /// Validate and store a postal address, overwriting any prior value.
    pub fn set_address(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.address = Some(Address::new(raw)?);
        Ok(())
    }

    /// Absorb another record for the same name: phones append, optional
    /// fields fill only empty slots. Values already present are kept.
    pub(crate) fn merge(&mut self, other: Contact) {
        self.phones.extend(other.phones);
        if self.birthday.is_none() {
            self.birthday = other.birthday;
        }
        if self.email.is_none() {
            self.email = other.email;
        }
        if self.address.is_none() {
            self.address = other.address;
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        if let Some(email) = &self.email {
            write!(f, ", email: {}", email)?;
        }
        if let Some(address) = &self.address {
            write!(f, ", address: {}", address)?;
        }
        Ok(())
    }
}
