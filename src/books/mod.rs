//! Keyed collections owning the records.
//!
//! Each book composes one map from a string key to its record type and
//! exposes only named operations, so callers can never mutate the raw
//! mapping out from under the key invariant.

pub mod contact_book;
pub mod note_book;

pub use contact_book::{AddStatus, ContactBook, UpcomingBirthday};
pub use note_book::NoteBook;
