//! Record types built from validated domain fields.
//!
//! This module contains the aggregate records stored in the books: a
//! [`Contact`] keyed by name and a [`Note`] keyed by title.

pub mod contact;
pub mod note;

pub use contact::Contact;
pub use note::Note;
