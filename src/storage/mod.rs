//! JSON persistence for the two books.
//!
//! Each book saves to one pretty-printed JSON array: contacts as full
//! contact objects, notes as `{title, text, tag?}` mappings. Loading runs
//! every value back through its validating deserializer, and a missing
//! file yields an empty book rather than an error.

use crate::books::{ContactBook, NoteBook};
use crate::error::StorageResult;
use crate::models::{Contact, Note};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Save the contact book as a JSON array of contact objects.
pub fn save_contacts(book: &ContactBook, path: &Path) -> StorageResult<()> {
    let records: Vec<&Contact> = book.iter().collect();
    write_json(path, &records)?;
    debug!("saved {} contacts to {}", records.len(), path.display());
    Ok(())
}

/// Load a contact book from disk.
///
/// A missing file yields an empty book. Records fold back in through
/// [`ContactBook::add`], so the key invariant is re-established on load.
pub fn load_contacts(path: &Path) -> StorageResult<ContactBook> {
    let mut book = ContactBook::new();
    if !path.exists() {
        info!("no contacts file at {}, starting empty", path.display());
        return Ok(book);
    }

    let content = fs::read_to_string(path)?;
    let records: Vec<Contact> = serde_json::from_str(&content)?;
    debug!("loaded {} contacts from {}", records.len(), path.display());
    for contact in records {
        book.add(contact);
    }
    Ok(book)
}

/// Save the note book as a JSON array of `{title, text, tag?}` mappings.
pub fn save_notes(book: &NoteBook, path: &Path) -> StorageResult<()> {
    let records = book.list_all();
    write_json(path, &records)?;
    debug!("saved {} notes to {}", records.len(), path.display());
    Ok(())
}

/// Load a note book from disk. A missing file yields an empty book.
pub fn load_notes(path: &Path) -> StorageResult<NoteBook> {
    let mut book = NoteBook::new();
    if !path.exists() {
        info!("no notes file at {}, starting empty", path.display());
        return Ok(book);
    }

    let content = fs::read_to_string(path)?;
    let records: Vec<Note> = serde_json::from_str(&content)?;
    debug!("loaded {} notes from {}", records.len(), path.display());
    for note in records {
        book.add(note);
    }
    Ok(book)
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content)?;
    Ok(())
}
