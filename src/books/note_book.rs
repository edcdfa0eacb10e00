//! Note book: the keyed collection of notes.

use crate::error::{BookError, BookResult};
use crate::models::Note;
use std::collections::BTreeMap;

/// A collection of notes keyed by title.
///
/// Keys are unique; the stored note's title always equals its map key.
/// Renaming moves the entry to its new key atomically, so a failed rename
/// leaves the book untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteBook {
    records: BTreeMap<String, Note>,
}

impl NoteBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a note, replacing any note already stored under its title.
    pub fn add(&mut self, note: Note) {
        self.records
            .insert(note.title().as_str().to_string(), note);
    }

    /// Remove a note by title, reporting whether it existed.
    pub fn delete(&mut self, title: &str) -> bool {
        self.records.remove(title).is_some()
    }

    /// Look up a note by exact title.
    pub fn find(&self, title: &str) -> Option<&Note> {
        self.records.get(title)
    }

    /// Move a note from `old_title` to `new_title`, updating the note's
    /// own stored title to match.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NoteNotFound` when `old_title` is absent,
    /// `BookError::DuplicateTitle` when a different note already owns
    /// `new_title`, or `BookError::Validation` when the new title is
    /// invalid. The book is unchanged on any failure.
    pub fn rename(&mut self, old_title: &str, new_title: &str) -> BookResult<()> {
        if !self.records.contains_key(old_title) {
            return Err(BookError::NoteNotFound(old_title.to_string()));
        }
        if old_title != new_title && self.records.contains_key(new_title) {
            return Err(BookError::DuplicateTitle(new_title.to_string()));
        }

        // SAFETY: presence checked above
        let mut note = self
            .records
            .remove(old_title)
            .expect("note existence checked above");
        if let Err(err) = note.rename(new_title) {
            // put it back before reporting, the failed rename must not lose the note
            self.records.insert(old_title.to_string(), note);
            return Err(err.into());
        }
        self.records.insert(new_title.to_string(), note);
        Ok(())
    }

    /// Replace the body of the note stored under `title`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NoteNotFound` when absent, or
    /// `BookError::Validation` when the new text is empty.
    pub fn set_text(&mut self, title: &str, new_text: &str) -> BookResult<()> {
        match self.records.get_mut(title) {
            Some(note) => {
                note.set_text(new_text)?;
                Ok(())
            }
            None => Err(BookError::NoteNotFound(title.to_string())),
        }
    }

    /// Notes whose title contains `fragment`, case-insensitively.
    pub fn search_by_title_substring(&self, fragment: &str) -> Vec<&Note> {
        let needle = fragment.to_lowercase();
        self.records
            .values()
            .filter(|note| note.title().as_str().to_lowercase().contains(&needle))
            .collect()
    }

    /// Notes whose body contains `fragment`, case-insensitively.
    pub fn search_by_text_substring(&self, fragment: &str) -> Vec<&Note> {
        let needle = fragment.to_lowercase();
        self.records
            .values()
            .filter(|note| note.text().as_str().to_lowercase().contains(&needle))
            .collect()
    }

    /// Notes whose tag equals `tag`, case-insensitively.
    ///
    /// Untagged notes never match.
    pub fn search_by_tag(&self, tag: &str) -> Vec<&Note> {
        let needle = tag.to_lowercase();
        self.records
            .values()
            .filter(|note| {
                note.tag()
                    .is_some_and(|t| t.as_str().to_lowercase() == needle)
            })
            .collect()
    }

    /// All notes in title order.
    pub fn list_all(&self) -> Vec<&Note> {
        self.records.values().collect()
    }

    /// Every tag present in the book, deduplicated case-insensitively
    /// (first-seen spelling wins) and sorted by lowercase form.
    pub fn distinct_tags_sorted(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for note in self.records.values() {
            if let Some(tag) = note.tag() {
                if !tags.iter().any(|t| t.eq_ignore_ascii_case(tag.as_str())) {
                    tags.push(tag.as_str().to_string());
                }
            }
        }
        tags.sort_by_key(|t| t.to_lowercase());
        tags
    }

    /// Number of notes in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no notes.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(title: &str, text: &str, tag: Option<&str>) -> Note {
        Note::new(title, text, tag).unwrap()
    }

    fn sample_book() -> NoteBook {
        let mut book = NoteBook::new();
        book.add(note("groceries", "buy milk and eggs", Some("home")));
        book.add(note("standup", "prepare sprint summary", Some("work")));
        book.add(note("ideas", "learn the theremin", None));
        book
    }

    #[test]
    fn test_add_replaces_same_title() {
        let mut book = sample_book();
        book.add(note("groceries", "buy bread", None));
        assert_eq!(book.len(), 3);
        assert_eq!(book.find("groceries").unwrap().text().as_str(), "buy bread");
    }

    #[test]
    fn test_delete_reports_existence() {
        let mut book = sample_book();
        assert!(book.delete("ideas"));
        assert!(!book.delete("ideas"));
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_rename_moves_entry_and_updates_title() {
        let mut book = sample_book();
        book.rename("groceries", "shopping").unwrap();
        assert!(book.find("groceries").is_none());
        let renamed = book.find("shopping").unwrap();
        assert_eq!(renamed.title().as_str(), "shopping");
        assert_eq!(renamed.text().as_str(), "buy milk and eggs");
    }

    #[test]
    fn test_rename_missing_note_is_error() {
        let mut book = sample_book();
        let err = book.rename("nope", "other").unwrap_err();
        assert!(matches!(err, BookError::NoteNotFound(_)));
    }

    #[test]
    fn test_rename_onto_existing_title_is_rejected() {
        let mut book = sample_book();
        let err = book.rename("groceries", "standup").unwrap_err();
        assert!(matches!(err, BookError::DuplicateTitle(_)));
        // both notes intact
        assert!(book.find("groceries").is_some());
        assert!(book.find("standup").is_some());
    }

    #[test]
    fn test_rename_to_same_title_is_ok() {
        let mut book = sample_book();
        book.rename("groceries", "groceries").unwrap();
        assert!(book.find("groceries").is_some());
    }

    #[test]
    fn test_rename_invalid_title_keeps_note() {
        let mut book = sample_book();
        assert!(book.rename("groceries", "").is_err());
        assert!(book.find("groceries").is_some());
    }

    #[test]
    fn test_set_text() {
        let mut book = sample_book();
        book.set_text("ideas", "learn the accordion").unwrap();
        assert_eq!(
            book.find("ideas").unwrap().text().as_str(),
            "learn the accordion"
        );

        let err = book.set_text("nope", "anything").unwrap_err();
        assert!(matches!(err, BookError::NoteNotFound(_)));
    }

    #[test]
    fn test_search_by_title_substring_is_case_insensitive() {
        let book = sample_book();
        let found = book.search_by_title_substring("GROC");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title().as_str(), "groceries");
        assert!(book.search_by_title_substring("zzz").is_empty());
    }

    #[test]
    fn test_search_by_text_substring_is_case_insensitive() {
        let book = sample_book();
        let found = book.search_by_text_substring("MILK");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title().as_str(), "groceries");
    }

    #[test]
    fn test_search_by_tag_exact_case_insensitive() {
        let book = sample_book();
        let found = book.search_by_tag("WORK");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title().as_str(), "standup");

        // substring of a tag is not a match, and untagged notes never match
        assert!(book.search_by_tag("wor").is_empty());
        assert!(book.search_by_tag("").is_empty());
    }

    #[test]
    fn test_list_all_title_ordered() {
        let book = sample_book();
        let titles: Vec<&str> = book.list_all().iter().map(|n| n.title().as_str()).collect();
        assert_eq!(titles, vec!["groceries", "ideas", "standup"]);
    }

    #[test]
    fn test_distinct_tags_sorted() {
        let mut book = sample_book();
        book.add(note("review", "check the quarterly numbers", Some("Work")));
        book.add(note("plants", "water the ficus", Some("home")));

        // "Work" and "work" collapse; first-seen spelling wins
        assert_eq!(book.distinct_tags_sorted(), vec!["home", "Work"]);
    }

    #[test]
    fn test_distinct_tags_empty_book() {
        assert!(NoteBook::new().distinct_tags_sorted().is_empty());
    }
}
