//! Note record: a titled body of text with an optional tag.

use crate::domain::{NoteText, NoteTitle, Tag, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column width used when rendering a note body.
const WRAP_WIDTH: usize = 50;

/// A note in the note book.
///
/// Owns one [`NoteTitle`] (its key in the owning book), one [`NoteText`]
/// body, and at most one [`Tag`]. The title is replaced through
/// [`Note::rename`]; re-keying the owning book is the book's job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    title: NoteTitle,
    text: NoteText,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    tag: Option<Tag>,
}

impl Note {
    /// Create a new note, validating every part.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` raised by the title, text, or
    /// tag constructor.
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        tag: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: NoteTitle::new(title)?,
            text: NoteText::new(text)?,
            tag: tag.map(Tag::new).transpose()?,
        })
    }

    /// The note's title.
    pub fn title(&self) -> &NoteTitle {
        &self.title
    }

    /// The note's body text.
    pub fn text(&self) -> &NoteText {
        &self.text
    }

    /// The note's tag, when set.
    pub fn tag(&self) -> Option<&Tag> {
        self.tag.as_ref()
    }

    /// Validate and store a new body, overwriting the old one.
    pub fn set_text(&mut self, new_text: &str) -> Result<(), ValidationError> {
        self.text = NoteText::new(new_text)?;
        Ok(())
    }

    /// Validate and store a tag, overwriting any prior one.
    pub fn set_tag(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.tag = Some(Tag::new(raw)?);
        Ok(())
    }

    /// Remove the tag, if any.
    pub fn clear_tag(&mut self) {
        self.tag = None;
    }

    /// Validate and store a new title.
    ///
    /// The owning book is responsible for moving the note to the new key;
    /// see `NoteBook::rename`.
    pub(crate) fn rename(&mut self, new_title: &str) -> Result<(), ValidationError> {
        self.title = NoteTitle::new(new_title)?;
        Ok(())
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag_display = match &self.tag {
            Some(tag) => format!(" [tag: {}]", tag),
            None => String::new(),
        };
        write!(
            f,
            "Note: {}\n{}{}",
            self.title,
            wrap(self.text.as_str(), WRAP_WIDTH),
            tag_display
        )
    }
}

/// Greedy word wrap: words join with single spaces, lines never exceed
/// `width` unless a single word is longer than the whole line.
fn wrap(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}
