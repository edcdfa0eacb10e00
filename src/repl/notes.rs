//! Note book command loop.

use super::parse_input;
use crate::books::NoteBook;
use crate::config::Config;
use crate::error::{BookError, CommandError, CommandResult};
use crate::models::Note;
use crate::storage;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

const HELP: &str = "\
Available commands:

  add [title] [text] [tag]        - add a note (last token is the tag when three or more are given)
  edit_name [old] [new]           - rename a note
  edit_text [title] [text]        - replace a note's text
  all                             - show all notes
  delete [title]                  - delete a note
  search [title fragment]         - search by title
  search_notes [keyword]          - search by text
  search_tag [tag]                - search by tag
  sort_tags                       - show all tags in alphabetical order
  help                            - show this list
  close, exit                     - return to the main menu";

/// Commands that change the book; the loop saves after each of these.
const MUTATING: &[&str] = &["add", "delete", "edit_name", "edit_text"];

/// Run the notes loop until the user closes it.
///
/// The book loads from disk on entry and saves after every mutation.
pub fn run(config: &Config, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
    let path = config.notes_path();
    let mut book = storage::load_notes(&path)?;
    writeln!(output, "Notes ready. Type help for commands.")?;

    loop {
        write!(output, "--> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let Some((command, args)) = parse_input(&line) else {
            continue;
        };
        debug!(command = %command, "notes command");

        match command.as_str() {
            "close" | "exit" => break,
            "help" => writeln!(output, "{}", HELP)?,
            _ => match dispatch(&command, &args, &mut book) {
                Some(Ok(message)) => {
                    writeln!(output, "{}", message)?;
                    if MUTATING.contains(&command.as_str()) {
                        storage::save_notes(&book, &path)?;
                    }
                }
                Some(Err(err)) => writeln!(output, "{}", err)?,
                None => writeln!(
                    output,
                    "Unknown command. Type help for the list of available commands."
                )?,
            },
        }
    }

    storage::save_notes(&book, &path)?;
    Ok(())
}

/// Map a command name to its handler. `None` means the command is unknown.
fn dispatch(command: &str, args: &[String], book: &mut NoteBook) -> Option<CommandResult<String>> {
    let result = match command {
        "add" => add_note(args, book),
        "delete" => delete_note(args, book),
        "edit_name" => edit_name(args, book),
        "edit_text" => edit_text(args, book),
        "all" => Ok(show_all(book)),
        "search" => search_by_title(args, book),
        "search_notes" => search_by_text(args, book),
        "search_tag" => search_by_tag(args, book),
        "sort_tags" => Ok(sort_tags(book)),
        _ => return None,
    };
    Some(result)
}

fn usage(message: &str) -> CommandError {
    CommandError::Usage(message.to_string())
}

fn add_note(args: &[String], book: &mut NoteBook) -> CommandResult<String> {
    if args.len() < 2 {
        return Err(usage("Usage: add [title] [text] [tag]"));
    }
    let title = &args[0];
    // With three or more tokens, the trailing one is the tag.
    let (text, tag) = if args.len() > 2 {
        (args[1..args.len() - 1].join(" "), args.last().map(String::as_str))
    } else {
        (args[1].clone(), None)
    };

    book.add(Note::new(title.as_str(), text, tag)?);
    Ok(format!("Note '{}' added.", title))
}

fn delete_note(args: &[String], book: &mut NoteBook) -> CommandResult<String> {
    let [title] = args else {
        return Err(usage("Usage: delete [title]"));
    };
    if book.delete(title) {
        Ok(format!("Note '{}' deleted.", title))
    } else {
        Err(BookError::NoteNotFound(title.to_string()).into())
    }
}

fn edit_name(args: &[String], book: &mut NoteBook) -> CommandResult<String> {
    let [old, new] = args else {
        return Err(usage("Usage: edit_name [old title] [new title]"));
    };
    book.rename(old, new)?;
    Ok(format!("Note '{}' renamed to '{}'.", old, new))
}

fn edit_text(args: &[String], book: &mut NoteBook) -> CommandResult<String> {
    let Some((title, rest)) = args.split_first() else {
        return Err(usage("Usage: edit_text [title] [new text]"));
    };
    if rest.is_empty() {
        return Err(usage("Usage: edit_text [title] [new text]"));
    }
    book.set_text(title, &rest.join(" "))?;
    Ok(format!("Note '{}' updated.", title))
}

fn show_all(book: &NoteBook) -> String {
    if book.is_empty() {
        return "The note book is empty.".to_string();
    }
    render_notes(&book.list_all())
}

fn search_by_title(args: &[String], book: &mut NoteBook) -> CommandResult<String> {
    if args.is_empty() {
        return Err(usage("Usage: search [title fragment]"));
    }
    let found = book.search_by_title_substring(&args.join(" "));
    if found.is_empty() {
        Ok("No notes found.".to_string())
    } else {
        Ok(render_notes(&found))
    }
}

fn search_by_text(args: &[String], book: &mut NoteBook) -> CommandResult<String> {
    if args.is_empty() {
        return Err(usage("Usage: search_notes [keyword]"));
    }
    let found = book.search_by_text_substring(&args.join(" "));
    if found.is_empty() {
        Ok("No notes found.".to_string())
    } else {
        Ok(render_notes(&found))
    }
}

fn search_by_tag(args: &[String], book: &mut NoteBook) -> CommandResult<String> {
    let [tag] = args else {
        return Err(usage("Usage: search_tag [tag]"));
    };
    let found = book.search_by_tag(tag);
    if found.is_empty() {
        Ok("No notes found with that tag.".to_string())
    } else {
        Ok(render_notes(&found))
    }
}

fn sort_tags(book: &NoteBook) -> String {
    let tags = book.distinct_tags_sorted();
    if tags.is_empty() {
        return "No tags found.".to_string();
    }
    let mut lines = vec!["All tags in alphabetical order:".to_string()];
    lines.extend(tags.into_iter().map(|tag| format!("- {}", tag)));
    lines.join("\n")
}

fn render_notes(notes: &[&Note]) -> String {
    notes
        .iter()
        .map(|note| note.to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}
