//! Contact book command loop.

use super::parse_input;
use crate::books::{AddStatus, ContactBook};
use crate::config::Config;
use crate::error::{BookError, CommandError, CommandResult};
use crate::models::Contact;
use crate::storage;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

const HELP: &str = "\
Available commands:

  add [name] [phone]             - add a contact (or a phone to an existing one)
  change [name] [phone]          - replace a contact's phones with one number
  contact [name]                 - show one contact
  all                            - show all contacts
  add_birthday [name] [date]     - add a birthday (DD.MM.YYYY)
  show_birthday [name]           - show a contact's birthday
  birthdays [days]               - show upcoming birthdays
  add_email [name] [email]       - add an email
  add_address [name] [address]   - add an address
  delete [name]                  - delete a contact
  help                           - show this list
  close, exit                    - save and return to the main menu";

/// Run the contacts loop until the user closes it.
///
/// The book loads from disk on entry and saves on exit.
pub fn run(config: &Config, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
    let path = config.contacts_path();
    let mut book = storage::load_contacts(&path)?;
    writeln!(output, "Contact book ready. Type help for commands.")?;

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
        debug!(command = %command, "contacts command");

        match command.as_str() {
            "close" | "exit" => break,
            "help" => writeln!(output, "{}", HELP)?,
            _ => match dispatch(&command, &args, &mut book, config.birthday_window_days) {
                Some(Ok(message)) => writeln!(output, "{}", message)?,
                Some(Err(err)) => writeln!(output, "{}", err)?,
                None => writeln!(
                    output,
                    "Unknown command. Type help for the list of available commands."
                )?,
            },
        }
    }

    storage::save_contacts(&book, &path)?;
    writeln!(output, "Contact book saved.")?;
    Ok(())
}

/// Map a command name to its handler. `None` means the command is unknown.
fn dispatch(
    command: &str,
    args: &[String],
    book: &mut ContactBook,
    default_window: u64,
) -> Option<CommandResult<String>> {
    let result = match command {
        "add" => add_contact(args, book),
        "change" => change_contact(args, book),
        "contact" => show_contact(args, book),
        "all" => Ok(show_all(book)),
        "add_birthday" => add_birthday(args, book),
        "show_birthday" => show_birthday(args, book),
        "birthdays" => birthdays(args, book, default_window),
        "add_email" => add_email(args, book),
        "add_address" => add_address(args, book),
        "delete" => delete_contact(args, book),
        _ => return None,
    };
    Some(result)
}

fn usage(message: &str) -> CommandError {
    CommandError::Usage(message.to_string())
}

fn found<'a>(book: &'a mut ContactBook, name: &str) -> CommandResult<&'a mut Contact> {
    book.find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()).into())
}

fn add_contact(args: &[String], book: &mut ContactBook) -> CommandResult<String> {
    let [name, phone] = args else {
        return Err(usage("Usage: add [name] [phone]"));
    };
    let mut contact = Contact::new(name.as_str())?;
    contact.add_phone(phone)?;
    Ok(match book.add(contact) {
        AddStatus::Created => format!("Created contact {} with phone {}.", name, phone),
        AddStatus::Merged => format!("Contact {} already exists. Added phone {}.", name, phone),
    })
}

fn change_contact(args: &[String], book: &mut ContactBook) -> CommandResult<String> {
    let [name, phone] = args else {
        return Err(usage("Usage: change [name] [phone]"));
    };
    found(book, name)?.replace_phones(phone)?;
    Ok(format!("Phone for {} changed to {}.", name, phone))
}

fn show_contact(args: &[String], book: &mut ContactBook) -> CommandResult<String> {
    let [name] = args else {
        return Err(usage("Usage: contact [name]"));
    };
    match book.find(name) {
        Some(contact) => Ok(contact.to_string()),
        None => Err(BookError::ContactNotFound(name.to_string()).into()),
    }
}

fn show_all(book: &ContactBook) -> String {
    if book.is_empty() {
        return "The contact book is empty.".to_string();
    }
    book.iter()
        .map(|contact| contact.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn add_birthday(args: &[String], book: &mut ContactBook) -> CommandResult<String> {
    let [name, date] = args else {
        return Err(usage("Usage: add_birthday [name] [DD.MM.YYYY]"));
    };
    found(book, name)?.set_birthday(date)?;
    Ok(format!("Birthday added to {}.", name))
}

fn show_birthday(args: &[String], book: &mut ContactBook) -> CommandResult<String> {
    let [name] = args else {
        return Err(usage("Usage: show_birthday [name]"));
    };
    let contact = found(book, name)?;
    Ok(match contact.birthday() {
        Some(birthday) => format!("{}'s birthday is {}.", name, birthday),
        None => format!("{} has no birthday saved.", name),
    })
}

fn birthdays(args: &[String], book: &mut ContactBook, default_window: u64) -> CommandResult<String> {
    let days = match args.first() {
        Some(raw) => raw.parse::<u64>().map_err(|_| {
            usage("Enter the number of days as a whole number, e.g.: birthdays 5")
        })?,
        None => default_window,
    };

    let upcoming = book.upcoming_birthdays(days);
    if upcoming.is_empty() {
        return Ok(format!("No birthdays in the next {} days.", days));
    }

    let mut lines = vec![format!("Birthdays in the next {} days:", days)];
    for entry in upcoming {
        lines.push(format!(
            "{}: congratulate on {}",
            entry.contact.name(),
            entry.congratulation.format("%d.%m.%Y")
        ));
    }
    Ok(lines.join("\n"))
}

fn add_email(args: &[String], book: &mut ContactBook) -> CommandResult<String> {
    let [name, email] = args else {
        return Err(usage("Usage: add_email [name] [email]"));
    };
    found(book, name)?.set_email(email)?;
    Ok(format!("Email added to {}.", name))
}

fn add_address(args: &[String], book: &mut ContactBook) -> CommandResult<String> {
    let Some((name, rest)) = args.split_first() else {
        return Err(usage("Usage: add_address [name] [address]"));
    };
    if rest.is_empty() {
        return Err(usage("Usage: add_address [name] [address]"));
    }
    found(book, name)?.set_address(&rest.join(" "))?;
    Ok(format!("Address added to {}.", name))
}

fn delete_contact(args: &[String], book: &mut ContactBook) -> CommandResult<String> {
    let [name] = args else {
        return Err(usage("Usage: delete [name]"));
    };
    match book.delete(name) {
        Some(_) => Ok(format!("Contact {} deleted.", name)),
        None => Err(BookError::ContactNotFound(name.to_string()).into()),
    }
}
