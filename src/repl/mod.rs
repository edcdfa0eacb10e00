//! Interactive command layer.
//!
//! Owns every piece of user-facing text: tokenizes input lines, maps
//! commands to core operations, and renders results and errors. The core
//! books never read input or print anything themselves.

pub mod contacts;
pub mod notes;

use crate::config::Config;
use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Split an input line into a lowercased command and its argument tokens.
///
/// Returns `None` for blank lines.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some((command, args))
}

/// Run the top-level menu until the user exits.
pub fn run(config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_menu(config, &mut input, &mut output)
}

fn run_menu(config: &Config, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
    writeln!(output, "Welcome to daybook, your personal assistant.")?;
    loop {
        writeln!(output)?;
        writeln!(output, "Main menu")?;
        writeln!(output, "1. Contact book")?;
        writeln!(output, "2. Notes")?;
        writeln!(output, "3. Exit")?;
        write!(output, "Select an option (1/2/3): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF behaves like exit
            return Ok(());
        }

        match line.trim() {
            "1" => contacts::run(config, input, output)?,
            "2" => notes::run(config, input, output)?,
            "3" => {
                writeln!(output, "Goodbye!")?;
                return Ok(());
            }
            other => writeln!(output, "Unknown option: {}. Try again.", other)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_lowercases_command() {
        let (command, args) = parse_input("ADD Alice 0501234567").unwrap();
        assert_eq!(command, "add");
        assert_eq!(args, vec!["Alice", "0501234567"]);
    }

    #[test]
    fn test_parse_input_trims_and_splits() {
        let (command, args) = parse_input("  all   ").unwrap();
        assert_eq!(command, "all");
        assert!(args.is_empty());
    }

    #[test]
    fn test_parse_input_blank_line() {
        assert!(parse_input("").is_none());
        assert!(parse_input("   ").is_none());
    }
}
