//! REPL command parsing and dispatch.
//!
//! A line is split on whitespace; the first token selects a handler and the
//! remaining tokens are passed through verbatim. Only the command token is
//! lowercased, so contact names stay case-sensitive.

pub mod handlers;

use crate::book::AddressBook;
use crate::domain::ValidationError;
use crate::error::BookError;
use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

/// Errors surfaced to the user by a command handler.
#[derive(Error, Debug)]
pub enum CommandError {
    /// An address book operation failed
    #[error("{0}")]
    Book(#[from] BookError),

    /// Wrong number of arguments for the command
    #[error("Usage: {0}")]
    Usage(&'static str),

    /// The named contact has no phone numbers to change
    #[error("Contact {0} has no phone numbers")]
    NoPhones(String),

    /// The named contact has no birthday set
    #[error("Contact {0} has no birthday set")]
    NoBirthday(String),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        Self::Book(BookError::from(err))
    }
}

/// Convenience type alias for handler results
pub type CommandResult = Result<String, CommandError>;

/// Outcome of executing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to print before reading the next line
    Message(String),
    /// Text to print before leaving the loop
    Farewell(String),
    /// Blank input; print nothing
    Empty,
}

/// Execute one line of user input against the book.
///
/// Handler failures are rendered as their message and returned as ordinary
/// replies; nothing here ends the loop except `close`/`exit`.
pub fn execute(book: &mut AddressBook, line: &str, today: NaiveDate) -> Reply {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Reply::Empty;
    };
    let args: Vec<&str> = parts.collect();

    let result = match command.to_lowercase().as_str() {
        "add" => handlers::add_contact(book, &args),
        "change" => handlers::change_contact(book, &args),
        "phone" => handlers::show_phone(book, &args),
        "all" => handlers::show_all(book),
        "add-birthday" => handlers::add_birthday(book, &args),
        "show-birthday" => handlers::show_birthday(book, &args),
        "birthdays" => handlers::show_birthdays(book, today),
        "hello" => Ok("How can I help you?".to_string()),
        "close" | "exit" => return Reply::Farewell("Good bye!".to_string()),
        _ => return Reply::Message("Unknown command".to_string()),
    };

    match result {
        Ok(message) => Reply::Message(message),
        Err(err) => {
            debug!("Command {} failed: {}", command, err);
            Reply::Message(err.to_string())
        }
    }
}
