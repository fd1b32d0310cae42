//! Command handlers: one function per REPL command.

use super::{CommandError, CommandResult};
use crate::book::AddressBook;
use crate::error::BookError;
use crate::models::Record;
use chrono::NaiveDate;

fn one_arg<'a>(args: &[&'a str], usage: &'static str) -> Result<&'a str, CommandError> {
    match args {
        &[arg] => Ok(arg),
        _ => Err(CommandError::Usage(usage)),
    }
}

fn two_args<'a>(args: &[&'a str], usage: &'static str) -> Result<(&'a str, &'a str), CommandError> {
    match args {
        &[first, second] => Ok((first, second)),
        _ => Err(CommandError::Usage(usage)),
    }
}

fn lookup<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Record, CommandError> {
    book.get(name)
        .ok_or_else(|| BookError::RecordNotFound(name.to_string()).into())
}

/// `add <name> <phone>` - create (or overwrite) a contact with one phone.
pub fn add_contact(book: &mut AddressBook, args: &[&str]) -> CommandResult {
    let (name, phone) = two_args(args, "add <name> <phone>")?;
    book.add_contact(name, Some(phone), None)?;
    Ok(format!("Contact {} added.", name))
}

/// `change <name> <new_phone>` - replace the contact's first phone.
pub fn change_contact(book: &mut AddressBook, args: &[&str]) -> CommandResult {
    let (name, new_phone) = two_args(args, "change <name> <new_phone>")?;
    let record = book
        .get_mut(name)
        .ok_or_else(|| BookError::RecordNotFound(name.to_string()))?;
    let old_phone = record
        .phones()
        .first()
        .ok_or_else(|| CommandError::NoPhones(name.to_string()))?
        .as_str()
        .to_string();
    record.edit_phone(&old_phone, new_phone)?;
    Ok(format!("Contact {}'s phone changed.", name))
}

/// `phone <name>` - show the contact's phone numbers.
pub fn show_phone(book: &AddressBook, args: &[&str]) -> CommandResult {
    let name = one_arg(args, "phone <name>")?;
    let record = lookup(book, name)?;
    let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
    Ok(phones.join(", "))
}

/// `all` - show every contact, one per line, in insertion order.
pub fn show_all(book: &AddressBook) -> CommandResult {
    if book.is_empty() {
        return Ok("Address book is empty.".to_string());
    }
    let lines: Vec<String> = book.records().map(|r| r.to_string()).collect();
    Ok(lines.join("\n"))
}

/// `add-birthday <name> <DD.MM.YYYY>` - set the contact's birthday.
pub fn add_birthday(book: &mut AddressBook, args: &[&str]) -> CommandResult {
    let (name, birthday) = two_args(args, "add-birthday <name> <DD.MM.YYYY>")?;
    let record = book
        .get_mut(name)
        .ok_or_else(|| BookError::RecordNotFound(name.to_string()))?;
    record.set_birthday(birthday)?;
    Ok(format!("Birthday added for {}", name))
}

/// `show-birthday <name>` - show the contact's birthday.
pub fn show_birthday(book: &AddressBook, args: &[&str]) -> CommandResult {
    let name = one_arg(args, "show-birthday <name>")?;
    let record = lookup(book, name)?;
    let birthday = record
        .birthday()
        .ok_or_else(|| CommandError::NoBirthday(name.to_string()))?;
    Ok(birthday.to_string())
}

/// `birthdays` - names with a birthday in the next week.
pub fn show_birthdays(book: &AddressBook, today: NaiveDate) -> CommandResult {
    let names = book.upcoming_birthdays(today);
    if names.is_empty() {
        Ok("No birthdays next week.".to_string())
    } else {
        Ok(names.join(", "))
    }
}
