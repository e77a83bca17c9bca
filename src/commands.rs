//! User commands and their handlers.
//!
//! Each handler borrows the address book for the duration of the call
//! and returns either a success message or a typed failure; the
//! interactive loop owns all printing.

use crate::book::AddressBook;
use crate::domain::Name;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use crate::scheduler::upcoming_birthdays;
use chrono::NaiveDate;
use std::str::FromStr;
use tracing::debug;

/// A recognized user command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Greet the user
    Hello,
    /// Add a contact, or a phone to an existing contact
    Add,
    /// Replace one of a contact's phone numbers
    Change,
    /// Show a contact's phone numbers
    Phone,
    /// Show every contact
    All,
    /// Set a contact's birthday
    AddBirthday,
    /// Show a contact's birthday
    ShowBirthday,
    /// Show birthdays coming up within a week
    Birthdays,
    /// Leave the assistant
    Exit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "close" | "exit" => Ok(Command::Exit),
            other => Err(format!("unknown command: {}", other)),
        }
    }
}

/// Route a parsed command to its handler.
///
/// `today` is the wall-clock date supplied by the caller; the core
/// never reads the clock itself.
pub fn dispatch(
    command: Command,
    args: &[&str],
    book: &mut AddressBook,
    today: NaiveDate,
) -> CommandResult<String> {
    debug!(?command, ?args, "dispatching command");
    match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add => add_contact(args, book),
        Command::Change => change_contact(args, book),
        Command::Phone => show_phones(args, book),
        Command::All => show_all(book),
        Command::AddBirthday => add_birthday(args, book),
        Command::ShowBirthday => show_birthday(args, book),
        Command::Birthdays => birthdays(book, today),
        Command::Exit => Ok("Good bye!".to_string()),
    }
}

/// `add <name> <phone>`: create the contact if needed, then attach the
/// phone.
///
/// The contact is created before the phone is validated, so a bad
/// phone still leaves the new contact in the book (see DESIGN.md).
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone, ..] = args else {
        return Err(CommandError::MissingArgument(
            "Name and phone are required fields.",
        ));
    };

    let message = if book.find(name).is_some() {
        "Contact updated."
    } else {
        book.add_record(Record::new(Name::new(*name)?));
        "Contact added."
    };

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
    }

    Ok(message.to_string())
}

/// `change <name> <old> <new>`: replace one phone number.
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old, new, ..] = args else {
        return Err(CommandError::MissingArgument(
            "Name, old and new phone are required fields.",
        ));
    };

    let record = book.find_mut(name).ok_or(CommandError::ContactNotFound)?;
    record.edit_phone(old, *new);
    Ok("Contact updated.".to_string())
}

/// `phone <name>`: list a contact's phone numbers.
pub fn show_phones(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::MissingArgument("Name is a required field."));
    };

    let record = book.find(name).ok_or(CommandError::ContactNotFound)?;
    let phones = record
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!("{} phones: {}", name, phones))
}

/// `all`: one line per contact.
pub fn show_all(book: &AddressBook) -> CommandResult<String> {
    if book.is_empty() {
        return Ok("No contacts.".to_string());
    }
    let lines = book
        .iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>();
    Ok(lines.join("\n"))
}

/// `add-birthday <name> <DD-MM-YYYY>`: set a contact's birthday.
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, birthday, ..] = args else {
        return Err(CommandError::MissingArgument(
            "Name and birthday are required fields.",
        ));
    };

    let record = book.find_mut(name).ok_or(CommandError::ContactNotFound)?;
    record.add_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`: show a contact's birthday.
pub fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::MissingArgument("Name is a required field."));
    };

    let record = book.find(name).ok_or(CommandError::ContactNotFound)?;
    match record.birthday() {
        Some(birthday) => Ok(format!("{} birthday: {}", name, birthday)),
        None => Ok(format!("{} has no birthday.", name)),
    }
}

/// `birthdays`: the congratulation schedule for the coming week.
pub fn birthdays(book: &AddressBook, today: NaiveDate) -> CommandResult<String> {
    let celebrators = upcoming_birthdays(book, today);
    if celebrators.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }
    let lines = celebrators
        .iter()
        .map(|c| format!("{}: {}", c.name, c.congratulation_date))
        .collect::<Vec<_>>();
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn test_command_from_str() {
        assert_eq!("hello".parse::<Command>().unwrap(), Command::Hello);
        assert_eq!("ADD".parse::<Command>().unwrap(), Command::Add);
        assert_eq!(
            "add-birthday".parse::<Command>().unwrap(),
            Command::AddBirthday
        );
        assert_eq!("close".parse::<Command>().unwrap(), Command::Exit);
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Exit);
        assert!("frobnicate".parse::<Command>().is_err());
    }

    #[test]
    fn test_add_contact_creates_then_updates() {
        let mut book = AddressBook::new();

        let message = add_contact(&["John", "1234567890"], &mut book).unwrap();
        assert_eq!(message, "Contact added.");

        let message = add_contact(&["John", "0987654321"], &mut book).unwrap();
        assert_eq!(message, "Contact updated.");

        assert_eq!(book.find("John").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_add_contact_missing_args() {
        let mut book = AddressBook::new();
        let err = add_contact(&["John"], &mut book).unwrap_err();
        assert_eq!(err.to_string(), "Name and phone are required fields.");
    }

    #[test]
    fn test_add_contact_bad_phone_still_creates_contact() {
        // The record lands in the book before the phone is validated.
        let mut book = AddressBook::new();
        let err = add_contact(&["John", "12345"], &mut book).unwrap_err();
        assert!(err.to_string().contains("10 digits"));
        assert!(book.find("John").is_some());
        assert!(book.find("John").unwrap().phones().is_empty());
    }

    #[test]
    fn test_change_contact() {
        let mut book = AddressBook::new();
        add_contact(&["John", "1112223333"], &mut book).unwrap();

        let message =
            change_contact(&["John", "1112223333", "4445556666"], &mut book).unwrap();
        assert_eq!(message, "Contact updated.");
        assert_eq!(
            book.find("John").unwrap().phones()[0].as_str(),
            "4445556666"
        );
    }

    #[test]
    fn test_change_contact_not_found() {
        let mut book = AddressBook::new();
        let err = change_contact(&["John", "1112223333", "4445556666"], &mut book).unwrap_err();
        assert_eq!(err.to_string(), "Contact not found.");
    }

    #[test]
    fn test_show_phones() {
        let mut book = AddressBook::new();
        add_contact(&["John", "1234567890"], &mut book).unwrap();
        add_contact(&["John", "0987654321"], &mut book).unwrap();

        let message = show_phones(&["John"], &book).unwrap();
        assert_eq!(message, "John phones: 1234567890, 0987654321");
    }

    #[test]
    fn test_show_phones_not_found() {
        let book = AddressBook::new();
        let err = show_phones(&["John"], &book).unwrap_err();
        assert_eq!(err.to_string(), "Contact not found.");
    }

    #[test]
    fn test_show_all() {
        let mut book = AddressBook::new();
        assert_eq!(show_all(&book).unwrap(), "No contacts.");

        add_contact(&["John", "1234567890"], &mut book).unwrap();
        let message = show_all(&book).unwrap();
        assert_eq!(message, "Contact name: John, phones: 1234567890");
    }

    #[test]
    fn test_add_and_show_birthday() {
        let mut book = AddressBook::new();
        add_contact(&["John", "1234567890"], &mut book).unwrap();

        assert_eq!(
            show_birthday(&["John"], &book).unwrap(),
            "John has no birthday."
        );

        let message = add_birthday(&["John", "15-06-1990"], &mut book).unwrap();
        assert_eq!(message, "Birthday added.");
        assert_eq!(
            show_birthday(&["John"], &book).unwrap(),
            "John birthday: 15-06-1990"
        );
    }

    #[test]
    fn test_add_birthday_invalid_date() {
        let mut book = AddressBook::new();
        add_contact(&["John", "1234567890"], &mut book).unwrap();

        let err = add_birthday(&["John", "31-02-2024"], &mut book).unwrap_err();
        assert!(err.to_string().starts_with("Invalid date format"));
        assert!(book.find("John").unwrap().birthday().is_none());
    }

    #[test]
    fn test_birthdays_output() {
        let mut book = AddressBook::new();
        add_contact(&["John", "1234567890"], &mut book).unwrap();

        assert_eq!(
            birthdays(&book, today()).unwrap(),
            "No upcoming birthdays."
        );

        add_birthday(&["John", "15-06-1990"], &mut book).unwrap();
        assert_eq!(birthdays(&book, today()).unwrap(), "John: 2024-06-17");
    }

    #[test]
    fn test_dispatch_routes_commands() {
        let mut book = AddressBook::new();

        let message = dispatch(Command::Hello, &[], &mut book, today()).unwrap();
        assert_eq!(message, "How can I help you?");

        let message =
            dispatch(Command::Add, &["John", "1234567890"], &mut book, today()).unwrap();
        assert_eq!(message, "Contact added.");

        let message = dispatch(Command::Exit, &[], &mut book, today()).unwrap();
        assert_eq!(message, "Good bye!");
    }
}
