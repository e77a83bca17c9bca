//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use serde::Serialize;
use std::fmt;

/// A single contact: a fixed name, its phone numbers in insertion
/// order, and an optional birthday.
///
/// The name is set at creation and never changes; it doubles as the
/// contact's key inside [`AddressBook`](crate::book::AddressBook).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record holding only a name.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The contact's phone numbers, in the order they were added.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The contact's birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it to the phone list.
    ///
    /// Duplicates are not rejected. On a validation failure the record
    /// is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `raw` is not exactly
    /// 10 decimal digits.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replace the value of the first phone equal to `old` with `new`.
    ///
    /// The replacement value is stored as-is; it gets no format check
    /// (see DESIGN.md). When `old` is not present this is a no-op and
    /// not an error.
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) {
        if let Some(phone) = self.phones.iter_mut().find(|p| p.as_str() == old) {
            phone.set_unchecked(new);
        }
    }

    /// Find the first phone equal to `value`.
    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Remove the first phone equal to `value`, if present.
    pub fn remove_phone(&mut self, value: &str) {
        if let Some(pos) = self.phones.iter().position(|p| p.as_str() == value) {
            self.phones.remove(pos);
        }
    }

    /// Validate `raw` and set it as the birthday, overwriting any
    /// previous one. A prior birthday is left intact on failure.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if `raw` is not a
    /// real `DD-MM-YYYY` calendar date.
    pub fn add_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        let birthday = Birthday::new(raw)?;
        self.birthday = Some(birthday);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)
    }
}
