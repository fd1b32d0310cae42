//! Record model representing a single contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::{BookError, BookResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name, its phone numbers, and an optional birthday.
///
/// The name is fixed at construction and serves as the address book key.
/// Phone numbers keep their insertion order and may contain duplicates;
/// every entry is validated before it enters the list. At most one
/// birthday is stored; setting it again replaces the previous value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    name: ContactName,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The contact's phone numbers, in the order they were added.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The contact's birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// No de-duplication: adding an already-present number creates a
    /// duplicate entry.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the value is not exactly
    /// 10 decimal digits. The phone list is unchanged on failure.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone entry that equals `phone` exactly.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if no entry matches.
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<()> {
        match self.phones.iter().position(|p| p.as_str() == phone) {
            Some(index) => {
                self.phones.remove(index);
                Ok(())
            }
            None => Err(BookError::PhoneNotFound(phone.to_string())),
        }
    }

    /// Replace the first phone entry equal to `old` with `new`, in place.
    ///
    /// `new` is validated before the list is searched, so a rejected
    /// replacement leaves the phone list untouched.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` (as `BookError::Validation`)
    /// if `new` is invalid, or `BookError::PhoneNotFound` if `old` is absent.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let new = PhoneNumber::new(new).map_err(BookError::from)?;
        match self.phones.iter().position(|p| p.as_str() == old) {
            Some(index) => {
                self.phones[index] = new;
                Ok(())
            }
            None => Err(BookError::PhoneNotFound(old.to_string())),
        }
    }

    /// Validate and set the birthday, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the value is not a
    /// real calendar date in `DD.MM.YYYY` format. The previous birthday,
    /// if any, is kept on failure.
    pub fn set_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// Whole days from `today` to the next occurrence of the birthday.
    ///
    /// Returns `None` when no birthday is set. See
    /// [`Birthday::days_until`] for the next-occurrence policy.
    pub fn days_until_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.map(|b| b.days_until(today))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}", self.name)?;
        if !self.phones.is_empty() {
            let phones: Vec<&str> = self.phones.iter().map(|p| p.as_str()).collect();
            write!(f, ", Phones: {}", phones.join("; "))?;
        }
        if let Some(birthday) = &self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }
        Ok(())
    }
}
