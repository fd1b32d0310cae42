//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The single accepted birthday pattern: 2-digit day, 2-digit month, 4-digit year.
const DATE_FORMAT: &str = "%d.%m.%Y";

// chrono alone would accept "1.1.1990"; the regex enforces the exact shape.
static BIRTHDAY_REGEX: Lazy<Regex> =
    Lazy::new(|| {
        Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
    });

/// A type-safe wrapper for birthdays.
///
/// This ensures that birthdays are validated at construction time. A valid
/// birthday is a real calendar date in `DD.MM.YYYY` format, e.g.
/// "24.12.1990". Impossible dates such as "31.02.2000" are rejected.
///
/// # Example
///
/// ```
/// use rolo::domain::Birthday;
///
/// let birthday = Birthday::new("24.12.1990").unwrap();
/// assert_eq!(birthday.to_string(), "24.12.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday, validating the format and calendar date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the value is not a
    /// real calendar date in `DD.MM.YYYY` format.
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let birthday = birthday.into();

        if !BIRTHDAY_REGEX.is_match(&birthday) {
            return Err(ValidationError::InvalidBirthday(birthday));
        }

        match NaiveDate::parse_from_str(&birthday, DATE_FORMAT) {
            Ok(date) => Ok(Self(date)),
            Err(_) => Err(ValidationError::InvalidBirthday(birthday)),
        }
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The occurrence of this birthday's month/day in the given year.
    ///
    /// A Feb 29 birthday resolves to Mar 1 when `year` is not a leap year.
    pub fn occurrence_in_year(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day()).unwrap_or_else(|| {
            NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists in every year")
        })
    }

    /// Whole days from `today` until the next occurrence of this birthday.
    ///
    /// This year's occurrence is used unless it is strictly before `today`,
    /// in which case next year's occurrence is used. A birthday falling on
    /// `today` yields 0.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        let mut next = self.occurrence_in_year(today.year());
        if next < today {
            next = self.occurrence_in_year(today.year() + 1);
        }
        (next - today).num_days()
    }
}

// Serde support - serialize as a DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
