//! The address book: an insertion-ordered store of contact records.

use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Length of the upcoming-birthday window, in days past `today` (inclusive).
const BIRTHDAY_WINDOW_DAYS: i64 = 7;

/// An in-memory collection of records keyed by contact name.
///
/// Names are unique and case-sensitive. Iteration yields records in the
/// order their names were first inserted; overwriting a name keeps its
/// original position. The book exclusively owns its records.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    // Insertion order of keys; every entry has a record in `records`.
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the book contains no records.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Insert a record, keyed by its name.
    ///
    /// Inserting under an existing name replaces that record wholesale
    /// (last write wins, no merge) and keeps its position in the
    /// iteration order. A new name goes to the end.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().to_string();
        if self.records.insert(name.clone(), record).is_none() {
            self.order.push(name);
        }
    }

    /// Build a record from raw field values and insert it.
    ///
    /// Convenience for callers holding unvalidated input. Nothing is
    /// inserted unless every provided field validates.
    ///
    /// # Errors
    ///
    /// Returns the validation error of the first field that is rejected.
    pub fn add_contact(
        &mut self,
        name: &str,
        phone: Option<&str>,
        birthday: Option<&str>,
    ) -> BookResult<()> {
        let mut record = Record::new(name).map_err(BookError::from)?;
        if let Some(phone) = phone {
            record.add_phone(phone)?;
        }
        if let Some(birthday) = birthday {
            record.set_birthday(birthday)?;
        }
        self.add_record(record);
        Ok(())
    }

    /// Look up a record by exact name.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Replace `old` with `new` in the named record's phone list.
    ///
    /// # Errors
    ///
    /// Returns `BookError::RecordNotFound` if the name is absent;
    /// otherwise whatever [`Record::edit_phone`] returns. The record is
    /// unchanged on any failure.
    pub fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> BookResult<()> {
        let record = self
            .records
            .get_mut(name)
            .ok_or_else(|| BookError::RecordNotFound(name.to_string()))?;
        record.edit_phone(old, new)
    }

    /// Iterate over all records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|name| self.records.get(name))
    }

    /// Names of contacts whose birthday falls within the next week.
    ///
    /// A record qualifies when THIS year's occurrence of its birthday
    /// (Feb 29 resolving to Mar 1 in common years) lies in the inclusive
    /// window `[today, today + 7 days]`. A birthday whose occurrence has
    /// already passed this year is excluded even near year-end; it is
    /// never rolled forward into next year's window. Names are returned
    /// in insertion order, not date order.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<String> {
        let window_end = today + Duration::days(BIRTHDAY_WINDOW_DAYS);
        self.records()
            .filter_map(|record| {
                let occurrence = record.birthday()?.occurrence_in_year(today.year());
                (occurrence >= today && occurrence <= window_end)
                    .then(|| record.name().to_string())
            })
            .collect()
    }
}

// Serde support - serialize as a record sequence in insertion order
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.records())
    }
}

// Serde support - rebuild the keyed store from the record sequence
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        Ok(book)
    }
}
