//! Integration tests for the address book public API.

use chrono::NaiveDate;
use rolo::domain::ValidationError;
use rolo::{storage, AddressBook, BookError, Record};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn phones(book: &AddressBook, name: &str) -> Vec<String> {
    book.get(name)
        .unwrap()
        .phones()
        .iter()
        .map(|p| p.as_str().to_string())
        .collect()
}

#[test]
fn test_add_then_lookup() {
    let mut book = AddressBook::new();
    book.add_contact("Jane", Some("1234567890"), None).unwrap();

    let record = book.get("Jane").unwrap();
    assert_eq!(phones(&book, "Jane"), vec!["1234567890"]);
    assert!(record.birthday().is_none());
    assert!(book.get("Unknown").is_none());
}

#[test]
fn test_rejected_edit_leaves_record_unchanged() {
    let mut book = AddressBook::new();
    book.add_contact("Jane", Some("1234567890"), None).unwrap();

    let err = book.edit_phone("Jane", "1234567890", "12-34").unwrap_err();
    assert!(matches!(
        err,
        BookError::Validation(ValidationError::InvalidPhone(p)) if p == "12-34"
    ));
    assert_eq!(phones(&book, "Jane"), vec!["1234567890"]);
}

#[test]
fn test_days_until_birthday_before_and_after_occurrence() {
    let mut record = Record::new("Jane").unwrap();
    record.set_birthday("24.12.1990").unwrap();

    // Four days before this year's occurrence
    assert_eq!(record.days_until_birthday(date(2025, 12, 20)), Some(4));

    // The day after: next year's occurrence, 24.12.2026
    let expected = (date(2026, 12, 24) - date(2025, 12, 25)).num_days();
    assert_eq!(record.days_until_birthday(date(2025, 12, 25)), Some(expected));
}

#[test]
fn test_upcoming_birthdays_three_vs_ten_days() {
    let today = date(2025, 4, 1);
    let mut book = AddressBook::new();
    book.add_contact("Near", Some("1111111111"), Some("04.04.1990"))
        .unwrap();
    book.add_contact("Far", Some("2222222222"), Some("11.04.1990"))
        .unwrap();

    assert_eq!(book.upcoming_birthdays(today), vec!["Near".to_string()]);
}

#[test]
fn test_export_import_reconstructs_equivalent_book() {
    let mut book = AddressBook::new();
    book.add_contact("Carol", Some("1111111111"), Some("24.12.1990"))
        .unwrap();
    book.add_contact("Alice", None, Some("29.02.2000")).unwrap();
    let mut bob = Record::new("Bob").unwrap();
    bob.add_phone("3333333333").unwrap();
    bob.add_phone("4444444444").unwrap();
    bob.add_phone("3333333333").unwrap();
    book.add_record(bob);

    let blob = storage::export_state(&book).unwrap();
    let restored = storage::import_state(&blob).unwrap();

    assert_eq!(restored, book);
    let names: Vec<&str> = restored.records().map(|r| r.name()).collect();
    assert_eq!(names, vec!["Carol", "Alice", "Bob"]);
    assert_eq!(
        phones(&restored, "Bob"),
        vec!["3333333333", "4444444444", "3333333333"]
    );
    assert_eq!(
        restored.get("Carol").unwrap().birthday().unwrap().to_string(),
        "24.12.1990"
    );
}

#[test]
fn test_full_workflow() {
    let today = date(2025, 6, 10);
    let mut book = AddressBook::new();

    book.add_contact("Jane", Some("1234567890"), None).unwrap();
    book.add_contact("Bob", Some("5555555555"), Some("14.06.1980"))
        .unwrap();

    book.edit_phone("Jane", "1234567890", "9999999999").unwrap();
    book.get_mut("Jane").unwrap().add_phone("1234567890").unwrap();
    book.get_mut("Jane").unwrap().set_birthday("12.06.1991").unwrap();

    assert_eq!(phones(&book, "Jane"), vec!["9999999999", "1234567890"]);
    assert_eq!(
        book.upcoming_birthdays(today),
        vec!["Jane".to_string(), "Bob".to_string()]
    );

    book.get_mut("Jane").unwrap().remove_phone("9999999999").unwrap();
    assert_eq!(phones(&book, "Jane"), vec!["1234567890"]);

    let blob = storage::export_state(&book).unwrap();
    assert_eq!(storage::import_state(&blob).unwrap(), book);
}
