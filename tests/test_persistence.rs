//! Integration tests for file-backed persistence.

use rolo::{storage, AddressBook, StorageError};
use std::fs;

fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_contact("Carol", Some("1111111111"), Some("24.12.1990"))
        .unwrap();
    book.add_contact("Alice", Some("2222222222"), None).unwrap();
    book
}

#[test]
fn test_save_then_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");

    let book = sample_book();
    storage::save_to_file(&book, &path).unwrap();
    let restored = storage::load_from_file(&path).unwrap();

    assert_eq!(restored, book);
}

#[test]
fn test_save_overwrites_previous_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");

    storage::save_to_file(&sample_book(), &path).unwrap();

    let mut smaller = AddressBook::new();
    smaller.add_contact("Only", Some("9999999999"), None).unwrap();
    storage::save_to_file(&smaller, &path).unwrap();

    let restored = storage::load_from_file(&path).unwrap();
    assert_eq!(restored.len(), 1);
    assert!(restored.get("Only").is_some());
}

#[test]
fn test_load_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");
    fs::write(&path, b"{ not valid json").unwrap();

    let err = storage::load_from_file(&path).unwrap_err();
    assert!(matches!(err, StorageError::Corrupt(_)));
}

#[test]
fn test_load_file_with_invalid_record_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");
    fs::write(&path, br#"[{"name":"","phones":["1234567890"]}]"#).unwrap();

    let err = storage::load_from_file(&path).unwrap_err();
    assert!(matches!(err, StorageError::Corrupt(_)));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = storage::load_from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, StorageError::Io(_)));
}
