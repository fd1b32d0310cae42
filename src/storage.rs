//! Persistence boundary for the address book.
//!
//! The exported encoding is an opaque implementation detail, not a
//! compatibility surface. The only guarantee is the round-trip: importing
//! an exported blob reconstructs an equivalent book — same names, same
//! phone sequences in the same order, same birthdays.

use crate::book::AddressBook;
use crate::error::StorageResult;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Serialize the whole book into an opaque blob.
pub fn export_state(book: &AddressBook) -> StorageResult<Vec<u8>> {
    Ok(serde_json::to_vec(book)?)
}

/// Rebuild a book from a blob produced by [`export_state`].
///
/// # Errors
///
/// Returns `StorageError::Corrupt` when the blob cannot be decoded or
/// contains field values that fail validation.
pub fn import_state(blob: &[u8]) -> StorageResult<AddressBook> {
    Ok(serde_json::from_slice(blob)?)
}

/// Write the exported book to a file, replacing any previous contents.
pub fn save_to_file(book: &AddressBook, path: impl AsRef<Path>) -> StorageResult<()> {
    let path = path.as_ref();
    let blob = export_state(book)?;
    fs::write(path, blob)?;
    debug!("Saved {} records to {}", book.len(), path.display());
    Ok(())
}

/// Read a book back from a file written by [`save_to_file`].
pub fn load_from_file(path: impl AsRef<Path>) -> StorageResult<AddressBook> {
    let path = path.as_ref();
    let blob = fs::read(path)?;
    let book = import_state(&blob)?;
    debug!("Loaded {} records from {}", book.len(), path.display());
    Ok(book)
}
