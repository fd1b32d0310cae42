//! Error types for the rolo address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on records and the address book.
#[derive(Error, Debug)]
pub enum BookError {
    /// A field value failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No phone with the given value exists on the record
    #[error("Phone number {0} not found in contact")]
    PhoneNotFound(String),

    /// No record with the given name exists in the book
    #[error("Contact {0} not found")]
    RecordNotFound(String),
}

/// Errors that can occur at the persistence boundary.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The blob could not be decoded into an address book
    #[error("Corrupt address book data: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// Reading or writing the data file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;
