//! rolo - a command-line address book with birthday tracking.
//!
//! This library holds the core of a small interactive contact book: validated
//! names, phone numbers, and birthdays, an insertion-ordered record store,
//! upcoming-birthday computation, and an opaque persistence boundary.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (contact names, phones, birthdays)
//! - **models**: the contact record
//! - **book**: the insertion-ordered record store
//! - **storage**: export/import of the whole book as an opaque blob
//! - **commands**: REPL command parsing and handlers
//! - **config**: configuration from environment variables
//! - **error**: custom error types for precise error handling

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod storage;

pub use book::AddressBook;
pub use config::Config;
pub use error::{BookError, BookResult, StorageError, StorageResult};
pub use models::Record;
