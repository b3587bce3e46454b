//! Contact Book - an in-memory address book with validated contact records.
//!
//! This library provides a small, fully synchronous address book: named
//! contact records holding validated phone numbers, stored in a
//! collection keyed by contact name. There is no persistence and no
//! internal locking; callers needing concurrent access must synchronize
//! around the whole [`AddressBook`].
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for contact names and phone numbers
//! - **models**: The contact record aggregate
//! - **book**: The keyed record collection
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration for the demonstration binary
//!
//! # Example
//!
//! ```
//! use contact_book::{AddressBook, Record};
//!
//! let mut book = AddressBook::new();
//!
//! let mut record = Record::new("John")?;
//! record.add_phone("123-456-7890")?;
//! book.add_record(record);
//!
//! let john = book.find("John").expect("just inserted");
//! assert_eq!(john.phones()[0].as_str(), "1234567890");
//! # Ok::<(), contact_book::RecordError>(())
//! ```

// Re-export commonly used types
pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::AddressBook;
pub use config::Config;
pub use domain::{ContactName, PhoneNumber, ValidationError};
pub use error::{ConfigError, ConfigResult, RecordError, RecordResult};
pub use models::Record;
