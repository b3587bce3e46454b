//! Record model representing a single contact in the address book.

use crate::domain::{ContactName, PhoneNumber};
use crate::error::{RecordError, RecordResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A single contact: one name plus an ordered list of phone numbers.
///
/// The name is set once at construction and never changes. Phone
/// numbers keep insertion order and may contain duplicates; no
/// uniqueness is enforced on add.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
}

impl Record {
    /// Create a new record with the given contact name and no phones.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Validation` if the name is empty or
    /// whitespace-only.
    pub fn new(name: impl Into<String>) -> RecordResult<Self> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
        })
    }

    /// Get the contact name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Get the phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Validate a raw phone number and append it to the record.
    ///
    /// Duplicates are permitted; the same number can be added twice.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Validation` if the number does not
    /// normalize to exactly 10 digits.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> RecordResult<()> {
        let phone = PhoneNumber::new(phone)?;
        debug!(contact = %self.name, phone = %phone, "phone added");
        self.phones.push(phone);
        Ok(())
    }

    /// Find the first phone entry whose canonical value equals `number`.
    ///
    /// The query is compared against the stored 10-digit form exactly;
    /// it is not normalized first.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::PhoneNotFound` if no entry matches.
    pub fn find_phone(&self, number: &str) -> RecordResult<&PhoneNumber> {
        self.phones
            .iter()
            .find(|phone| phone.as_str() == number)
            .ok_or_else(|| RecordError::PhoneNotFound(number.to_string()))
    }

    /// Remove every phone entry equal to `number`.
    ///
    /// Returns how many entries were removed (more than one when the
    /// number was added multiple times).
    ///
    /// # Errors
    ///
    /// Returns `RecordError::PhoneNotFound` if no entry matches.
    pub fn remove_phone(&mut self, number: &str) -> RecordResult<usize> {
        let found = self.find_phone(number)?.clone();

        let before = self.phones.len();
        self.phones.retain(|phone| *phone != found);
        let removed = before - self.phones.len();

        debug!(contact = %self.name, phone = %found, removed, "phone removed");
        Ok(removed)
    }

    /// Replace the first phone entry equal to `old` with `new`.
    ///
    /// The matched entry is overwritten in place; its position in the
    /// list does not change. Other entries equal to `old` are left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::PhoneNotFound` if no entry matches `old`,
    /// and `RecordError::Validation` if `new` fails validation. On
    /// error the record is unchanged.
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> RecordResult<()> {
        let index = self
            .phones
            .iter()
            .position(|phone| phone.as_str() == old)
            .ok_or_else(|| RecordError::PhoneNotFound(old.to_string()))?;

        self.phones[index].set(new)?;
        debug!(contact = %self.name, old, new = %self.phones[index], "phone edited");
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join("; ")
        )
    }
}
