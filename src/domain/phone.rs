//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for phone numbers.
///
/// This ensures that phone numbers are validated at construction time.
/// Construction is lenient about formatting: separators such as spaces,
/// hyphens, and parentheses are stripped, and the input is accepted if
/// exactly 10 decimal digits remain. The canonical 10-digit form is
/// what gets stored and compared.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("123-456-7890").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating and normalizing the input.
    ///
    /// # Validation Rules
    ///
    /// - Non-digit characters are removed before counting
    /// - Exactly 10 decimal digits must remain
    /// - Only the digits are stored
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` carrying the original
    /// input if the digit count is not exactly 10.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        let digits = Self::normalize(&phone)?;
        Ok(Self(digits))
    }

    /// Replace the stored number with a newly validated one.
    ///
    /// The same normalization as [`PhoneNumber::new`] applies. On
    /// error the stored value is left untouched.
    pub fn set(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        let phone = phone.into();
        self.0 = Self::normalize(&phone)?;
        Ok(())
    }

    /// Strip formatting and require exactly 10 digits.
    fn normalize(phone: &str) -> Result<String, ValidationError> {
        let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.len() != 10 {
            return Err(ValidationError::InvalidPhone(phone.to_string()));
        }

        Ok(digits)
    }

    /// Get the canonical 10-digit number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
