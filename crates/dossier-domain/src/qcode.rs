//! Validated Wikidata item identifiers

use thiserror::Error;

/// Error raised when an identifier fails validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QcodeError {
    /// Input does not match the `Q` + digits identifier syntax
    #[error("invalid qcode {0:?}: expected 'Q' followed by one or more digits")]
    InvalidFormat(String),
}

/// A validated Wikidata item identifier
///
/// A qcode is the letter `Q` followed by one or more decimal digits, and
/// nothing else. The match is anchored at both ends, so trailing garbage
/// (`Q12abc`) is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Qcode(String);

impl Qcode {
    /// Parse a raw string into a qcode
    ///
    /// # Errors
    /// Returns [`QcodeError::InvalidFormat`] if the input is not `Q`
    /// followed exclusively by digits.
    pub fn parse(raw: &str) -> Result<Self, QcodeError> {
        match raw.strip_prefix('Q') {
            Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
                Ok(Self(raw.to_string()))
            }
            _ => Err(QcodeError::InvalidFormat(raw.to_string())),
        }
    }

    /// Get the qcode as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Qcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
