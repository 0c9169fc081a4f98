//! Validated identifier and name newtypes for soaps
//!
//! These newtypes ensure that catalog keys and labels are valid by construction:
//! - Non-empty
//! - Within length limits
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for soap identifiers (slugs)
const MAX_ID_LENGTH: usize = 64;

/// Maximum length for display names
const MAX_NAME_LENGTH: usize = 200;

// ============================================================================
// SoapId
// ============================================================================

/// A soap identifier slug such as `lavanda` or `rosa-mosqueta`.
///
/// Lowercase ASCII letters, digits, and `-` only; this is the key the
/// storefront markup carries and the key selections are deduplicated by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SoapId(String);

impl SoapId {
    /// Create a new validated soap identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The id is empty after trimming
    /// - The id exceeds 64 characters
    /// - The id contains anything other than `[a-z0-9-]`
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Soap id cannot be empty"));
        }
        if trimmed.len() > MAX_ID_LENGTH {
            return Err(DomainError::validation(format!(
                "Soap id cannot exceed {} characters",
                MAX_ID_LENGTH
            )));
        }
        if let Some(bad) = trimmed
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(DomainError::validation(format!(
                "Soap id '{}' contains invalid character '{}'",
                trimmed, bad
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SoapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for SoapId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<SoapId> for String {
    fn from(id: SoapId) -> String {
        id.0
    }
}

// ============================================================================
// SoapName
// ============================================================================

/// A validated soap display name (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SoapName(String);

impl SoapName {
    /// Create a new validated soap name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is empty after trimming
    /// or exceeds 200 characters.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Soap name cannot be empty"));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Soap name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SoapName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for SoapName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<SoapName> for String {
    fn from(name: SoapName) -> String {
        name.0
    }
}
