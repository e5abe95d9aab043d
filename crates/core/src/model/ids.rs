use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when a country code fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CountryCodeError {
    #[error("country code cannot be empty")]
    Empty,

    #[error("country code contains invalid character {0:?}")]
    InvalidChar(char),
}

/// Identifier of a country (ISO 3166 alpha-2 style, lower-case).
///
/// Sub-national codes such as `gb-eng` are accepted, so the only rule is
/// ASCII letters plus `-`. Input is trimmed and lower-cased.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Creates a validated `CountryCode`.
    ///
    /// # Errors
    ///
    /// Returns `CountryCodeError::Empty` for blank input and
    /// `CountryCodeError::InvalidChar` for anything outside `[a-zA-Z-]`.
    pub fn new(value: impl AsRef<str>) -> Result<Self, CountryCodeError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CountryCodeError::Empty);
        }
        if let Some(bad) = trimmed
            .chars()
            .find(|c| !(c.is_ascii_alphabetic() || *c == '-'))
        {
            return Err(CountryCodeError::InvalidChar(bad));
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    /// Returns the normalized code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CountryCode({})", self.0)
    }
}

// ─── Display / Conversions ─────────────────────────────────────────────────────

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CountryCode {
    type Err = CountryCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = CountryCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_is_trimmed_and_lowercased() {
        let code = CountryCode::new("  US ").unwrap();
        assert_eq!(code.as_str(), "us");
        assert_eq!(code.to_string(), "us");
    }

    #[test]
    fn subdivision_codes_are_accepted() {
        let code: CountryCode = "GB-ENG".parse().unwrap();
        assert_eq!(code.as_str(), "gb-eng");
    }

    #[test]
    fn empty_code_is_rejected() {
        assert_eq!(CountryCode::new("   "), Err(CountryCodeError::Empty));
    }

    #[test]
    fn non_letter_code_is_rejected() {
        assert_eq!(
            CountryCode::new("u5"),
            Err(CountryCodeError::InvalidChar('5'))
        );
    }

    #[test]
    fn serde_uses_plain_string() {
        let code = CountryCode::new("fr").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"fr\"");

        let back: CountryCode = serde_json::from_str("\"FR\"").unwrap();
        assert_eq!(back, code);

        assert!(serde_json::from_str::<CountryCode>("\"f/r\"").is_err());
    }
}
