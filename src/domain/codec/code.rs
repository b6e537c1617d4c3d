//! ProfileCode value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Number of hyphen-separated tokens in a code.
pub const TOKEN_COUNT: usize = 3;

/// A shareable `word-word-word` code.
///
/// Only the shape is checked here: three non-empty lowercase ASCII words.
/// Whether the words belong to the banks is the codec's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProfileCode(String);

impl ProfileCode {
    /// Validates the shape of `code`.
    pub fn parse(code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into();
        if code.is_empty() {
            return Err(ValidationError::empty_field("code"));
        }

        let tokens: Vec<&str> = code.split('-').collect();
        if tokens.len() != TOKEN_COUNT {
            return Err(ValidationError::invalid_format(
                "code",
                format!("expected {} words, got {}", TOKEN_COUNT, tokens.len()),
            ));
        }
        if let Some(bad) = tokens
            .iter()
            .find(|t| t.is_empty() || !t.chars().all(|c| c.is_ascii_lowercase()))
        {
            return Err(ValidationError::invalid_format(
                "code",
                format!("'{}' is not a lowercase word", bad),
            ));
        }

        Ok(Self(code))
    }

    /// Wraps a code taken from the static preset table.
    pub(crate) fn from_trusted(code: &str) -> Self {
        Self(code.to_string())
    }

    pub(crate) fn from_words(style: &str, interface: &str, challenge: &str) -> Self {
        Self(format!("{}-{}-{}", style, interface, challenge))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The three words, in order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split('-')
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProfileCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProfileCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ProfileCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ProfileCode> for String {
    fn from(code: ProfileCode) -> Self {
        code.0
    }
}

impl AsRef<str> for ProfileCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
