use std::{fmt, str::FromStr};

use thiserror::Error;

// dashed uuid form is 36 chars, the undashed form is 32
const MAX_ID_LEN: usize = 36;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("'{0}' is not a valid account id")]
pub struct InvalidIdError(pub String);

/// Opaque account identifier handed out by the name lookup service.
///
/// Doubles as the disk cache key, so only ASCII alphanumerics and `-` are
/// accepted. That keeps every cache path inside the cache root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalId(String);

impl CanonicalId {
    pub fn parse(raw: impl Into<String>) -> Result<Self, InvalidIdError> {
        let raw = raw.into();

        let valid = !raw.is_empty()
            && raw.len() <= MAX_ID_LEN
            && raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');

        if !valid {
            return Err(InvalidIdError(raw));
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CanonicalId {
    type Err = InvalidIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CanonicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
