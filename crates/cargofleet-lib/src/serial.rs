//! Container serial numbers of the form `KON-<TYPE>-<N>`.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::sequence::Sequence;

const PREFIX: &str = "KON";

/// Immutable container identifier.
///
/// Comparisons against user-supplied strings are case-insensitive, matching
/// how ships look containers up.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SerialNumber(String);

impl SerialNumber {
    /// Build a serial for `type_code` using the next value of `sequence`.
    ///
    /// The type code is upper-cased; empty or whitespace-only codes are rejected
    /// without consuming a sequence value.
    pub fn generate(type_code: &str, sequence: &dyn Sequence) -> Result<Self> {
        let code = type_code.trim();
        if code.is_empty() {
            return Err(Error::invalid(
                "type_code",
                "container type code cannot be empty",
            ));
        }
        let number = sequence.next_value();
        Ok(Self(format!("{PREFIX}-{}-{number}", code.to_uppercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive match against a serial supplied by a caller.
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other.trim())
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SerialNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
