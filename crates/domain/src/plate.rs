//! Plate — the normalised identifier of a vehicle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Shortest accepted plate, in characters.
pub const MIN_LEN: usize = 6;
/// Longest accepted plate, in characters.
pub const MAX_LEN: usize = 7;

/// A vehicle plate: 6 to 7 ASCII alphanumeric characters, always uppercase.
///
/// The only way to obtain a `Plate` is through [`Plate::parse`] (or
/// [`FromStr`] / `Deserialize`, which delegate to it), so a value of this
/// type is always valid and normalised.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Plate(String);

impl Plate {
    /// Validate `raw` and normalise it to uppercase.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyPlate`] when `raw` is empty or only whitespace.
    /// - [`ValidationError::InvalidPlateLength`] when the length is outside `6..=7`.
    /// - [`ValidationError::InvalidPlateCharacter`] on anything but `[A-Za-z0-9]`.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.trim().is_empty() {
            return Err(ValidationError::EmptyPlate);
        }
        let length = raw.chars().count();
        if !(MIN_LEN..=MAX_LEN).contains(&length) {
            return Err(ValidationError::InvalidPlateLength { length });
        }
        if let Some(character) = raw.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(ValidationError::InvalidPlateCharacter { character });
        }
        Ok(Self(raw.to_ascii_uppercase()))
    }

    /// Borrow the normalised plate text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Plate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Plate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Plate> for String {
    fn from(plate: Plate) -> Self {
        plate.0
    }
}

impl AsRef<str> for Plate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
