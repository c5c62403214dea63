use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

const MAX_ROOT_LEN: usize = 8;
const MAX_VENUE_LEN: usize = 3;

/// Exchange-listed fund ticker, normalized to uppercase.
///
/// A ticker is a root (`XIC`, `BRK-B`) optionally followed by a
/// listing-venue suffix separated by a dot (`XIC.TO`, `VUSA.L`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = input.trim().to_ascii_uppercase();
        if normalized.is_empty() {
            return Err(ValidationError::EmptyTicker);
        }

        match normalized.split_once('.') {
            Some((root, venue)) => {
                validate_root(root)?;
                validate_venue(venue)?;
            }
            None => validate_root(&normalized)?,
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Ticker without the listing-venue suffix.
    pub fn root(&self) -> &str {
        self.0
            .split_once('.')
            .map_or(self.0.as_str(), |(root, _)| root)
    }

    /// Listing-venue suffix, when present (`TO` in `XIC.TO`).
    pub fn venue(&self) -> Option<&str> {
        self.0.split_once('.').map(|(_, venue)| venue)
    }
}

fn validate_root(root: &str) -> Result<(), ValidationError> {
    if root.is_empty() {
        return Err(ValidationError::EmptyTicker);
    }
    let len = root.chars().count();
    if len > MAX_ROOT_LEN {
        return Err(ValidationError::TickerTooLong {
            len,
            max: MAX_ROOT_LEN,
        });
    }

    for (index, ch) in root.char_indices() {
        if index == 0 {
            if !ch.is_ascii_alphabetic() {
                return Err(ValidationError::TickerInvalidStart { ch });
            }
            continue;
        }
        // Dashes separate share classes (BRK-B); anything else is noise.
        if !ch.is_ascii_alphanumeric() && ch != '-' {
            return Err(ValidationError::TickerInvalidChar { ch, index });
        }
    }

    Ok(())
}

fn validate_venue(venue: &str) -> Result<(), ValidationError> {
    let len = venue.chars().count();
    let valid =
        (1..=MAX_VENUE_LEN).contains(&len) && venue.chars().all(|ch| ch.is_ascii_alphabetic());
    if !valid {
        return Err(ValidationError::TickerInvalidVenue {
            venue: venue.to_owned(),
        });
    }
    Ok(())
}

impl Display for Ticker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Ticker {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Ticker {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Ticker> for String {
    fn from(value: Ticker) -> Self {
        value.0
    }
}
