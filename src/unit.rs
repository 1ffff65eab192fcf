//! Duration units recognized in relative time expressions.
//!
//! Only four units exist: day, hour, minute and second. Weeks, months and
//! years are deliberately absent because they have no fixed length.

use std::fmt;

use thiserror::Error;
use time::Duration;

/// Error returned when a unit word does not start with a known unit letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnrecognizedUnit {
    /// The leading character is not one of `d`, `h`, `m`, `s`.
    #[error("unrecognized unit {0:?}")]
    Letter(char),
    /// The unit word was empty.
    #[error("empty unit word")]
    Empty,
}

/// A duration unit with a fixed base length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
    Day,
    Hour,
    Minute,
    Second,
}

impl Unit {
    /// Every supported unit, longest first.
    pub const ALL: [Self; 4] = [Self::Day, Self::Hour, Self::Minute, Self::Second];

    /// Resolve a unit from its canonical lowercase letter.
    ///
    /// # Parameters
    ///
    /// - `code` - One of `d`, `h`, `m`, `s` (case-sensitive)
    ///
    /// # Returns
    ///
    /// Returns the matching `Unit`, or `UnrecognizedUnit` for any other character.
    pub const fn from_letter(code: char) -> Result<Self, UnrecognizedUnit> {
        match code {
            'd' => Ok(Self::Day),
            'h' => Ok(Self::Hour),
            'm' => Ok(Self::Minute),
            's' => Ok(Self::Second),
            other => Err(UnrecognizedUnit::Letter(other)),
        }
    }

    /// Resolve a unit from a unit word such as `"hours"` or `"m"`.
    ///
    /// Only the first character is inspected; validating the rest of the
    /// word is the segment matcher's job.
    pub fn from_word(word: &str) -> Result<Self, UnrecognizedUnit> {
        word.chars().next().map_or(Err(UnrecognizedUnit::Empty), Self::from_letter)
    }

    /// Fixed length of one unit.
    pub const fn base_duration(self) -> Duration {
        match self {
            Self::Day => Duration::DAY,
            Self::Hour => Duration::HOUR,
            Self::Minute => Duration::MINUTE,
            Self::Second => Duration::SECOND,
        }
    }

    /// Canonical single-letter code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Day => "d",
            Self::Hour => "h",
            Self::Minute => "m",
            Self::Second => "s",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
