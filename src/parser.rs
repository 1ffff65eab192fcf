//! Interpretation of time expressions into absolute instants.
//!
//! An expression is one of:
//! - `now`
//! - one or more `<integer><unit>` segments, optionally followed by `ago` or `later`
//! - an RFC3339 timestamp
//!
//! Relative segments are tried first; the RFC3339 fallback only applies
//! when the input contains no segment at all.

use std::num::ParseIntError;

use thiserror::Error;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use tracing::{debug, trace};

use crate::component::{sum_components, Component};
use crate::segment::find_segments;
use crate::tense::detect_tense;
use crate::unit::{Unit, UnrecognizedUnit};

/// Errors returned by [`TimeParser::parse`] and the free entry points.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input is neither a relative expression nor an RFC3339 timestamp.
    #[error("Unrecognized input \"{input}\"")]
    UnrecognizedInput {
        /// The input exactly as given by the caller.
        input: String,
        /// What went wrong, when known.
        #[source]
        cause: Option<InputError>,
    },
}

/// Underlying reason an input was rejected.
#[derive(Debug, Error)]
pub enum InputError {
    /// A unit word could not be resolved.
    #[error(transparent)]
    Unit(#[from] UnrecognizedUnit),
    /// A numeral did not fit in a signed 64-bit integer.
    #[error("invalid magnitude: {0}")]
    Magnitude(#[from] ParseIntError),
    /// The resulting offset or instant is outside the representable range.
    #[error("offset out of range")]
    OutOfRange,
    /// The RFC3339 fallback failed.
    #[error("invalid timestamp: {0}")]
    Timestamp(#[from] time::error::Parse),
}

impl ParseError {
    fn unrecognized(input: &str, cause: impl Into<InputError>) -> Self {
        Self::UnrecognizedInput { input: input.to_string(), cause: Some(cause.into()) }
    }

    /// The input that failed to parse, as given.
    pub fn input(&self) -> &str {
        match self {
            Self::UnrecognizedInput { input, .. } => input,
        }
    }

    /// The underlying reason, if one was recorded.
    pub fn reason(&self) -> Option<&InputError> {
        match self {
            Self::UnrecognizedInput { cause, .. } => cause.as_ref(),
        }
    }
}

/// Parser configuration.
///
/// The default parser reads the system clock for `now`. A fixed instant can
/// be injected for deterministic results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeParser {
    fixed_now: Option<OffsetDateTime>,
}

impl TimeParser {
    /// Create a parser that reads the system clock.
    pub const fn new() -> Self {
        Self { fixed_now: None }
    }

    /// Use a fixed instant wherever the current time is needed.
    ///
    /// # Parameters
    ///
    /// - `now` - Instant returned for `now` and used as origin by [`Self::parse_now`]
    ///
    /// # Returns
    ///
    /// Returns the updated parser.
    #[must_use]
    pub fn with_fixed_now(mut self, now: OffsetDateTime) -> Self {
        self.fixed_now = Some(now);
        self
    }

    /// Current instant as seen by this parser.
    pub fn now(&self) -> OffsetDateTime {
        self.fixed_now.unwrap_or_else(OffsetDateTime::now_utc)
    }

    /// Resolve the relative components of an expression.
    ///
    /// # Parameters
    ///
    /// - `input` - Expression text, surrounding whitespace is ignored
    ///
    /// # Returns
    ///
    /// Returns the signed components in order of appearance, or an empty
    /// vector when the input has no relative segment.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnrecognizedInput` if any segment has an
    /// unresolvable unit or an out-of-range numeral. No partial result is
    /// returned in that case.
    pub fn components(&self, input: &str) -> Result<Vec<Component>, ParseError> {
        let trimmed = input.trim();
        let tense = detect_tense(trimmed);
        trace!(?tense, "detected tense");

        find_segments(trimmed)
            .map(|segment| -> Result<Component, ParseError> {
                let unit = Unit::from_word(segment.unit_word)
                    .map_err(|e| ParseError::unrecognized(input, e))?;
                let magnitude: i64 =
                    segment.numeral.parse().map_err(|e| ParseError::unrecognized(input, e))?;
                Ok(Component::new(unit, magnitude * tense.sign()))
            })
            .collect()
    }

    /// Parse an expression relative to `origin`.
    ///
    /// # Parameters
    ///
    /// - `input` - Expression text, surrounding whitespace is ignored
    /// - `origin` - Reference instant for relative expressions
    ///
    /// # Returns
    ///
    /// Returns the resolved instant. `now` yields the current instant and an
    /// RFC3339 timestamp yields itself; both ignore `origin`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnrecognizedInput` if the input cannot be read
    /// either way, or if the result falls outside the representable range.
    pub fn parse(&self, input: &str, origin: OffsetDateTime) -> Result<OffsetDateTime, ParseError> {
        let trimmed = input.trim();
        if trimmed == "now" {
            return Ok(self.now());
        }

        let components = self.components(input)?;
        if components.is_empty() {
            debug!(input = trimmed, "no relative segments, trying RFC3339");
            return OffsetDateTime::parse(trimmed, &Rfc3339)
                .map_err(|e| ParseError::unrecognized(input, e));
        }

        debug!(
            components = %components.iter().map(ToString::to_string).collect::<Vec<_>>().join(" "),
            "resolved relative expression"
        );
        sum_components(&components)
            .and_then(|offset| origin.checked_add(offset))
            .ok_or_else(|| ParseError::unrecognized(input, InputError::OutOfRange))
    }

    /// Parse an expression relative to the current instant.
    ///
    /// # Errors
    ///
    /// Same as [`Self::parse`].
    pub fn parse_now(&self, input: &str) -> Result<OffsetDateTime, ParseError> {
        self.parse(input, self.now())
    }
}

/// Parse an expression relative to `origin` with the default parser.
///
/// # Examples
///
/// ```
/// use time::macros::datetime;
///
/// let origin = datetime!(2016-01-01 01:30 UTC);
/// let t = kindly_time::parse("1h 30m ago", origin).unwrap();
/// assert_eq!(t, datetime!(2016-01-01 00:00 UTC));
/// ```
///
/// # Errors
///
/// See [`TimeParser::parse`].
pub fn parse(input: &str, origin: OffsetDateTime) -> Result<OffsetDateTime, ParseError> {
    TimeParser::new().parse(input, origin)
}

/// Parse an expression relative to the system clock.
///
/// # Errors
///
/// See [`TimeParser::parse`].
pub fn parse_now(input: &str) -> Result<OffsetDateTime, ParseError> {
    TimeParser::new().parse_now(input)
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use time::macros::datetime;
    use time::Duration;

    use super::*;

    const ORIGIN: OffsetDateTime = datetime!(2016-01-01 00:00 +09:00);

    /// Test single-unit expressions in both tenses.
    #[test]
    fn test_single_unit() {
        let parser = TimeParser::new();
        assert_eq!(parser.parse("1 hour ago", ORIGIN).unwrap(), ORIGIN - Duration::hours(1));
        assert_eq!(parser.parse("3m later", ORIGIN).unwrap(), ORIGIN + Duration::minutes(3));
        assert_eq!(parser.parse("40s ago", ORIGIN).unwrap(), ORIGIN - Duration::seconds(40));
        assert_eq!(parser.parse("3 days ago", ORIGIN).unwrap(), ORIGIN - Duration::days(3));
    }

    /// Test that "now" uses the injected clock and ignores the origin.
    #[test]
    fn test_now_uses_fixed_clock() {
        let fixed = datetime!(2025-08-03 00:00 UTC);
        let parser = TimeParser::new().with_fixed_now(fixed);
        assert_eq!(parser.parse("now", ORIGIN).unwrap(), fixed);
        assert_eq!(parser.parse("  now\n", ORIGIN).unwrap(), fixed);
        assert_eq!(parser.parse_now("2h ago").unwrap(), fixed - Duration::hours(2));
    }

    /// Test that "now" is case-sensitive and exact.
    #[test]
    fn test_now_is_exact() {
        assert!(parse("Now", ORIGIN).is_err());
        assert!(parse("now ago", ORIGIN).is_err());
    }

    /// Test the RFC3339 fallback and its preserved cause.
    #[test]
    fn test_rfc3339_fallback() {
        let t = parse(" 2016-01-01T00:00:00+09:00 ", ORIGIN).unwrap();
        assert_eq!(t, datetime!(2015-12-31 15:00 UTC));

        let err = parse("2016-13-01T00:00:00Z", ORIGIN).unwrap_err();
        assert_eq!(err.to_string(), "Unrecognized input \"2016-13-01T00:00:00Z\"");
        assert!(matches!(err.reason(), Some(InputError::Timestamp(_))));
        assert!(err.source().is_some());
    }

    /// Test that an overflowing numeral voids the whole parse.
    #[test]
    fn test_numeral_overflow() {
        let err = parse("1h 99999999999999999999s ago", ORIGIN).unwrap_err();
        assert_eq!(err.input(), "1h 99999999999999999999s ago");
        assert!(matches!(err.reason(), Some(InputError::Magnitude(_))));
    }

    /// Test that offsets beyond the calendar range fail instead of wrapping.
    #[test]
    fn test_out_of_range() {
        let err = parse("9223372036854775807s", ORIGIN).unwrap_err();
        assert!(matches!(err.reason(), Some(InputError::OutOfRange)));

        let err = parse("106751991167300d", ORIGIN).unwrap_err();
        assert!(matches!(err.reason(), Some(InputError::OutOfRange)));
    }

    /// Test the component view of an expression.
    #[test]
    fn test_components() {
        let parser = TimeParser::new();
        assert_eq!(
            parser.components("1h 30m ago").unwrap(),
            vec![Component::new(Unit::Hour, -1), Component::new(Unit::Minute, -30)]
        );
        assert!(parser.components("2016-01-01T00:00:00Z").unwrap().is_empty());
    }
}
