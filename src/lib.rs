//! # Kindly Time
//!
//! Turns short human-written time expressions into absolute instants.
//!
//! Supported expressions:
//! - **Relative**: `"1 hour ago"`, `"2d"`, `"1h 30m later"`, `"1 day 7 hours"`
//! - **Now**: `"now"`
//! - **Absolute**: any RFC3339 timestamp, e.g. `"2016-01-01T00:00:00+09:00"`
//!
//! Units are days (`d`, `day`, `days`), hours (`h`, `hour`, `hours`),
//! minutes (`m`, `minute`, `minutes`) and seconds (`s`, `second`, `seconds`).
//! A trailing `ago` moves back in time; `later` or no keyword moves forward.
//!
//! # Examples
//!
//! ```
//! use time::macros::datetime;
//! use kindly_time::{parse, TimeParser};
//!
//! let origin = datetime!(2016-01-01 00:00 UTC);
//! assert_eq!(parse("2d", origin).unwrap(), datetime!(2016-01-03 00:00 UTC));
//!
//! let parser = TimeParser::new().with_fixed_now(origin);
//! assert_eq!(parser.parse_now("30 minutes ago").unwrap(), datetime!(2015-12-31 23:30 UTC));
//!
//! let err = parse("2 years", origin).unwrap_err();
//! assert_eq!(err.to_string(), "Unrecognized input \"2 years\"");
//! ```

pub mod component;
pub mod parser;
pub mod segment;
pub mod tense;
pub mod unit;

// Re-export commonly used types for convenience
pub use component::Component;
pub use parser::{parse, parse_now, InputError, ParseError, TimeParser};
pub use tense::Tense;
pub use unit::{Unit, UnrecognizedUnit};
