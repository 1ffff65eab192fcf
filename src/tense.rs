//! Tense detection from the trailing keyword of an expression.

use std::sync::OnceLock;

use regex::Regex;

/// Direction of a relative expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tense {
    /// Trailing `ago`: magnitudes are subtracted from the origin.
    Past,
    /// Trailing `later` or no keyword at all.
    #[default]
    Future,
}

impl Tense {
    /// Multiplier applied to every magnitude parsed under this tense.
    pub const fn sign(self) -> i64 {
        match self {
            Self::Past => -1,
            Self::Future => 1,
        }
    }
}

fn tense_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s+(ago|later)$").expect("valid tense regex"))
}

/// Detect the tense of a trimmed expression.
///
/// Only a keyword at the very end, preceded by whitespace, is considered.
/// Anything other than `ago` yields [`Tense::Future`].
///
/// # Parameters
///
/// - `input` - Trimmed expression text
///
/// # Returns
///
/// Returns `Tense::Past` for a trailing `ago`, `Tense::Future` otherwise.
pub fn detect_tense(input: &str) -> Tense {
    let keyword = tense_pattern().captures(input).and_then(|caps| caps.get(1));
    match keyword.map(|m| m.as_str()) {
        Some("ago") => Tense::Past,
        _ => Tense::Future,
    }
}
