//! Scanning of `<integer><unit word>` segments.

use std::sync::OnceLock;

use regex::Regex;

/// A raw `<numeral><unit word>` occurrence borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// ASCII digits as written.
    pub numeral: &'a str,
    /// Unit word as written, e.g. `"h"` or `"minutes"`.
    pub unit_word: &'a str,
}

fn segment_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"([0-9]+)\s*(d(?:ays?)?|h(?:ours?)?|m(?:inutes?)?|s(?:econds?)?)")
            .expect("valid segment regex")
    })
}

/// Find every segment in `input`, left to right.
///
/// Matches are non-overlapping and greedy, so `"2days"` yields the unit
/// word `"days"` rather than `"d"`.
pub fn find_segments(input: &str) -> impl Iterator<Item = Segment<'_>> {
    segment_pattern().captures_iter(input).filter_map(|caps| {
        let numeral = caps.get(1)?.as_str();
        let unit_word = caps.get(2)?.as_str();
        Some(Segment { numeral, unit_word })
    })
}
