//! Street segment extraction.
//!
//! Three mutually exclusive patterns are tried in priority order:
//! an explicit unit marker (`UNIT 2 42 ...`), the slash form
//! (`2/42 ...`), and a bare street number (`42 ...`). The first match
//! wins. The raw flat and number tokens are then split further into
//! alphabetic prefix, digit run and alphabetic suffix.

use regex::Regex;
use std::sync::LazyLock;

/// Unit marker pattern: `UNIT 2 42-44 EXAMPLE ST`, `U2 42 ...`,
/// `LOT 5 17 ...`.
static UNIT_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:UNIT|LOT|SHOP|SUITE|U|ROOM)\s*(?P<flat_number>[A-Z]*\d+[A-Z]*)\s+(?P<number>[A-Z]*\d+[A-Z]*(?:-[A-Z]*\d*[A-Z]*)*\b)\s+(?P<street_name>[^,]*?)$",
    )
    .expect("valid regex")
});

/// Slash pattern: `2/42 EXAMPLE ST`, `12A/42-44 ...`.
static SLASH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<flat_number>\b[A-Z]*\d+[A-Z]*)/(?P<number>[A-Z]*\d+[A-Z]*(?:-\d*[A-Z]*)*\b)\s+(?P<street_name>[^,]*?)$",
    )
    .expect("valid regex")
});

/// Bare number pattern: `42 EXAMPLE ST`, `42-44 ...`.
static BARE_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<number>[A-Z]*\d+[A-Z]*(?:-[A-Z]*\d*[A-Z]*)*\b)\s+(?P<street_name>[^,]*?)$",
    )
    .expect("valid regex")
});

/// Splits a compound token (`U12A`) into prefix, digit run, suffix.
static COMPOUND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<prefix>\b[A-Z]*)(?P<number>\d+)(?P<suffix>[A-Z]*)").expect("valid regex")
});

/// Splits a possibly hyphen-ranged number token (`42A-44B`) into its
/// first and last bounds.
static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<first_prefix>\b[A-Z]+)?(?P<first>\d+)(?P<first_suffix>[A-Z]+)?(?:-(?P<last_prefix>\b[A-Z]+)?(?P<last>\d+)(?P<last_suffix>[A-Z]+)?)*",
    )
    .expect("valid regex")
});

/// Raw fields pulled from the street segment, before refinement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreetFields {
    /// Unit/flat token as found (e.g. `2`, `U12A`), if any.
    pub flat_number: Option<String>,
    /// Street number token as found, possibly ranged (e.g. `42-44`).
    pub number: String,
    /// Remaining street-name tail, unrefined.
    pub street_name: String,
}

/// One bound of a street or flat number, split into its parts.
///
/// Parts a pattern did not populate are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberParts {
    /// Leading alphabetic prefix.
    pub prefix: Option<String>,
    /// Digit run.
    pub digits: Option<String>,
    /// Trailing alphabetic suffix.
    pub suffix: Option<String>,
}

/// Extracts flat number, street number and street-name tail from a
/// street segment.
///
/// Returns `None` when no pattern matches or the matched street-name
/// tail is empty; the caller reports that as an extraction error.
#[must_use]
pub fn extract(segment: &str) -> Option<StreetFields> {
    for pattern in [&*UNIT_MARKER_RE, &*SLASH_RE, &*BARE_NUMBER_RE] {
        if let Some(caps) = pattern.captures(segment) {
            let street_name = &caps["street_name"];
            if street_name.is_empty() {
                return None;
            }
            return Some(StreetFields {
                flat_number: caps.name("flat_number").map(|m| m.as_str().to_string()),
                number: caps["number"].to_string(),
                street_name: street_name.to_string(),
            });
        }
    }
    None
}

/// Splits a compound flat token like `U12A` into prefix/digits/suffix.
#[must_use]
pub fn split_compound(token: &str) -> NumberParts {
    COMPOUND_RE.captures(token).map_or_else(NumberParts::default, |caps| NumberParts {
        prefix: non_empty(caps.name("prefix")),
        digits: non_empty(caps.name("number")),
        suffix: non_empty(caps.name("suffix")),
    })
}

/// Splits a possibly ranged number token like `42A-44B` into its first
/// bound and, when a hyphen is present, its last bound.
#[must_use]
pub fn split_range(token: &str) -> (NumberParts, NumberParts) {
    RANGE_RE.captures(token).map_or_else(
        || (NumberParts::default(), NumberParts::default()),
        |caps| {
            let first = NumberParts {
                prefix: non_empty(caps.name("first_prefix")),
                digits: non_empty(caps.name("first")),
                suffix: non_empty(caps.name("first_suffix")),
            };
            let last = NumberParts {
                prefix: non_empty(caps.name("last_prefix")),
                digits: non_empty(caps.name("last")),
                suffix: non_empty(caps.name("last_suffix")),
            };
            (first, last)
        },
    )
}

fn non_empty(m: Option<regex::Match<'_>>) -> Option<String> {
    m.map(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}
