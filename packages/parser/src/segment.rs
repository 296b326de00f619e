//! Splits a cleaned address string into street and locality segments.
//!
//! The comma count decides the route: two parts map directly, three
//! parts either join a trailing `STATE [postcode]` back onto the
//! locality or discard a leading property name, and comma-less input
//! falls back to a token-count heuristic.

use regex::Regex;
use std::sync::LazyLock;

/// Regex probing whether a comma part is a state abbreviation with an
/// optional trailing postcode (e.g. `NSW`, `NSW 2048`).
static STATE_TAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:NSW|ACT|QLD|VIC|TAS|SA|NT|WA)\b(?:\s+\d{1,4})?").expect("valid regex")
});

/// Street and locality segments of one address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments {
    /// Unit/number/street-name portion.
    pub street: String,
    /// Locality/state/postcode portion.
    pub locality: String,
}

/// Splits a cleaned address string into its two segments.
///
/// Returns `None` when the comma and token-count heuristics are both
/// exhausted; the caller treats that as a fatal format error.
#[must_use]
pub fn split(cleaned: &str) -> Option<Segments> {
    let parts: Vec<&str> = cleaned.split(',').map(str::trim).collect();

    match parts.len() {
        2 => Some(Segments {
            street: parts[0].to_string(),
            locality: parts[1].to_string(),
        }),
        3 => {
            if STATE_TAIL_RE.is_match(parts[2]) {
                // "street, locality, STATE [post]": the last two
                // parts together form the locality segment.
                Some(Segments {
                    street: parts[0].to_string(),
                    locality: format!("{} {}", parts[1], parts[2]),
                })
            } else {
                // "property name, street, locality": the property
                // name plays no further role.
                Some(Segments {
                    street: parts[1].to_string(),
                    locality: parts[2].to_string(),
                })
            }
        }
        1 => {
            // No comma at all. A six or seven token address is assumed
            // to be "number name type locality... STATE post".
            let tokens: Vec<&str> = cleaned.split_whitespace().collect();
            if tokens.len() == 6 || tokens.len() == 7 {
                log::debug!("no comma in address, splitting on token count: {cleaned}");
                Some(Segments {
                    street: tokens[..3].join(" "),
                    locality: tokens[3..].join(" "),
                })
            } else {
                None
            }
        }
        _ => None,
    }
}
