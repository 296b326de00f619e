//! Locality segment extraction.
//!
//! Four patterns are tried in priority order, each one tolerating a
//! little less context: locality + state + postcode, locality + state,
//! locality + postcode, locality alone. State and postcode stay absent
//! when their pattern did not provide them.

use std::str::FromStr as _;
use std::sync::LazyLock;

use ozaddr_parser_models::State;
use regex::Regex;

/// Locality + state + postcode.
static FULL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<locality>[A-Z]+(?:[\s-]*[A-Z]+)*)\s+(?P<state>NSW|ACT|QLD|VIC|TAS|SA|NT|WA)\s+(?P<post>\d{1,4})",
    )
    .expect("valid regex")
});

/// Locality + state, no postcode.
static STATE_ONLY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<locality>[A-Z]+(?:[\s-]*[A-Z]+)*)\s+(?P<state>NSW|ACT|QLD|VIC|TAS|SA|NT|WA)")
        .expect("valid regex")
});

/// Locality + postcode, no state.
static POST_ONLY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<locality>[A-Z]+(?:[\s-]*[A-Z]+)*)\s+(?P<post>\d{1,4})").expect("valid regex")
});

/// Locality alone.
static LOCALITY_ONLY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<locality>[A-Z]+(?:[\s-]*[A-Z]+)*)").expect("valid regex"));

/// Fields pulled from the locality segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalityFields {
    /// Suburb or town name.
    pub locality: String,
    /// State, when the segment carried one.
    pub state: Option<State>,
    /// Postcode, when the segment carried one.
    pub post: Option<String>,
}

/// Extracts locality, state and postcode from a locality segment.
///
/// Returns `None` when the segment has no leading alphabetic run; the
/// caller reports that as an extraction error.
#[must_use]
pub fn extract(segment: &str) -> Option<LocalityFields> {
    for pattern in [&*FULL_RE, &*STATE_ONLY_RE, &*POST_ONLY_RE, &*LOCALITY_ONLY_RE] {
        if let Some(caps) = pattern.captures(segment) {
            return Some(LocalityFields {
                locality: caps["locality"].to_string(),
                state: caps
                    .name("state")
                    .and_then(|m| State::from_str(m.as_str()).ok()),
                post: caps.name("post").map(|m| m.as_str().to_string()),
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_locality_state_post() {
        assert_eq!(
            extract("STANMORE NSW 2048"),
            Some(LocalityFields {
                locality: "STANMORE".to_string(),
                state: Some(State::Nsw),
                post: Some("2048".to_string()),
            })
        );
    }

    #[test]
    fn extracts_locality_state() {
        assert_eq!(
            extract("STANMORE NSW"),
            Some(LocalityFields {
                locality: "STANMORE".to_string(),
                state: Some(State::Nsw),
                post: None,
            })
        );
    }

    #[test]
    fn extracts_locality_post() {
        assert_eq!(
            extract("STANMORE 2048"),
            Some(LocalityFields {
                locality: "STANMORE".to_string(),
                state: None,
                post: Some("2048".to_string()),
            })
        );
    }

    #[test]
    fn extracts_locality_alone() {
        assert_eq!(
            extract("STANMORE"),
            Some(LocalityFields {
                locality: "STANMORE".to_string(),
                state: None,
                post: None,
            })
        );
    }

    #[test]
    fn extracts_multi_word_locality() {
        assert_eq!(
            extract("WEST END QLD 4101"),
            Some(LocalityFields {
                locality: "WEST END".to_string(),
                state: Some(State::Qld),
                post: Some("4101".to_string()),
            })
        );
    }

    #[test]
    fn extracts_hyphenated_locality() {
        let fields = extract("ST MARYS-NORTH NSW 2760").expect("matches");
        assert_eq!(fields.locality, "ST MARYS-NORTH");
        assert_eq!(fields.state, Some(State::Nsw));
    }

    #[test]
    fn rejects_segment_without_leading_letters() {
        assert_eq!(extract("2048"), None);
        assert_eq!(extract(""), None);
    }
}
