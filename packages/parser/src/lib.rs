#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Parser and normalizer for free-form Australian street addresses.
//!
//! Address records sourced from different systems format the same
//! street address in many ways:
//!
//! - `Unit 2 42 Example ST, STANMORE, NSW 2048`
//! - `2/42 EXAMPLE ST, STANMORE NSW 2048`
//! - `U2 42-44 EXAMPLE STREET, STANMORE, NSW 2048`
//!
//! [`AuAddress`] parses all of these into the same structured
//! components and derives three canonical string forms plus a content
//! fingerprint, so records can be deduplicated and joined across
//! datasets:
//!
//! - **abbreviated**: upper case, official street type abbreviation,
//!   number range kept: `2/42-44 EXAMPLE ST, STANMORE NSW 2048`
//! - **standardized**: abbreviated with the range collapsed to its
//!   first bound; the canonical comparison key:
//!   `2/42 EXAMPLE ST, STANMORE NSW 2048`
//! - **friendly**: title-cased, range kept:
//!   `2/42-44 Example Street, Stanmore NSW 2048`
//!
//! # Usage
//!
//! ```rust
//! use ozaddr_parser::AuAddress;
//!
//! # fn main() -> Result<(), ozaddr_parser::ParseError> {
//! let addr = AuAddress::parse("U2 42-44 Example St, STANMORE, NSW 2048")?;
//! assert_eq!(addr.standardized(), "2/42 EXAMPLE ST, STANMORE NSW 2048");
//! assert_eq!(addr.friendly(), "2/42-44 Example Street, Stanmore NSW 2048");
//! assert_eq!(addr.parts().flat_number.as_deref(), Some("2"));
//! # Ok(())
//! # }
//! ```
//!
//! Parsing is a pure, synchronous computation over the input string.
//! The only shared state is a set of immutable lookup tables, so
//! addresses may be parsed concurrently without coordination.

pub mod assemble;
pub mod clean;
pub mod locality;
pub mod segment;
pub mod street;
pub mod street_name;
pub mod synonyms;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub use ozaddr_parser_models::{ElkRecord, GnafRecord, ParsedAddress, State};

/// Errors from parsing an address string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input could not be segmented into street and locality
    /// parts; the comma and token-count heuristics were exhausted.
    #[error("Unrecognized address format: {input}")]
    Format {
        /// The offending input string.
        input: String,
    },

    /// The street segment matched none of the street patterns (no
    /// discernible street number, or an empty street-name tail).
    #[error("No street number in street segment: {segment}")]
    StreetSegment {
        /// The street segment that failed extraction.
        segment: String,
    },

    /// The locality segment had no leading alphabetic locality name.
    #[error("No locality in locality segment: {segment}")]
    LocalitySegment {
        /// The locality segment that failed extraction.
        segment: String,
    },
}

/// A parsed Australian street address.
///
/// Construction runs the whole pipeline once; the structured
/// components and all derived forms are immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuAddress {
    input: String,
    parts: ParsedAddress,
    abbreviated: String,
    standardized: String,
    friendly: String,
    fingerprint: String,
}

impl AuAddress {
    /// Parses a free-form address string.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Format`] when the input cannot be
    /// segmented, and [`ParseError::StreetSegment`] /
    /// [`ParseError::LocalitySegment`] when a segment matches none of
    /// its extraction patterns. Use [`standardize`] instead when
    /// partial failure should degrade to `None`.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let cleaned = clean::clean(input);

        let segments = segment::split(&cleaned).ok_or_else(|| ParseError::Format {
            input: input.to_string(),
        })?;

        let street_fields =
            street::extract(&segments.street).ok_or_else(|| ParseError::StreetSegment {
                segment: segments.street.clone(),
            })?;

        let locality_fields =
            locality::extract(&segments.locality).ok_or_else(|| ParseError::LocalitySegment {
                segment: segments.locality.clone(),
            })?;

        let flat = street_fields
            .flat_number
            .as_deref()
            .map(street::split_compound)
            .unwrap_or_default();
        let (first, last) = street::split_range(&street_fields.number);
        let name = street_name::resolve(&street_fields.street_name);

        let parts = ParsedAddress {
            flat_number_prefix: flat.prefix,
            flat_number: flat.digits,
            flat_number_suffix: flat.suffix,
            number_first_prefix: first.prefix,
            number_first: first.digits,
            number_first_suffix: first.suffix,
            number_last_prefix: last.prefix,
            number_last: last.digits,
            number_last_suffix: last.suffix,
            street_name: name.name,
            street_type: name.street_type,
            street_type_abbr: name.type_abbr,
            street_suffix: name.suffix,
            street_suffix_abbr: name.suffix_abbr,
            locality: Some(locality_fields.locality),
            state: locality_fields.state,
            post: locality_fields.post,
        };

        let abbreviated = assemble::abbreviated(&parts);
        let standardized = assemble::standardized(&parts);
        let friendly = assemble::friendly(&parts);
        let fingerprint = assemble::fingerprint(&standardized);

        Ok(Self {
            input: input.to_string(),
            parts,
            abbreviated,
            standardized,
            friendly,
            fingerprint,
        })
    }

    /// Re-assembles a GNAF record into an address string and parses it
    /// through the standard pipeline.
    ///
    /// Missing fields are treated as empty before assembly.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`AuAddress::parse`], e.g. when the
    /// record carries no usable street number or locality.
    pub fn from_gnaf(record: &GnafRecord) -> Result<Self, ParseError> {
        let flat = [
            opt(&record.flat_number_prefix),
            opt(&record.flat_number),
            opt(&record.flat_number_suffix),
        ]
        .concat();
        let first = [
            opt(&record.number_first_prefix),
            opt(&record.number_first),
            opt(&record.number_first_suffix),
        ]
        .concat();
        let last = [
            opt(&record.number_last_prefix),
            opt(&record.number_last),
            opt(&record.number_last_suffix),
        ]
        .concat();
        let street = join_non_empty(&[
            opt(&record.street_name),
            opt(&record.street_type_code),
            opt(&record.street_suffix_code),
        ]);

        Self::parse(&compose(
            &flat,
            &first,
            &last,
            &street,
            &[
                &assemble::title_case(opt(&record.locality_name)),
                opt(&record.state_abbreviation),
                opt(&record.postcode),
            ],
        ))
    }

    /// Re-assembles an ELK record into an address string and parses it
    /// through the standard pipeline. ELK records carry no postcode.
    ///
    /// Missing fields are treated as empty before assembly.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`AuAddress::parse`].
    pub fn from_elk(record: &ElkRecord) -> Result<Self, ParseError> {
        Self::parse(&compose(
            opt(&record.flat_part),
            opt(&record.number_first),
            opt(&record.number_last),
            opt(&record.street_part),
            &[
                &assemble::title_case(opt(&record.locality)),
                opt(&record.state),
            ],
        ))
    }

    /// The string originally passed to the constructor, unmodified.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The structured components of the address.
    #[must_use]
    pub const fn parts(&self) -> &ParsedAddress {
        &self.parts
    }

    /// Full address with abbreviated street type, range kept.
    #[must_use]
    pub fn abbreviated(&self) -> &str {
        &self.abbreviated
    }

    /// Canonical comparison key: abbreviated form, first street number
    /// only.
    #[must_use]
    pub fn standardized(&self) -> &str {
        &self.standardized
    }

    /// Title-cased human-friendly form, range kept.
    #[must_use]
    pub fn friendly(&self) -> &str {
        &self.friendly
    }

    /// MD5 hex digest of the standardized form. Two addresses that
    /// standardize identically share a fingerprint.
    #[must_use]
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

impl FromStr for AuAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AuAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.input)
    }
}

/// Best-effort standardization: the standardized form of the input, or
/// `None` when it does not parse. Never propagates an error.
#[must_use]
pub fn standardize(input: &str) -> Option<String> {
    match AuAddress::parse(input) {
        Ok(address) => Some(address.standardized.clone()),
        Err(err) => {
            log::debug!("standardize failed for {input:?}: {err}");
            None
        }
    }
}

/// `<flat>/<first>-<last> <Street>, <tail...>`: the friendly-form
/// composition used when re-assembling structured records.
fn compose(flat: &str, first: &str, last: &str, street: &str, tail_parts: &[&str]) -> String {
    let mut body = String::new();
    if !flat.is_empty() {
        body.push_str(flat);
        body.push('/');
    }
    body.push_str(first);
    if !last.is_empty() {
        body.push('-');
        body.push_str(last);
    }
    format!(
        "{body} {}, {}",
        assemble::title_case(street),
        join_non_empty(tail_parts)
    )
}

fn opt(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

fn join_non_empty(components: &[&str]) -> String {
    components
        .iter()
        .copied()
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_unit_form() {
        let addr = AuAddress::parse("Unit 2 42-44 Example ST, STANMORE,  NSW 2048").expect("parses");
        assert_eq!(addr.friendly(), "2/42-44 Example Street, Stanmore NSW 2048");
        assert_eq!(addr.standardized(), "2/42 EXAMPLE ST, STANMORE NSW 2048");
        assert_eq!(addr.abbreviated(), "2/42-44 EXAMPLE ST, STANMORE NSW 2048");

        let parts = addr.parts();
        assert_eq!(parts.flat_number.as_deref(), Some("2"));
        assert_eq!(parts.flat_number_prefix, None);
        assert_eq!(parts.flat_number_suffix, None);
        assert_eq!(parts.number_first.as_deref(), Some("42"));
        assert_eq!(parts.number_last.as_deref(), Some("44"));
        assert_eq!(parts.street_name.as_deref(), Some("EXAMPLE"));
        assert_eq!(parts.street_type.as_deref(), Some("STREET"));
        assert_eq!(parts.street_type_abbr.as_deref(), Some("ST"));
        assert_eq!(parts.street_suffix, None);
        assert_eq!(parts.street_suffix_abbr, None);
        assert_eq!(parts.locality.as_deref(), Some("STANMORE"));
        assert_eq!(parts.state, Some(State::Nsw));
        assert_eq!(parts.post.as_deref(), Some("2048"));
    }

    #[test]
    fn parses_house_form() {
        let addr = AuAddress::parse("22 Example ST, STANMORE, NSW 2048").expect("parses");
        assert_eq!(addr.friendly(), "22 Example Street, Stanmore NSW 2048");
        assert_eq!(addr.standardized(), "22 EXAMPLE ST, STANMORE NSW 2048");
        assert_eq!(addr.abbreviated(), "22 EXAMPLE ST, STANMORE NSW 2048");

        let parts = addr.parts();
        assert_eq!(parts.flat_number, None);
        assert_eq!(parts.number_first.as_deref(), Some("22"));
        assert_eq!(parts.number_last, None);
    }

    #[test]
    fn parses_directional_suffix() {
        let addr = AuAddress::parse("22 Example ST west, STANMORE, NSW 2048").expect("parses");
        assert_eq!(addr.parts().street_suffix.as_deref(), Some("WEST"));
        assert_eq!(addr.parts().street_suffix_abbr.as_deref(), Some("W"));
        assert_eq!(addr.standardized(), "22 EXAMPLE ST W, STANMORE NSW 2048");
        assert_eq!(addr.friendly(), "22 Example Street West, Stanmore NSW 2048");
    }

    #[test]
    fn parses_slash_form() {
        let addr = AuAddress::parse("2/42 EXAMPLE STREET, STANMORE NSW 2048").expect("parses");
        assert_eq!(addr.parts().flat_number.as_deref(), Some("2"));
        assert_eq!(addr.standardized(), "2/42 EXAMPLE ST, STANMORE NSW 2048");
    }

    #[test]
    fn parses_slash_form_without_comma() {
        // Six tokens, no comma: the token-count fallback route.
        let addr = AuAddress::parse("2/42 EXAMPLE STREET STANMORE NSW 2048").expect("parses");
        assert_eq!(addr.parts().flat_number.as_deref(), Some("2"));
        assert_eq!(addr.standardized(), "2/42 EXAMPLE ST, STANMORE NSW 2048");
    }

    #[test]
    fn tolerates_missing_postcode() {
        let addr = AuAddress::parse("22 Example ST, STANMORE, NSW").expect("parses");
        assert_eq!(addr.parts().post, None);
        assert_eq!(addr.parts().state, Some(State::Nsw));
        assert_eq!(addr.parts().locality.as_deref(), Some("STANMORE"));
        assert_eq!(addr.standardized(), "22 EXAMPLE ST, STANMORE NSW");
    }

    #[test]
    fn strips_quoted_property_nickname() {
        let addr =
            AuAddress::parse("\"ROSE COTTAGE\" 22 Example ST, STANMORE, NSW 2048").expect("parses");
        assert_eq!(addr.standardized(), "22 EXAMPLE ST, STANMORE NSW 2048");
    }

    #[test]
    fn standardizing_is_idempotent() {
        let std_form = standardize("U2 42-44 Example St, STANMORE, NSW 2048").expect("parses");
        assert_eq!(standardize(&std_form).as_deref(), Some(std_form.as_str()));
    }

    #[test]
    fn parsing_is_deterministic() {
        let a = AuAddress::parse("2/42 EXAMPLE ST, STANMORE NSW 2048").expect("parses");
        let b = AuAddress::parse("2/42 EXAMPLE ST, STANMORE NSW 2048").expect("parses");
        assert_eq!(a.parts(), b.parts());
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn equivalent_forms_share_a_fingerprint() {
        let unit = AuAddress::parse("Unit 2 42-44 Example ST, STANMORE, NSW 2048").expect("parses");
        let slash = AuAddress::parse("2/42 EXAMPLE ST, STANMORE NSW 2048").expect("parses");
        assert_eq!(unit.standardized(), slash.standardized());
        assert_eq!(unit.fingerprint(), slash.fingerprint());
    }

    #[test]
    fn distinct_addresses_have_distinct_fingerprints() {
        let a = AuAddress::parse("22 EXAMPLE ST, STANMORE NSW 2048").expect("parses");
        let b = AuAddress::parse("24 EXAMPLE ST, STANMORE NSW 2048").expect("parses");
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn round_trips_through_gnaf_record() {
        let record = GnafRecord {
            flat_number: Some("2".to_string()),
            number_first: Some("42".to_string()),
            number_last: Some("44".to_string()),
            street_name: Some("EXAMPLE".to_string()),
            street_type_code: Some("ST".to_string()),
            locality_name: Some("STANMORE".to_string()),
            state_abbreviation: Some("NSW".to_string()),
            postcode: Some("2048".to_string()),
            ..GnafRecord::default()
        };
        let addr = AuAddress::from_gnaf(&record).expect("parses");
        assert_eq!(addr.standardized(), "2/42 EXAMPLE ST, STANMORE NSW 2048");
        assert_eq!(addr.abbreviated(), "2/42-44 EXAMPLE ST, STANMORE NSW 2048");
        assert_eq!(addr.parts().locality.as_deref(), Some("STANMORE"));
        assert_eq!(addr.parts().state, Some(State::Nsw));
        assert_eq!(addr.parts().post.as_deref(), Some("2048"));
    }

    #[test]
    fn round_trips_through_elk_record() {
        let record = ElkRecord {
            flat_part: Some("2".to_string()),
            number_first: Some("42".to_string()),
            number_last: Some("44".to_string()),
            street_part: Some("EXAMPLE ST".to_string()),
            locality: Some("STANMORE".to_string()),
            state: Some("NSW".to_string()),
        };
        let addr = AuAddress::from_elk(&record).expect("parses");
        assert_eq!(addr.standardized(), "2/42 EXAMPLE ST, STANMORE NSW");
        assert_eq!(addr.parts().post, None);
        assert_eq!(addr.parts().state, Some(State::Nsw));
    }

    #[test]
    fn reparsing_own_fields_reproduces_standardized_form() {
        let addr = AuAddress::parse("U2 42-44 Example St, STANMORE, NSW 2048").expect("parses");
        let parts = addr.parts();
        let record = GnafRecord {
            flat_number: parts.flat_number.clone(),
            number_first: parts.number_first.clone(),
            number_last: parts.number_last.clone(),
            street_name: parts.street_name.clone(),
            street_type_code: parts.street_type_abbr.clone(),
            street_suffix_code: parts.street_suffix_abbr.clone(),
            locality_name: parts.locality.clone(),
            state_abbreviation: parts.state.map(|s| s.to_string()),
            postcode: parts.post.clone(),
            ..GnafRecord::default()
        };
        let rebuilt = AuAddress::from_gnaf(&record).expect("parses");
        assert_eq!(rebuilt.standardized(), addr.standardized());
        assert_eq!(rebuilt.fingerprint(), addr.fingerprint());
    }

    #[test]
    fn rejects_unsegmentable_input() {
        assert_eq!(
            AuAddress::parse("A, B, C, D"),
            Err(ParseError::Format {
                input: "A, B, C, D".to_string(),
            })
        );
        assert!(AuAddress::parse("not an address").is_err());
    }

    #[test]
    fn rejects_street_segment_without_number() {
        assert_eq!(
            AuAddress::parse("EXAMPLE ST, STANMORE NSW 2048"),
            Err(ParseError::StreetSegment {
                segment: "EXAMPLE ST".to_string(),
            })
        );
    }

    #[test]
    fn rejects_locality_segment_without_name() {
        assert_eq!(
            AuAddress::parse("22 EXAMPLE ST, 2048"),
            Err(ParseError::LocalitySegment {
                segment: "2048".to_string(),
            })
        );
    }

    #[test]
    fn standardize_swallows_errors() {
        assert_eq!(standardize("not an address"), None);
        assert_eq!(standardize(""), None);
        assert_eq!(standardize("EXAMPLE ST, STANMORE NSW 2048"), None);
    }

    #[test]
    fn populated_fields_are_never_empty_strings() {
        let addr = AuAddress::parse("22 Example ST, STANMORE, NSW").expect("parses");
        let json = serde_json::to_value(addr.parts()).expect("serializes");
        for (field, value) in json.as_object().expect("object") {
            if let Some(text) = value.as_str() {
                assert!(!text.is_empty(), "field {field} is an empty string");
            }
        }
    }

    #[test]
    fn display_and_from_str() {
        let addr: AuAddress = "22 Example ST, STANMORE, NSW 2048".parse().expect("parses");
        assert_eq!(addr.to_string(), "22 Example ST, STANMORE, NSW 2048");
        assert_eq!(addr.input(), "22 Example ST, STANMORE, NSW 2048");
    }
}
