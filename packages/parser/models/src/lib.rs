#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Shared types for the Australian address parser.
//!
//! This crate contains only data types and simple conversions. It has
//! no parsing logic and no heavyweight dependencies.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Australian state or territory abbreviation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum State {
    /// New South Wales
    Nsw,
    /// Australian Capital Territory
    Act,
    /// Queensland
    Qld,
    /// Victoria
    Vic,
    /// Tasmania
    Tas,
    /// South Australia
    Sa,
    /// Northern Territory
    Nt,
    /// Western Australia
    Wa,
}

impl State {
    /// All recognized state abbreviations, in the order used by the
    /// parser's patterns.
    pub const ALL: [Self; 8] = [
        Self::Nsw,
        Self::Act,
        Self::Qld,
        Self::Vic,
        Self::Tas,
        Self::Sa,
        Self::Nt,
        Self::Wa,
    ];
}

/// A street address decomposed into its components.
///
/// Produced once per input string and never mutated afterwards. Every
/// field that a pattern did not populate is `None`, never an empty
/// string, so the serialized form carries explicit `null` entries for
/// missing components.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedAddress {
    /// Alphabetic prefix of the unit/flat identifier (the `U` in `U12A`).
    pub flat_number_prefix: Option<String>,
    /// Numeric body of the unit/flat identifier.
    pub flat_number: Option<String>,
    /// Alphabetic suffix of the unit/flat identifier.
    pub flat_number_suffix: Option<String>,
    /// Alphabetic prefix of the first street number.
    pub number_first_prefix: Option<String>,
    /// First (or only) street number.
    pub number_first: Option<String>,
    /// Alphabetic suffix of the first street number.
    pub number_first_suffix: Option<String>,
    /// Alphabetic prefix of the second street number in a range.
    pub number_last_prefix: Option<String>,
    /// Second street number when the address spans a range (`42-44`).
    pub number_last: Option<String>,
    /// Alphabetic suffix of the second street number.
    pub number_last_suffix: Option<String>,
    /// Street proper name, upper case, type and suffix words removed.
    pub street_name: Option<String>,
    /// Full street type word (e.g. `STREET`).
    pub street_type: Option<String>,
    /// Official street type abbreviation (e.g. `ST`).
    pub street_type_abbr: Option<String>,
    /// Full directional qualifier (e.g. `WEST`).
    pub street_suffix: Option<String>,
    /// Abbreviated directional qualifier (e.g. `W`).
    pub street_suffix_abbr: Option<String>,
    /// Suburb or town name.
    pub locality: Option<String>,
    /// State or territory.
    pub state: Option<State>,
    /// Postcode as found, 1-4 digits, not zero-padded.
    pub post: Option<String>,
}

/// Address fields as provided by a GNAF (Geocoded National Address
/// File) record, pre-split into components.
///
/// Missing fields are treated as empty during re-assembly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GnafRecord {
    /// Alphabetic prefix of the unit/flat identifier.
    pub flat_number_prefix: Option<String>,
    /// Numeric body of the unit/flat identifier.
    pub flat_number: Option<String>,
    /// Alphabetic suffix of the unit/flat identifier.
    pub flat_number_suffix: Option<String>,
    /// Alphabetic prefix of the first street number.
    pub number_first_prefix: Option<String>,
    /// First street number.
    pub number_first: Option<String>,
    /// Alphabetic suffix of the first street number.
    pub number_first_suffix: Option<String>,
    /// Alphabetic prefix of the last street number.
    pub number_last_prefix: Option<String>,
    /// Last street number of a range.
    pub number_last: Option<String>,
    /// Alphabetic suffix of the last street number.
    pub number_last_suffix: Option<String>,
    /// Street proper name.
    pub street_name: Option<String>,
    /// GNAF street type code (e.g. `ST`, `RD`).
    pub street_type_code: Option<String>,
    /// GNAF street suffix code (e.g. `W`).
    pub street_suffix_code: Option<String>,
    /// Locality (suburb/town) name.
    pub locality_name: Option<String>,
    /// State abbreviation.
    pub state_abbreviation: Option<String>,
    /// Postcode.
    pub postcode: Option<String>,
}

/// Address fields as stored in an ELK (Elasticsearch) address index.
///
/// Coarser than [`GnafRecord`]: the flat identifier and the street
/// name + type arrive pre-joined, and there is no postcode.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElkRecord {
    /// Complete unit/flat identifier (e.g. `2`, `U12A`).
    pub flat_part: Option<String>,
    /// First street number.
    pub number_first: Option<String>,
    /// Last street number of a range.
    pub number_last: Option<String>,
    /// Street name including its type word (e.g. `EXAMPLE ST`).
    pub street_part: Option<String>,
    /// Locality (suburb/town) name.
    pub locality: Option<String>,
    /// State abbreviation.
    pub state: Option<String>,
}
