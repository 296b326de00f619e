#![allow(clippy::too_many_lines)]
//! Street type and directional abbreviation tables.
//!
//! Street types map the official full word to its standard
//! abbreviation per the Australian addressing standard (AS/NZS 4819).
//! Lookups run in both directions so an input may carry either form.

use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Maps official street type words to their standard abbreviation.
static STREET_TYPES: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    BTreeMap::from([
        ("ACCESS", "ACCS"),
        ("ALLEY", "ALLY"),
        ("ALLEYWAY", "ALWY"),
        ("AMBLE", "AMBL"),
        ("APPROACH", "APP"),
        ("ARCADE", "ARC"),
        ("ARTERY", "ART"),
        ("ARTERIAL", "ARTL"),
        ("AVENUE", "AVE"),
        ("BANAN", "BA"),
        ("BROADWAY", "BDWY"),
        ("BEND", "BEND"),
        ("BRAE", "BRAE"),
        ("BRACE", "BRCE"),
        ("BREAK", "BRK"),
        ("BROW", "BROW"),
        ("BOULEVARD", "BVD"),
        ("BOARDWALK", "BWLK"),
        ("BYPASS", "BYPA"),
        ("BYWAY", "BYWY"),
        ("CAUSEWAY", "CAUS"),
        ("CIRCUIT", "CCT"),
        ("CUL", "CDS"),
        ("CHASE", "CH"),
        ("CIRCLE", "CIR"),
        ("CLOSE", "CL"),
        ("CIRCLET", "CLT"),
        ("COMMON", "CMMN"),
        ("CORNER", "CNR"),
        ("CONCOURSE", "CON"),
        ("COVE", "COVE"),
        ("COPSE", "CPS"),
        ("CIRCUS", "CRCS"),
        ("CRESCENT", "CRES"),
        ("CROSSING", "CRSG"),
        ("CROSS", "CRSS"),
        ("CREST", "CRST"),
        ("CUL-DE-SAC", "CSAC"),
        ("COURT", "CT"),
        ("CENTRE", "CTR"),
        ("COURTYARD", "CTYD"),
        ("CUTTING", "CUTT"),
        ("DALE", "DALE"),
        ("DEVIATION", "DEVN"),
        ("DIP", "DIP"),
        ("DRIVE", "DR"),
        ("DRIVEWAY", "DRWY"),
        ("DISTRIBUTOR", "DSTR"),
        ("EDGE", "EDGE"),
        ("ELBOW", "ELB"),
        ("END", "END"),
        ("ENTRANCE", "ENT"),
        ("ESPLANADE", "ESP"),
        ("EXPRESSWAY", "EXP"),
        ("EXTENSION", "EXTN"),
        ("FAIRWAY", "FAWY"),
        ("FIRETRAIL", "FITR"),
        ("FOLLOW", "FOLW"),
        ("FORMATION", "FORM"),
        ("FRONTAGE", "FRTG"),
        ("FIRETRACK", "FTRK"),
        ("FOOTWAY", "FTWY"),
        ("FREEWAY", "FWY"),
        ("GAP", "GAP"),
        ("GATE", "GATE"),
        ("GARDEN", "GDN"),
        ("GARDENS", "GDNS"),
        ("GLADE", "GLD"),
        ("GLEN", "GLEN"),
        ("GROVE", "GR"),
        ("GRANGE", "GRA"),
        ("GREEN", "GRN"),
        ("HILL", "HILL"),
        ("HIGHROAD", "HRD"),
        ("HEIGHTS", "HTS"),
        ("HIGHWAY", "HWY"),
        ("INTERCHANGE", "INTG"),
        ("JUNCTION", "JNC"),
        ("KEY", "KEY"),
        ("LANE", "LANE"),
        ("LINE", "LINE"),
        ("LINK", "LINK"),
        ("LOOKOUT", "LKT"),
        ("LANEWAY", "LNWY"),
        ("LOOP", "LOOP"),
        ("MALL", "MALL"),
        ("MEWS", "MEWS"),
        ("MEANDER", "MNDR"),
        ("MOTORWAY", "MWY"),
        ("NOOK", "NOOK"),
        ("OUTLOOK", "OTLK"),
        ("OVAL", "OVAL"),
        ("PASS", "PASS"),
        ("PATH", "PATH"),
        ("PARADE", "PDE"),
        ("PATHWAY", "PHWY"),
        ("PIAZZA", "PIAZ"),
        ("POCKET", "PKT"),
        ("PARKWAY", "PKWY"),
        ("PLACE", "PL"),
        ("PLAZA", "PLZA"),
        ("POINT", "PNT"),
        ("PORT", "PORT"),
        ("PROMENADE", "PROM"),
        ("PASSAGE", "PSGE"),
        ("QUADRANT", "QDRT"),
        ("QUAY", "QY"),
        ("QUAYS", "QYS"),
        ("RAMP", "RAMP"),
        ("ROAD", "RD"),
        ("RIDGE", "RDGE"),
        ("ROADS", "RDS"),
        ("REST", "REST"),
        ("RING", "RING"),
        ("RISE", "RISE"),
        ("RAMBLE", "RMBL"),
        ("ROW", "ROW"),
        ("ROWE", "ROWE"),
        ("ROUTE", "RTE"),
        ("RETREAT", "RTT"),
        ("ROTARY", "RTY"),
        ("RUE", "RUE"),
        ("SUBWAY", "SBWY"),
        ("SHUNT", "SHUN"),
        ("SPUR", "SPUR"),
        ("SQUARE", "SQ"),
        ("STREET", "ST"),
        ("STEPS", "STPS"),
        ("STRIP", "STRP"),
        ("STAIRS", "STRS"),
        ("SERVICEWAY", "SVWY"),
        ("TARN", "TARN"),
        ("TERRACE", "TCE"),
        ("THOROUGHFARE", "THOR"),
        ("TOLLWAY", "TLWY"),
        ("TOP", "TOP"),
        ("TOR", "TOR"),
        ("TRACK", "TRK"),
        ("TRAIL", "TRL"),
        ("TURN", "TURN"),
        ("UNDERPASS", "UPAS"),
        ("VALE", "VALE"),
        ("VIADUCT", "VIAD"),
        ("VIEW", "VIEW"),
        ("VISTA", "VSTA"),
        ("WALK", "WALK"),
        ("WAY", "WAY"),
        ("WHARF", "WHRF"),
        ("WALKWAY", "WKWY"),
        ("WYND", "WYND"),
    ])
});

/// Maps full compass directions to their abbreviation.
static DIRECTIONALS: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    BTreeMap::from([
        ("WEST", "W"),
        ("EAST", "E"),
        ("NORTH", "N"),
        ("SOUTH", "S"),
        ("NORTHEAST", "NE"),
        ("SOUTHEAST", "SE"),
        ("NORTHWEST", "NW"),
        ("SOUTHWEST", "SW"),
    ])
});

/// Informal street type abbreviations seen in the wild that are not
/// part of the official abbreviation set.
static INFORMAL_TYPES: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    BTreeMap::from([
        ("BLVD", "BOULEVARD"),
        ("LN", "LANE"),
        ("AV", "AVENUE"),
        ("CR", "CRESCENT"),
    ])
});

/// Looks up the official abbreviation for a full street type word.
#[must_use]
pub fn street_type_abbr(full: &str) -> Option<&'static str> {
    STREET_TYPES.get(full).copied()
}

/// Looks up the full street type word for an official abbreviation.
#[must_use]
pub fn street_type_full(abbr: &str) -> Option<&'static str> {
    STREET_TYPES
        .iter()
        .find(|(_, v)| **v == abbr)
        .map(|(k, _)| *k)
}

/// Looks up the abbreviation for a full compass direction.
#[must_use]
pub fn directional_abbr(full: &str) -> Option<&'static str> {
    DIRECTIONALS.get(full).copied()
}

/// Looks up the full compass direction for an abbreviation.
#[must_use]
pub fn directional_full(abbr: &str) -> Option<&'static str> {
    DIRECTIONALS
        .iter()
        .find(|(_, v)| **v == abbr)
        .map(|(k, _)| *k)
}

/// Expands an informal street type abbreviation, if the token is one.
#[must_use]
pub fn expand_informal(token: &str) -> Option<&'static str> {
    INFORMAL_TYPES.get(token).copied()
}
