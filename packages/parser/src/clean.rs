//! Input pre-cleaning for raw address strings.
//!
//! Source systems decorate addresses with property nicknames in
//! quotes, doubled punctuation, and stray spacing around hyphens and
//! slashes. This module strips that noise before segmentation.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for a double-quoted all-caps nickname token (e.g. a property
/// name) followed by whitespace.
static DOUBLE_QUOTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""[A-Z\s]*"\s"#).expect("valid regex"));

/// Regex for a single-quoted all-caps nickname token followed by
/// whitespace.
static SINGLE_QUOTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'[A-Z\s]*'\s").expect("valid regex"));

/// Regex to collapse runs of whitespace into a single space.
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid regex"));

/// Regex to collapse runs of commas into a single comma.
static COMMA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",{2,}").expect("valid regex"));

/// Uppercases and cleans a raw address string.
///
/// Applied rules, in order: quoted nickname removal, whitespace and
/// comma collapsing, stray double-quote removal, and spacing
/// canonicalization around `-`, `/` and `,`. Always produces a string;
/// degenerate input yields a degenerate (possibly empty) result.
#[must_use]
pub fn clean(raw: &str) -> String {
    let address = raw.to_uppercase();
    let address = DOUBLE_QUOTED_RE.replace_all(&address, "");
    let address = SINGLE_QUOTED_RE.replace_all(&address, "");
    let address = WHITESPACE_RE.replace_all(&address, " ");
    let address = COMMA_RE.replace_all(&address, ",");
    address
        .replace('"', "")
        .replace("- ", "-")
        .replace(" -", "-")
        .replace("/ ", "/")
        .replace(" /", "/")
        .replace(" ,", ",")
}
