//! Output form assembly.
//!
//! Composes the refined fields into the three canonical address forms
//! and the content fingerprint. One formatter per form; all of them
//! skip unpopulated components rather than emitting placeholders.

use ozaddr_parser_models::ParsedAddress;

/// Full address with abbreviated street type, upper case, range kept.
#[must_use]
pub fn abbreviated(parts: &ParsedAddress) -> String {
    format!("{} {}, {}", number_block(parts, true), street_abbr(parts), tail(parts, false))
}

/// Canonical comparison key: abbreviated form with the number range
/// collapsed to its first bound.
#[must_use]
pub fn standardized(parts: &ParsedAddress) -> String {
    format!("{} {}, {}", number_block(parts, false), street_abbr(parts), tail(parts, false))
}

/// Human-friendly form: range kept, street and locality title-cased,
/// full street type word.
#[must_use]
pub fn friendly(parts: &ParsedAddress) -> String {
    format!(
        "{} {}, {}",
        number_block(parts, true),
        title_case(&street_full(parts)),
        tail(parts, true)
    )
}

/// Content hash of the standardized form, rendered as 32 hex digits.
///
/// Stable across processes and platforms; used to join address records
/// between datasets, not for any cryptographic purpose.
#[must_use]
pub fn fingerprint(standardized: &str) -> String {
    format!("{:x}", md5::compute(standardized))
}

/// `<flat>/<first>[-<last>]`, omitting absent pieces.
fn number_block(parts: &ParsedAddress, with_range: bool) -> String {
    let flat = compound(&parts.flat_number_prefix, &parts.flat_number, &parts.flat_number_suffix);
    let first = compound(
        &parts.number_first_prefix,
        &parts.number_first,
        &parts.number_first_suffix,
    );
    let last = compound(&parts.number_last_prefix, &parts.number_last, &parts.number_last_suffix);

    let mut block = String::new();
    if !flat.is_empty() {
        block.push_str(&flat);
        block.push('/');
    }
    block.push_str(&first);
    if with_range && !last.is_empty() {
        block.push('-');
        block.push_str(&last);
    }
    block
}

fn street_abbr(parts: &ParsedAddress) -> String {
    join_non_empty(&[
        opt(&parts.street_name),
        opt(&parts.street_type_abbr),
        opt(&parts.street_suffix_abbr),
    ])
}

fn street_full(parts: &ParsedAddress) -> String {
    join_non_empty(&[
        opt(&parts.street_name),
        opt(&parts.street_type),
        opt(&parts.street_suffix),
    ])
}

fn tail(parts: &ParsedAddress, titled: bool) -> String {
    let locality = if titled {
        parts.locality.as_deref().map(title_case).unwrap_or_default()
    } else {
        opt(&parts.locality).to_string()
    };
    let state = parts.state.map(|s| s.to_string()).unwrap_or_default();
    join_non_empty(&[&locality, &state, opt(&parts.post)])
}

fn compound(prefix: &Option<String>, digits: &Option<String>, suffix: &Option<String>) -> String {
    format!("{}{}{}", opt(prefix), opt(digits), opt(suffix))
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

/// Title-cases a string the way the friendly form needs it: the first
/// letter after any non-letter is uppercased, the rest lowercased.
/// Digits and punctuation pass through, so `42-44A` is untouched and
/// `O'BRIEN` becomes `O'Brien`.
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
