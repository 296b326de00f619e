//! Street-name tail refinement.
//!
//! The raw tail from the street segment still carries the street type
//! word and an optional directional qualifier. Resolution order:
//! expand a trailing informal abbreviation, strip a trailing
//! directional, then resolve the street type against the official
//! table from either direction.

use crate::synonyms;

/// Refined street-name fields. Unresolved parts are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreetName {
    /// Proper name with type and suffix words removed.
    pub name: Option<String>,
    /// Full street type word.
    pub street_type: Option<String>,
    /// Official street type abbreviation.
    pub type_abbr: Option<String>,
    /// Full directional qualifier.
    pub suffix: Option<String>,
    /// Abbreviated directional qualifier.
    pub suffix_abbr: Option<String>,
}

/// Resolves a raw street-name tail into its refined fields.
#[must_use]
pub fn resolve(tail: &str) -> StreetName {
    let mut words: Vec<&str> = tail.split_whitespace().collect();
    let mut resolved = StreetName::default();

    // Informal abbreviations only count in final position.
    if let Some(last) = words.last_mut()
        && let Some(full) = synonyms::expand_informal(*last)
    {
        *last = full;
    }

    if let Some(&last) = words.last() {
        if let Some(abbr) = synonyms::directional_abbr(last) {
            resolved.suffix = Some(last.to_string());
            resolved.suffix_abbr = Some(abbr.to_string());
            words.pop();
        } else if let Some(full) = synonyms::directional_full(last) {
            resolved.suffix = Some(full.to_string());
            resolved.suffix_abbr = Some(last.to_string());
            words.pop();
        }
    }

    if let Some(&last) = words.last() {
        if let Some(abbr) = synonyms::street_type_abbr(last) {
            // A street named "THE <type>" keeps the type word
            // unabbreviated: "THE AVENUE" stays "THE AVENUE".
            let abbr = if words[0] == "THE" && words.len() == 2 {
                last.to_string()
            } else {
                abbr.to_string()
            };
            resolved.street_type = Some(last.to_string());
            resolved.type_abbr = Some(abbr);
            resolved.name = join_non_empty(&words[..words.len() - 1]);
        } else if let Some(full) = synonyms::street_type_full(last) {
            resolved.street_type = Some(full.to_string());
            resolved.type_abbr = Some(last.to_string());
            resolved.name = join_non_empty(&words[..words.len() - 1]);
        } else {
            resolved.name = join_non_empty(&words);
        }
    }

    resolved
}

fn join_non_empty(words: &[&str]) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}
