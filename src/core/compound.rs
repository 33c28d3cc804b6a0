// File: src/core/compound.rs
use crate::core::rules::TextRules;
use crate::core::store::LookupStore;

/// Resolves each part of a hyphenated compound against the tables and
/// rejoins the parts with `-`.
///
/// Parts are looked up as they are: no canonicalization, no learning and
/// no further splitting. A part found in neither table is kept verbatim.
pub fn resolve_compound<R: TextRules + ?Sized>(store: &LookupStore, rules: &R, canon: &str) -> String {
    canon
        .split('-')
        .map(|part| {
            if let Some(norm) = store.forms.get(part) {
                return norm.to_string();
            }
            match store.diacritics.get(&rules.dediacritic(part)) {
                Some(accented) => accented.to_string(),
                None => part.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// Whether a canonical form should go through [`resolve_compound`].
/// A leading hyphen marks an inverted clitic (`-nous`) and is never split.
pub fn is_compound(canon: &str) -> bool {
    canon.contains('-') && !canon.starts_with('-')
}
