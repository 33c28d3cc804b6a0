// --- File: src/core/store.rs
use crate::core::rules::TextRules;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A string-to-string lookup table. Keys are unique, bindings are
/// last-write-wins and nothing is ever removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    entries: HashMap<String, String>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Create-or-replace.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Binds `key` only if it is not bound yet. Returns whether it wrote.
    pub fn set_if_absent(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, value.into());
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The two tables one engine owns: exact spellings, and diacritic-stripped
/// keys pointing at a representative accented spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupStore {
    pub forms: Table,
    pub diacritics: Table,
}

impl LookupStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds both tables from an ordered word list.
    ///
    /// Overrides go in first. Every word then maps to itself in the form
    /// table, and its stripped key maps to it in the diacritic table unless
    /// that key is already taken. Word order decides ties.
    pub fn seed<R, I, S>(rules: &R, words: I, overrides: &[(&str, &str)]) -> Self
    where
        R: TextRules + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = Self::new();
        for (stripped, accented) in overrides {
            store.diacritics.set(*stripped, *accented);
        }

        for word in words {
            let word = word.as_ref();
            store.forms.set(word, word);
            store.diacritics.set_if_absent(rules.dediacritic(word), word);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rules::FrenchRules;

    #[test]
    fn set_overwrites_previous_binding() {
        let mut table = Table::new();
        table.set("a", "1");
        table.set("a", "2");
        assert_eq!(table.get("a"), Some("2"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn set_if_absent_keeps_first_binding() {
        let mut table = Table::new();
        assert!(table.set_if_absent("a", "1"));
        assert!(!table.set_if_absent("a", "2"));
        assert_eq!(table.get("a"), Some("1"));
    }

    #[test]
    fn seeding_maps_words_to_themselves() {
        let store = LookupStore::seed(&FrenchRules, ["maison", "été"], &[]);
        assert_eq!(store.forms.get("maison"), Some("maison"));
        assert_eq!(store.forms.get("été"), Some("été"));
        assert_eq!(store.diacritics.get("ete"), Some("été"));
    }

    #[test]
    fn overrides_survive_the_bulk_scan() {
        let store = LookupStore::seed(&FrenchRules, ["meme", "mémé"], &[("meme", "même")]);
        assert_eq!(store.diacritics.get("meme"), Some("même"));
        assert_eq!(store.forms.get("meme"), Some("meme"));
    }

    #[test]
    fn first_seen_word_wins_a_stripped_key() {
        let store = LookupStore::seed(&FrenchRules, ["tâche", "tache"], &[]);
        assert_eq!(store.diacritics.get("tache"), Some("tâche"));

        let store = LookupStore::seed(&FrenchRules, ["tache", "tâche"], &[]);
        assert_eq!(store.diacritics.get("tache"), Some("tache"));
    }
}
