// File: src/learning.rs
use crate::core::store::LookupStore;
use crate::core::types::{ResolvedForm, Stage};

/// Writes what a resolution discovered back into the tables, so that every
/// intermediate spelling becomes an exact-match hit next time.
#[derive(Debug, Default)]
pub struct LearningEngine;

impl LearningEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn learn(&self, store: &mut LookupStore, resolved: &ResolvedForm) {
        if !resolved.needs_learning() {
            return;
        }

        for form in &resolved.intermediates {
            store.forms.set(form.as_str(), resolved.norm.as_str());
        }

        // The only runtime write into the diacritic table.
        if resolved.stage == Stage::Fallback {
            if let Some(stripped) = &resolved.stripped {
                store.diacritics.set(stripped.as_str(), resolved.norm.as_str());
            }
        }
    }
}
