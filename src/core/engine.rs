use crate::config::Config;
use crate::core::compound::{is_compound, resolve_compound};
use crate::core::rules::{FrenchRules, TextRules};
use crate::core::store::LookupStore;
use crate::core::types::{ResolvedForm, Stage};
use crate::error::{NormError, Result};
use crate::learning::LearningEngine;
use crate::persistence;
use std::fs;
use std::path::Path;
use tracing::{debug, info, trace, warn};

/// Stripped forms whose accented spelling is forced before the dictionary
/// scan, so that no dictionary word can claim them.
pub const DEFAULT_OVERRIDES: &[(&str, &str)] = &[("meme", "même"), ("memes", "mêmes")];

const BUNDLED_WORDS: &str = include_str!("../../data/words.txt");

/// Resolves raw word forms to a canonical norm.
///
/// The engine owns its two lookup tables and memoizes every resolution into
/// them, so `normalize` takes `&mut self`. Share one engine between threads
/// only behind a lock held for the whole call.
pub struct Normalizer<R = FrenchRules> {
    store: LookupStore,
    rules: R,
    learning_engine: LearningEngine,
}

impl Normalizer<FrenchRules> {
    /// Seeds a French engine from an ordered word list.
    pub fn new<I, S>(words: I, overrides: &[(&str, &str)]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_rules(FrenchRules, words, overrides)
    }

    /// Seeds from the word list compiled into the crate.
    pub fn bundled() -> Self {
        Self::new(dictionary_words(BUNDLED_WORDS), DEFAULT_OVERRIDES)
    }

    /// Seeds from a newline-separated UTF-8 word list on disk.
    pub fn from_dictionary_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| NormError::Dictionary {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(dictionary_words(&text), DEFAULT_OVERRIDES))
    }

    /// Restores saved tables from `config.tables_dir`, or seeds from the
    /// configured (or bundled) dictionary when no table file is there.
    ///
    /// A directory holding only one table, or an unreadable one, is an
    /// error: reseeding would let the next save overwrite learned data.
    pub fn open(config: &Config) -> Result<Self> {
        if persistence::any_table_exists(&config.tables_dir) {
            let store = persistence::load_tables(&config.tables_dir).map_err(|e| {
                warn!(dir = %config.tables_dir.display(), error = %e, "cannot restore saved tables");
                e
            })?;
            return Ok(Self::from_store(FrenchRules, store));
        }
        match &config.dictionary {
            Some(path) => Self::from_dictionary_file(path),
            None => Ok(Self::bundled()),
        }
    }
}

impl<R: TextRules> Normalizer<R> {
    pub fn with_rules<I, S>(rules: R, words: I, overrides: &[(&str, &str)]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let store = LookupStore::seed(&rules, words, overrides);
        info!(
            forms = store.forms.len(),
            diacritics = store.diacritics.len(),
            "seeded lookup tables"
        );
        Self::from_store(rules, store)
    }

    pub fn from_store(rules: R, store: LookupStore) -> Self {
        Self {
            store,
            rules,
            learning_engine: LearningEngine::new(),
        }
    }

    pub fn store(&self) -> &LookupStore {
        &self.store
    }

    /// Resolves `form` to its norm. Never fails.
    pub fn normalize(&mut self, form: &str) -> String {
        self.resolve(form).norm
    }

    /// Like [`normalize`](Self::normalize), but reports how the norm was found.
    pub fn resolve(&mut self, form: &str) -> ResolvedForm {
        let resolved = self.lookup(form);
        match resolved.stage {
            Stage::Exact => trace!(form, norm = %resolved.norm, "exact match"),
            stage => debug!(form, norm = %resolved.norm, ?stage, "resolved form"),
        }
        self.learning_engine.learn(&mut self.store, &resolved);
        resolved
    }

    /// One norm per token, in input order.
    pub fn normalize_batch<I, S>(&mut self, forms: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        forms.into_iter().map(|form| self.normalize(form.as_ref())).collect()
    }

    /// Binds every form in `forms` to `norm`, replacing earlier bindings.
    pub fn add<I, S>(&mut self, norm: &str, forms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for form in forms {
            self.store.forms.set(form.as_ref(), norm);
        }
    }

    pub fn save(&self, dir: &Path) -> Result<()> {
        persistence::save_tables(&self.store, dir)
    }

    /// Replaces both tables with the ones saved in `dir`. On error the
    /// current tables are kept.
    pub fn load(&mut self, dir: &Path) -> Result<()> {
        self.store = persistence::load_tables(dir)?;
        Ok(())
    }

    /// The read-only half of resolution: runs the cascade and records every
    /// intermediate, leaving the writes to the learning engine.
    fn lookup(&self, form: &str) -> ResolvedForm {
        let forms = &self.store.forms;

        if let Some(norm) = forms.get(form) {
            return ResolvedForm::new(form, norm.to_string(), Stage::Exact);
        }

        let mut resolved = ResolvedForm::new(form, String::new(), Stage::Lowercase);

        let lowered = form.to_lowercase();
        if let Some(norm) = forms.get(&lowered) {
            resolved.norm = norm.to_string();
            return resolved;
        }
        resolved.intermediates.push(lowered.clone());

        let canon = self.rules.canonicalize(&lowered);
        if let Some(norm) = forms.get(&canon) {
            resolved.norm = norm.to_string();
            resolved.stage = Stage::Canonical;
            return resolved;
        }
        resolved.intermediates.push(canon.clone());

        if is_compound(&canon) {
            resolved.norm = resolve_compound(&self.store, &self.rules, &canon);
            resolved.stage = Stage::Compound;
            return resolved;
        }

        let stripped = self.rules.dediacritic(&canon);
        match self.store.diacritics.get(&stripped) {
            Some(accented) => {
                resolved.norm = accented.to_string();
                resolved.stage = Stage::Diacritic;
            }
            None => {
                resolved.norm = canon;
                resolved.stage = Stage::Fallback;
            }
        }
        resolved.stripped = Some(stripped);
        resolved
    }
}

fn dictionary_words(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim_end).filter(|line| !line.is_empty())
}
