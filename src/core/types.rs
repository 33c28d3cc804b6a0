// src/core/types.rs

/// The step of the resolution cascade that produced a norm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// The raw form was already a key of the form table.
    Exact,
    /// The lowercased form was a key of the form table.
    Lowercase,
    /// The rule-canonicalized form was a key of the form table.
    Canonical,
    /// The canonical form was a hyphenated compound resolved part by part.
    Compound,
    /// The diacritic-stripped form was a key of the diacritic table.
    Diacritic,
    /// Nothing matched; the canonical form became its own norm.
    Fallback,
}

/// The outcome of resolving one raw form.
///
/// `intermediates` holds every literal string produced on the way to the
/// norm, starting with the raw form itself. These are the keys the
/// learning step binds to `norm`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedForm {
    pub form: String,
    pub intermediates: Vec<String>,
    pub norm: String,
    pub stage: Stage,
    /// Diacritic-stripped key, only computed when the cascade reached it.
    pub stripped: Option<String>,
}

impl ResolvedForm {
    pub(crate) fn new(form: &str, norm: String, stage: Stage) -> Self {
        Self {
            form: form.to_string(),
            intermediates: vec![form.to_string()],
            norm,
            stage,
            stripped: None,
        }
    }

    /// Whether the learning step has anything to write for this resolution.
    pub fn needs_learning(&self) -> bool {
        self.stage != Stage::Exact
    }
}
