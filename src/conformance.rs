// File: src/conformance.rs
//! Checks an engine against a reference dataset of `form,norm` pairs.

use crate::core::engine::Normalizer;
use crate::core::rules::TextRules;
use crate::error::Result;
use std::fmt;
use std::io;
use std::path::Path;

/// One reference pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub form: String,
    pub norm: String,
}

/// A form whose norm did not match the reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub form: String,
    pub expected: String,
    pub actual: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed normalization: {}. Waits: {}. Gets: {}",
            self.form, self.expected, self.actual
        )
    }
}

impl std::error::Error for Mismatch {}

pub fn check(form: &str, expected: &str, actual: &str) -> std::result::Result<(), Mismatch> {
    if expected == actual {
        return Ok(());
    }
    Err(Mismatch {
        form: form.to_string(),
        expected: expected.to_string(),
        actual: actual.to_string(),
    })
}

/// Reads a headerless two-column CSV.
pub fn read_cases<Rd: io::Read>(reader: Rd) -> Result<Vec<Case>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_reader(reader);

    let mut cases = Vec::new();
    for record in reader.deserialize() {
        let (form, norm): (String, String) = record?;
        cases.push(Case { form, norm });
    }
    Ok(cases)
}

pub fn read_cases_from_path(path: &Path) -> Result<Vec<Case>> {
    let file = std::fs::File::open(path)?;
    read_cases(file)
}

/// Normalizes every case in order and returns the mismatches.
pub fn run<R: TextRules>(engine: &mut Normalizer<R>, cases: &[Case]) -> Vec<Mismatch> {
    cases
        .iter()
        .filter_map(|case| {
            let actual = engine.normalize(&case.form);
            check(&case.form, &case.norm, &actual).err()
        })
        .collect()
}
