//! Per-document normalization and table persistence.

use norm_core::{Config, Normalizer, Stage};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Deserialize)]
struct Sentence {
    forms: Vec<String>,
    norms: Vec<String>,
}

fn sentences() -> Vec<Sentence> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/sents.json");
    let text = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&text).unwrap()
}

const REGRESSION_SET: &[&str] = &[
    "Maison", "meme", "qu'est-ce", "-nous", "PEUT-ETRE", "Quoiiii", "hopital",
    "auteur·rice·s", "Coeur", "blèèème", "bleme", "(re)présenter", "", "zzz-etre",
];

#[test]
fn documents_normalize_token_by_token() {
    let mut engine = Normalizer::bundled();
    for sentence in sentences() {
        let norms = engine.normalize_batch(&sentence.forms);
        assert_eq!(norms.len(), sentence.forms.len());
        assert_eq!(norms, sentence.norms, "forms: {:?}", sentence.forms);
    }
}

#[test]
fn saved_tables_reproduce_every_norm() {
    let dir = tempfile::tempdir().unwrap();
    let mut original = Normalizer::bundled();
    for sentence in sentences() {
        original.normalize_batch(&sentence.forms);
    }
    original.save(dir.path()).unwrap();

    let mut restored = Normalizer::new(Vec::<String>::new(), &[]);
    restored.load(dir.path()).unwrap();
    assert_eq!(restored.store(), original.store());

    for form in REGRESSION_SET {
        assert_eq!(restored.normalize(form), original.normalize(form), "{form}");
    }
}

#[test]
fn failed_load_keeps_current_tables() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = Normalizer::bundled();
    engine.normalize("Blèèème");
    let before = engine.store().clone();

    assert!(engine.load(dir.path()).is_err());
    assert_eq!(engine.store(), &before);
}

#[test]
fn open_prefers_saved_tables() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        dictionary: None,
        tables_dir: dir.path().to_path_buf(),
    };

    let mut first = Normalizer::open(&config).unwrap();
    assert_eq!(first.normalize("Blèèème"), "blème");
    first.save(&config.tables_dir).unwrap();

    let mut second = Normalizer::open(&config).unwrap();
    assert_eq!(second.resolve("Blèèème").stage, Stage::Exact);
    assert_eq!(second.normalize("bleme"), "blème");
}

#[test]
fn open_refuses_corrupt_tables() {
    let dir = tempfile::tempdir().unwrap();
    Normalizer::bundled().save(dir.path()).unwrap();
    std::fs::write(dir.path().join(norm_core::persistence::FORMS_FILE), b"garbage").unwrap();

    let config = Config {
        dictionary: None,
        tables_dir: dir.path().to_path_buf(),
    };
    assert!(matches!(
        Normalizer::open(&config),
        Err(norm_core::NormError::Table { .. })
    ));
}

#[test]
fn open_refuses_a_half_saved_directory_and_keeps_learned_data() {
    let dir = tempfile::tempdir().unwrap();
    let forms_path = dir.path().join(norm_core::persistence::FORMS_FILE);
    let mut engine = Normalizer::bundled();
    engine.add("foyer", ["Maison"]);
    engine.save(dir.path()).unwrap();
    std::fs::remove_file(dir.path().join(norm_core::persistence::DIACRITICS_FILE)).unwrap();
    let saved_forms = std::fs::read(&forms_path).unwrap();

    let config = Config {
        dictionary: None,
        tables_dir: dir.path().to_path_buf(),
    };
    assert!(matches!(Normalizer::open(&config), Err(norm_core::NormError::Io(_))));
    assert_eq!(std::fs::read(&forms_path).unwrap(), saved_forms);
}
