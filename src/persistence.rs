// File: src/persistence.rs
use crate::core::store::{LookupStore, Table};
use crate::error::{NormError, Result};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

pub const FORMS_FILE: &str = "forms.bin";
pub const DIACRITICS_FILE: &str = "diacritics.bin";

/// Whether `dir` holds both table files.
pub fn tables_exist(dir: &Path) -> bool {
    dir.join(FORMS_FILE).is_file() && dir.join(DIACRITICS_FILE).is_file()
}

/// Whether `dir` holds at least one table file.
pub fn any_table_exists(dir: &Path) -> bool {
    dir.join(FORMS_FILE).exists() || dir.join(DIACRITICS_FILE).exists()
}

/// Writes both tables into `dir`, creating it if needed.
///
/// Both tables are fully serialized into temporary siblings before either
/// is renamed into place, so an encoding or disk error leaves the previous
/// pair untouched. Only a failure between the two renames can still mix a
/// new `forms.bin` with an old `diacritics.bin`.
pub fn save_tables(store: &LookupStore, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    let forms = stage_table(&store.forms, dir, FORMS_FILE)?;
    let diacritics = stage_table(&store.diacritics, dir, DIACRITICS_FILE)?;
    forms.persist(dir.join(FORMS_FILE)).map_err(|e| e.error)?;
    diacritics.persist(dir.join(DIACRITICS_FILE)).map_err(|e| e.error)?;
    info!(
        dir = %dir.display(),
        forms = store.forms.len(),
        diacritics = store.diacritics.len(),
        "saved lookup tables"
    );
    Ok(())
}

/// Reads both tables from `dir`. Nothing is returned unless both decode.
pub fn load_tables(dir: &Path) -> Result<LookupStore> {
    let forms = read_table(dir, FORMS_FILE)?;
    let diacritics = read_table(dir, DIACRITICS_FILE)?;
    info!(
        dir = %dir.display(),
        forms = forms.len(),
        diacritics = diacritics.len(),
        "loaded lookup tables"
    );
    Ok(LookupStore { forms, diacritics })
}

fn stage_table(table: &Table, dir: &Path, name: &'static str) -> Result<NamedTempFile> {
    let temp_file = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, table).map_err(|source| NormError::Table { name, source })?;
        writer.flush()?;
    }
    temp_file.as_file().sync_all()?;
    Ok(temp_file)
}

fn read_table(dir: &Path, name: &'static str) -> Result<Table> {
    let file = File::open(dir.join(name))?;
    let reader = BufReader::new(file);
    bincode::deserialize_from(reader).map_err(|source| NormError::Table { name, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rules::FrenchRules;
    use tempfile::tempdir;

    fn store() -> LookupStore {
        LookupStore::seed(&FrenchRules, ["maison", "être", "là"], &[("meme", "même")])
    }

    #[test]
    fn round_trip_is_lossless() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("nested").join("tables");
        let store = store();

        save_tables(&store, &target).unwrap();
        assert!(tables_exist(&target));
        assert_eq!(load_tables(&target).unwrap(), store);
    }

    #[test]
    fn missing_file_fails_the_load() {
        let dir = tempdir().unwrap();
        save_tables(&store(), dir.path()).unwrap();
        fs::remove_file(dir.path().join(DIACRITICS_FILE)).unwrap();

        assert!(!tables_exist(dir.path()));
        assert!(matches!(load_tables(dir.path()), Err(NormError::Io(_))));
    }

    #[test]
    fn one_surviving_file_still_counts_as_saved_tables() {
        let dir = tempdir().unwrap();
        assert!(!any_table_exists(dir.path()));
        save_tables(&store(), dir.path()).unwrap();
        fs::remove_file(dir.path().join(FORMS_FILE)).unwrap();

        assert!(any_table_exists(dir.path()));
        assert!(!tables_exist(dir.path()));
    }

    #[test]
    fn save_leaves_no_temporary_files_behind() {
        let dir = tempdir().unwrap();
        save_tables(&store(), dir.path()).unwrap();
        save_tables(&store(), dir.path()).unwrap();

        let mut names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec![DIACRITICS_FILE, FORMS_FILE]);
    }

    #[test]
    fn corrupt_file_fails_the_load() {
        let dir = tempdir().unwrap();
        save_tables(&store(), dir.path()).unwrap();
        fs::write(dir.path().join(FORMS_FILE), [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x01]).unwrap();

        match load_tables(dir.path()) {
            Err(NormError::Table { name, .. }) => assert_eq!(name, FORMS_FILE),
            other => panic!("expected a table error, got {:?}", other.map(|s| s.forms.len())),
        }
    }
}
