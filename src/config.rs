// File: src/config.rs
use crate::error::{NormError, Result};
use std::env;
use std::path::PathBuf;

pub const DICTIONARY_ENV: &str = "NORM_DICTIONARY";
pub const TABLES_DIR_ENV: &str = "NORM_TABLES_DIR";
const APP_DIR: &str = "french-normalizer";

/// Where an engine gets its seed dictionary and keeps its learned tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Known-word list; `None` uses the bundled one.
    pub dictionary: Option<PathBuf>,
    pub tables_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: None,
            tables_dir: default_tables_dir(),
        }
    }
}

impl Config {
    /// Defaults overridden by `NORM_DICTIONARY` and `NORM_TABLES_DIR`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Some(path) = non_empty_var(DICTIONARY_ENV)? {
            config.dictionary = Some(PathBuf::from(path));
        }
        if let Some(path) = non_empty_var(TABLES_DIR_ENV)? {
            config.tables_dir = PathBuf::from(path);
        }
        Ok(config)
    }
}

fn non_empty_var(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(NormError::Config(format!("{key} is not valid unicode"))),
    }
}

fn default_tables_dir() -> PathBuf {
    let mut path = dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path.push("tables");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_bundled_dictionary() {
        let config = Config::default();
        assert!(config.dictionary.is_none());
        assert!(config.tables_dir.ends_with("french-normalizer/tables"));
    }
}
