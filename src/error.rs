// File: src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised around the engine. Normalization itself never fails;
/// everything here comes from loading, saving or validating data.
#[derive(Debug, Error)]
pub enum NormError {
    /// The known-word list could not be read or was not valid UTF-8.
    #[error("cannot read dictionary {path}: {source}")]
    Dictionary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// A persisted table is missing its encoding or is structurally corrupt.
    #[error("cannot decode table '{name}': {source}")]
    Table {
        name: &'static str,
        #[source]
        source: bincode::Error,
    },

    #[error("conformance data: {0}")]
    Conformance(#[from] csv::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, NormError>;
