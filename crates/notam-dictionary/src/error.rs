#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dictionary CSV {origin}: {source}")]
    Csv {
        origin: String,
        #[source]
        source: csv::Error,
    },

    #[error("dictionary {origin} is missing required column '{column}' (found: {found})")]
    MissingColumn {
        origin: String,
        column: &'static str,
        found: String,
    },

    #[error("dictionary {origin} row {row}: {field} is empty")]
    EmptyField {
        origin: String,
        row: usize,
        field: &'static str,
    },
}

impl DictionaryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the source table lacks a required column.
    pub fn is_schema_error(&self) -> bool {
        matches!(self, Self::MissingColumn { .. })
    }
}
