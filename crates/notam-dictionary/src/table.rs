//! Raw tabular dictionary sources.

use std::io::Read;

use csv::ReaderBuilder;

use crate::error::DictionaryError;

/// A dictionary source before any normalization.
///
/// Headers and cells are kept exactly as read (minus a UTF-8 BOM on headers);
/// the builder decides what they mean.
#[derive(Debug, Clone, Default)]
pub struct DictionaryTable {
    /// Human-readable origin used in error messages (usually a file path).
    pub origin: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DictionaryTable {
    pub fn new(origin: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            origin: origin.into(),
            headers,
            rows,
        }
    }

    /// Position of a column, matching names case-insensitively and ignoring
    /// surrounding whitespace.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| normalize_header(header) == name.to_lowercase())
    }
}

pub(crate) fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_lowercase()
}

/// Read a CSV dictionary into a table.
///
/// Rows must have the same number of fields as the header row.
pub fn read_dictionary_table<R: Read>(
    reader: R,
    origin: &str,
) -> Result<DictionaryTable, DictionaryError> {
    let csv_error = |source| DictionaryError::Csv {
        origin: origin.to_string(),
        source,
    };

    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(|header| header.trim_matches('\u{feff}').to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(DictionaryTable::new(origin, headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_lookup_ignores_case_whitespace_and_bom() {
        let table = read_dictionary_table(
            "\u{feff} Phrase ,ABBREVIATION\nrunway,RWY\n".as_bytes(),
            "inline",
        )
        .unwrap();
        assert_eq!(table.column_index("phrase"), Some(0));
        assert_eq!(table.column_index("abbreviation"), Some(1));
        assert_eq!(table.rows, vec![vec!["runway".to_string(), "RWY".to_string()]]);
    }

    #[test]
    fn ragged_rows_are_csv_errors() {
        let err = read_dictionary_table("phrase,abbreviation\nrunway\n".as_bytes(), "inline")
            .unwrap_err();
        assert!(matches!(err, DictionaryError::Csv { .. }));
    }
}
