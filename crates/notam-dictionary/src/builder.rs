//! Normalizes raw dictionary rows into an [`AbbreviationMapping`].
//!
//! Every row is trimmed; phrases are lower-cased and abbreviations keep their
//! casing. A phrase that appears more than once takes the abbreviation of its
//! last row. Rows whose phrase or abbreviation is blank are skipped, or
//! rejected when [`BuildOptions::strict`] is set.

use serde::Serialize;
use tracing::{debug, warn};

use notam_model::entry::normalize_phrase;
use notam_model::{AbbreviationEntry, AbbreviationMapping, InsertOutcome, NotamError};

use crate::error::DictionaryError;
use crate::table::DictionaryTable;

pub const PHRASE_COLUMN: &str = "phrase";
pub const ABBREVIATION_COLUMN: &str = "abbreviation";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Fail on blank phrases or abbreviations instead of skipping the row.
    pub strict: bool,
}

impl BuildOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// A row left out of the mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// 1-based data row number (the header is not counted).
    pub row: usize,
    pub field: &'static str,
}

/// Counts collected while building a mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub rows_read: usize,
    pub entries: usize,
    pub overwritten: usize,
    pub skipped: Vec<SkippedRow>,
    /// SHA-256 of the source bytes, when built from a file or byte stream.
    pub source_sha256: Option<String>,
}

/// Build a mapping from a raw table.
///
/// # Errors
///
/// Returns [`DictionaryError::MissingColumn`] when the `phrase` or
/// `abbreviation` column is absent, and [`DictionaryError::EmptyField`] for a
/// blank cell in strict mode.
pub fn build(
    table: &DictionaryTable,
    options: BuildOptions,
) -> Result<(AbbreviationMapping, BuildReport), DictionaryError> {
    let phrase_idx = required_column(table, PHRASE_COLUMN)?;
    let abbreviation_idx = required_column(table, ABBREVIATION_COLUMN)?;

    let mut mapping = AbbreviationMapping::new();
    let mut report = BuildReport::default();

    for (offset, row) in table.rows.iter().enumerate() {
        let row_number = offset + 1;
        report.rows_read += 1;
        let phrase = row.get(phrase_idx).map(String::as_str).unwrap_or_default();
        let abbreviation = row
            .get(abbreviation_idx)
            .map(String::as_str)
            .unwrap_or_default();

        let entry = match AbbreviationEntry::new(phrase, abbreviation) {
            Ok(entry) => entry,
            Err(error) => {
                let field = match error {
                    NotamError::EmptyPhrase => PHRASE_COLUMN,
                    NotamError::EmptyAbbreviation { .. } => ABBREVIATION_COLUMN,
                };
                if options.strict {
                    return Err(DictionaryError::EmptyField {
                        origin: table.origin.clone(),
                        row: row_number,
                        field,
                    });
                }
                warn!(origin = %table.origin, row = row_number, field, "skipping dictionary row");
                report.skipped.push(SkippedRow {
                    row: row_number,
                    field,
                });
                continue;
            }
        };

        if let InsertOutcome::Replaced { previous } = mapping.insert(entry) {
            debug!(
                origin = %table.origin,
                row = row_number,
                phrase = %normalize_phrase(phrase),
                previous = %previous,
                "duplicate phrase overwrites earlier abbreviation"
            );
            report.overwritten += 1;
        }
    }

    report.entries = mapping.len();
    Ok((mapping, report))
}

/// Build a mapping from in-memory pairs using the same normalization rules.
pub fn build_from_pairs<I, P, A>(
    pairs: I,
    options: BuildOptions,
) -> Result<(AbbreviationMapping, BuildReport), DictionaryError>
where
    I: IntoIterator<Item = (P, A)>,
    P: Into<String>,
    A: Into<String>,
{
    let rows = pairs
        .into_iter()
        .map(|(phrase, abbreviation)| vec![phrase.into(), abbreviation.into()])
        .collect();
    let table = DictionaryTable::new(
        "<memory>",
        vec![PHRASE_COLUMN.to_string(), ABBREVIATION_COLUMN.to_string()],
        rows,
    );
    build(&table, options)
}

fn required_column(table: &DictionaryTable, column: &'static str) -> Result<usize, DictionaryError> {
    table
        .column_index(column)
        .ok_or_else(|| DictionaryError::MissingColumn {
            origin: table.origin.clone(),
            column,
            found: table.headers.join(", "),
        })
}
