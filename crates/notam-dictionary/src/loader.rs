//! File-backed dictionary loading.

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{info, info_span};

use notam_model::AbbreviationMapping;

use crate::builder::{BuildOptions, BuildReport, build};
use crate::error::DictionaryError;
use crate::hash::sha256_hex;
use crate::table::read_dictionary_table;

/// A mapping together with where it came from and how it was built.
#[derive(Debug, Clone)]
pub struct LoadedDictionary {
    pub path: Option<PathBuf>,
    pub mapping: AbbreviationMapping,
    pub report: BuildReport,
}

/// Load a CSV dictionary from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid CSV, lacks the
/// required columns, or (in strict mode) contains blank fields.
pub fn load_dictionary(
    path: &Path,
    options: BuildOptions,
) -> Result<LoadedDictionary, DictionaryError> {
    let span = info_span!("load_dictionary", path = %path.display());
    let _guard = span.enter();

    let bytes = std::fs::read(path).map_err(|e| DictionaryError::io(path, e))?;
    let origin = path.display().to_string();
    let (mapping, report) = build_from_bytes(&bytes, &origin, options)?;
    info!(
        entries = report.entries,
        rows = report.rows_read,
        skipped = report.skipped.len(),
        overwritten = report.overwritten,
        "dictionary loaded"
    );
    Ok(LoadedDictionary {
        path: Some(path.to_path_buf()),
        mapping,
        report,
    })
}

/// Load a CSV dictionary from any reader.
pub fn load_dictionary_from_reader<R: Read>(
    mut reader: R,
    origin: &str,
    options: BuildOptions,
) -> Result<LoadedDictionary, DictionaryError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| DictionaryError::io(origin, e))?;
    let (mapping, report) = build_from_bytes(&bytes, origin, options)?;
    Ok(LoadedDictionary {
        path: None,
        mapping,
        report,
    })
}

fn build_from_bytes(
    bytes: &[u8],
    origin: &str,
    options: BuildOptions,
) -> Result<(AbbreviationMapping, BuildReport), DictionaryError> {
    let table = read_dictionary_table(bytes, origin)?;
    let (mapping, mut report) = build(&table, options)?;
    report.source_sha256 = Some(sha256_hex(bytes));
    Ok((mapping, report))
}
