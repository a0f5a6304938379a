//! Collecting NOTAM text from arguments, files, or standard input.

use std::io::Read;
use std::path::{Path, PathBuf};

use notam_transform::Direction;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("no NOTAM text to {}; enter some text first", .0.as_str())]
    Empty(Direction),

    #[error("failed to read input {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Gather the text to transform.
///
/// Words given on the command line are joined with spaces; otherwise the
/// input file is read, and failing that `stdin`.
pub fn read_text<R: Read>(
    words: &[String],
    file: Option<&Path>,
    mut stdin: R,
) -> Result<String, InputError> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    if let Some(path) = file {
        return std::fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        });
    }
    let mut buffer = String::new();
    stdin
        .read_to_string(&mut buffer)
        .map_err(|source| InputError::Io {
            path: PathBuf::from("<stdin>"),
            source,
        })?;
    Ok(buffer)
}

/// Reject blank submissions before they reach the engine.
pub fn require_text(text: &str, direction: Direction) -> Result<&str, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(InputError::Empty(direction))
    } else {
        Ok(trimmed)
    }
}
