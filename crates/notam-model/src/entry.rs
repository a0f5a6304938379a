//! A single phrase/abbreviation pair.

use serde::{Deserialize, Serialize};

use crate::error::{NotamError, Result};

/// One dictionary row after normalization.
///
/// The phrase is trimmed and lower-cased; the abbreviation is trimmed with its
/// casing preserved. Both are guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawEntry")]
pub struct AbbreviationEntry {
    phrase: String,
    abbreviation: String,
}

#[derive(Deserialize)]
struct RawEntry {
    phrase: String,
    abbreviation: String,
}

impl TryFrom<RawEntry> for AbbreviationEntry {
    type Error = NotamError;

    fn try_from(raw: RawEntry) -> Result<Self> {
        Self::new(&raw.phrase, &raw.abbreviation)
    }
}

impl AbbreviationEntry {
    /// Normalize and validate a raw pair.
    pub fn new(phrase: &str, abbreviation: &str) -> Result<Self> {
        let phrase = normalize_phrase(phrase);
        if phrase.is_empty() {
            return Err(NotamError::EmptyPhrase);
        }
        let abbreviation = abbreviation.trim();
        if abbreviation.is_empty() {
            return Err(NotamError::EmptyAbbreviation { phrase });
        }
        Ok(Self {
            phrase,
            abbreviation: abbreviation.to_string(),
        })
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    /// Lower-cased abbreviation, the key used by the reverse index.
    pub fn abbreviation_key(&self) -> String {
        self.abbreviation.to_lowercase()
    }

    pub fn into_parts(self) -> (String, String) {
        (self.phrase, self.abbreviation)
    }
}

/// Trim and lower-case a phrase the way dictionary keys are stored.
pub fn normalize_phrase(raw: &str) -> String {
    raw.trim().to_lowercase()
}
