//! The phrase to abbreviation dictionary.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::entry::{AbbreviationEntry, normalize_phrase};
use crate::reverse::ReverseIndex;

/// Result of inserting an entry into a mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The phrase was new.
    Inserted,
    /// The phrase already existed; its previous abbreviation was replaced.
    Replaced { previous: String },
}

/// Ordered mapping from lower-case phrase to abbreviation.
///
/// Iteration follows the order in which phrases were first inserted. A repeated
/// phrase overwrites the abbreviation in place (last write wins) without moving
/// the phrase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "Vec<AbbreviationEntry>",
    into = "Vec<AbbreviationEntry>"
)]
pub struct AbbreviationMapping {
    entries: Vec<AbbreviationEntry>,
    index: HashMap<String, usize>,
}

impl AbbreviationMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: AbbreviationEntry) -> InsertOutcome {
        match self.index.get(entry.phrase()) {
            Some(&position) => {
                let previous = std::mem::replace(&mut self.entries[position], entry);
                InsertOutcome::Replaced {
                    previous: previous.into_parts().1,
                }
            }
            None => {
                self.index
                    .insert(entry.phrase().to_string(), self.entries.len());
                self.entries.push(entry);
                InsertOutcome::Inserted
            }
        }
    }

    /// Look up the abbreviation for a phrase (case-insensitive).
    pub fn get(&self, phrase: &str) -> Option<&str> {
        let key = normalize_phrase(phrase);
        self.index
            .get(&key)
            .map(|&position| self.entries[position].abbreviation())
    }

    pub fn contains_phrase(&self, phrase: &str) -> bool {
        self.index.contains_key(&normalize_phrase(phrase))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AbbreviationEntry> {
        self.entries.iter()
    }

    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(AbbreviationEntry::phrase)
    }

    pub fn abbreviations(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(AbbreviationEntry::abbreviation)
    }

    /// Every phrase followed by every abbreviation, in mapping order.
    ///
    /// This is the candidate set for closest-match suggestions.
    pub fn vocabulary(&self) -> Vec<&str> {
        self.phrases().chain(self.abbreviations()).collect()
    }

    pub fn reverse_index(&self) -> ReverseIndex {
        ReverseIndex::from_mapping(self)
    }
}

impl FromIterator<AbbreviationEntry> for AbbreviationMapping {
    fn from_iter<I: IntoIterator<Item = AbbreviationEntry>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for entry in iter {
            mapping.insert(entry);
        }
        mapping
    }
}

impl From<Vec<AbbreviationEntry>> for AbbreviationMapping {
    fn from(entries: Vec<AbbreviationEntry>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<AbbreviationMapping> for Vec<AbbreviationEntry> {
    fn from(mapping: AbbreviationMapping) -> Self {
        mapping.entries
    }
}

impl<'a> IntoIterator for &'a AbbreviationMapping {
    type Item = &'a AbbreviationEntry;
    type IntoIter = std::slice::Iter<'a, AbbreviationEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(phrase: &str, abbreviation: &str) -> AbbreviationEntry {
        AbbreviationEntry::new(phrase, abbreviation).unwrap()
    }

    #[test]
    fn last_write_wins_keeps_position() {
        let mut mapping = AbbreviationMapping::new();
        assert_eq!(mapping.insert(entry("runway", "RWY")), InsertOutcome::Inserted);
        mapping.insert(entry("taxiway", "TWY"));
        assert_eq!(
            mapping.insert(entry("RUNWAY", "RY")),
            InsertOutcome::Replaced {
                previous: "RWY".to_string()
            }
        );

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("Runway"), Some("RY"));
        let phrases: Vec<_> = mapping.phrases().collect();
        assert_eq!(phrases, vec!["runway", "taxiway"]);
    }

    #[test]
    fn vocabulary_lists_phrases_then_abbreviations() {
        let mapping: AbbreviationMapping =
            vec![entry("closed", "CLSD"), entry("runway", "RWY")].into();
        assert_eq!(mapping.vocabulary(), vec!["closed", "runway", "CLSD", "RWY"]);
        assert!(mapping.contains_phrase(" CLOSED "));
        assert!(!mapping.contains_phrase("clsd"));
    }
}
