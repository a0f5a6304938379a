//! Abbreviation to phrase lookup used when decoding.

use std::collections::HashMap;

use crate::mapping::AbbreviationMapping;

/// Lower-cased abbreviation to the phrases that produce it.
///
/// Keys keep the order of their first appearance in the mapping and each
/// candidate list keeps mapping insertion order, so ambiguous expansions are
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReverseIndex {
    keys: Vec<(String, Vec<String>)>,
    positions: HashMap<String, usize>,
}

impl ReverseIndex {
    pub fn from_mapping(mapping: &AbbreviationMapping) -> Self {
        let mut index = Self::default();
        for entry in mapping {
            let key = entry.abbreviation_key();
            match index.positions.get(&key) {
                Some(&position) => index.keys[position].1.push(entry.phrase().to_string()),
                None => {
                    index.positions.insert(key.clone(), index.keys.len());
                    index.keys.push((key, vec![entry.phrase().to_string()]));
                }
            }
        }
        index
    }

    /// Candidate phrases for an abbreviation (case-insensitive).
    pub fn get(&self, abbreviation: &str) -> Option<&[String]> {
        self.positions
            .get(&abbreviation.to_lowercase())
            .map(|&position| self.keys[position].1.as_slice())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.keys
            .iter()
            .map(|(key, phrases)| (key.as_str(), phrases.as_slice()))
    }

    /// Abbreviations shared by more than one phrase.
    pub fn ambiguous(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.iter().filter(|(_, phrases)| phrases.len() > 1)
    }
}
