//! Closest-match lookup for misspelled phrases and abbreviations.
//!
//! Candidates are ranked by normalized Levenshtein similarity
//! (`1 - distance / max_len`), compared case-insensitively.

use std::cmp::Ordering;
use std::collections::HashSet;

use rapidfuzz::distance::levenshtein;
use serde::{Deserialize, Serialize};

use notam_model::AbbreviationMapping;

/// Maximum number of suggestions returned by default.
pub const DEFAULT_LIMIT: usize = 3;

/// Minimum similarity (0.0 to 1.0) a candidate needs by default.
pub const DEFAULT_CUTOFF: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuggestOptions {
    pub limit: usize,
    pub cutoff: f64,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            cutoff: DEFAULT_CUTOFF,
        }
    }
}

impl SuggestOptions {
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the minimum similarity, clamped to `0.0..=1.0`. NaN is ignored.
    #[must_use]
    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        if !cutoff.is_nan() {
            self.cutoff = cutoff.clamp(0.0, 1.0);
        }
        self
    }
}

/// A vocabulary entry close to the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    /// The candidate as it appears in the dictionary.
    pub term: String,
    /// Levenshtein edit distance to the query.
    pub distance: usize,
    /// Normalized similarity (1.0 is identical).
    pub similarity: f64,
}

/// Rank `vocabulary` against `word`.
///
/// Duplicate candidates (ignoring case) are considered once. Results are
/// ordered by similarity, then edit distance, then vocabulary order.
pub fn suggest<'a, I>(word: &str, vocabulary: I, options: SuggestOptions) -> Vec<Suggestion>
where
    I: IntoIterator<Item = &'a str>,
{
    let query = word.trim().to_lowercase();
    if query.is_empty() || options.limit == 0 {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut scored: Vec<Suggestion> = vocabulary
        .into_iter()
        .filter(|term| seen.insert(term.to_lowercase()))
        .filter_map(|term| {
            let candidate = term.to_lowercase();
            let similarity = levenshtein::normalized_similarity(query.chars(), candidate.chars());
            (similarity >= options.cutoff).then(|| Suggestion {
                term: term.to_string(),
                distance: levenshtein::distance(query.chars(), candidate.chars()),
                similarity,
            })
        })
        .collect();

    scored.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
            .then(a.distance.cmp(&b.distance))
    });
    scored.truncate(options.limit);
    scored
}

/// Suggestions against a mapping's phrases and abbreviations.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    vocabulary: Vec<String>,
    options: SuggestOptions,
}

impl SuggestionEngine {
    pub fn new(mapping: &AbbreviationMapping, options: SuggestOptions) -> Self {
        Self {
            vocabulary: mapping.vocabulary().into_iter().map(str::to_string).collect(),
            options,
        }
    }

    pub fn options(&self) -> SuggestOptions {
        self.options
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn suggest(&self, word: &str) -> Vec<Suggestion> {
        suggest(word, self.vocabulary.iter().map(String::as_str), self.options)
    }

    /// True when the word is a known phrase or abbreviation.
    pub fn is_known(&self, word: &str) -> bool {
        let needle = word.trim().to_lowercase();
        self.vocabulary
            .iter()
            .any(|term| term.to_lowercase() == needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_closest_first() {
        let vocabulary = ["runway", "runways", "taxiway", "RCLL"];
        let results = suggest("runwy", vocabulary, SuggestOptions::default());
        let terms: Vec<_> = results.iter().map(|s| s.term.as_str()).collect();
        assert_eq!(terms, vec!["runway", "runways"]);
        assert_eq!(results[0].distance, 1);
    }

    #[test]
    fn cutoff_filters_weak_matches() {
        let results = suggest(
            "xyz",
            ["runway", "taxiway"],
            SuggestOptions::default(),
        );
        assert!(results.is_empty());
    }

    #[test]
    fn case_insensitive_and_deduplicated() {
        let results = suggest("clsd", ["CLSD", "clsd", "closed"], SuggestOptions::default());
        assert_eq!(results[0].term, "CLSD");
        assert_eq!(results[0].distance, 0);
        assert!((results[0].similarity - 1.0).abs() < 1e-9);
        assert_eq!(results.iter().filter(|s| s.term.eq_ignore_ascii_case("clsd")).count(), 1);
    }

    #[test]
    fn limit_and_blank_query() {
        let vocabulary = ["abc", "abd", "abe", "abf"];
        let options = SuggestOptions::default().with_limit(2).with_cutoff(0.5);
        assert_eq!(suggest("abx", vocabulary, options).len(), 2);
        assert!(suggest("  ", vocabulary, options).is_empty());
        assert!(suggest("abc", vocabulary, options.with_limit(0)).is_empty());
    }

    #[test]
    fn nan_cutoff_keeps_previous_value() {
        let options = SuggestOptions::default().with_cutoff(f64::NAN);
        assert!((options.cutoff - DEFAULT_CUTOFF).abs() < 1e-9);
        let results = suggest("runwy", ["runway"], options);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn ties_keep_vocabulary_order() {
        let results = suggest(
            "abx",
            ["abd", "abc"],
            SuggestOptions::default().with_cutoff(0.5),
        );
        let terms: Vec<_> = results.iter().map(|s| s.term.as_str()).collect();
        assert_eq!(terms, vec!["abd", "abc"]);
    }
}
