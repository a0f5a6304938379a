//! Ordered whole-word substitution rules.

use std::borrow::Cow;

use regex::{NoExpand, Regex};
use tracing::warn;

/// Replace whole-word occurrences of `key` with `replacement`.
#[derive(Debug, Clone)]
pub struct SubstitutionRule {
    key: String,
    replacement: String,
    pattern: Regex,
}

impl SubstitutionRule {
    /// Compile a rule for a literal key.
    ///
    /// Returns `None` when the key is empty or its pattern cannot be compiled.
    pub fn new(key: &str, replacement: impl Into<String>) -> Option<Self> {
        if key.is_empty() {
            return None;
        }
        let pattern = match Regex::new(&format!(r"\b{}\b", regex::escape(key))) {
            Ok(pattern) => pattern,
            Err(error) => {
                warn!(key, %error, "skipping substitution rule");
                return None;
            }
        };
        Some(Self {
            key: key.to_string(),
            replacement: replacement.into(),
            pattern,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Apply to `text`, returning `None` when nothing matched.
    fn apply(&self, text: &str) -> Option<String> {
        match self
            .pattern
            .replace_all(text, NoExpand(self.replacement.as_str()))
        {
            Cow::Borrowed(_) => None,
            Cow::Owned(replaced) => Some(replaced),
        }
    }
}

/// Rules ordered by descending key length.
///
/// Longer keys run first so that a short key cannot consume part of a longer
/// one. Keys of equal length keep the order they were supplied in. Rules are
/// applied one after another to the same buffer, so text inserted by an
/// earlier rule is visible to later, shorter ones.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<SubstitutionRule>,
}

impl RuleSet {
    pub fn compile<I, K, R>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, R)>,
        K: AsRef<str>,
        R: Into<String>,
    {
        let mut rules: Vec<SubstitutionRule> = pairs
            .into_iter()
            .filter_map(|(key, replacement)| SubstitutionRule::new(key.as_ref(), replacement))
            .collect();
        // Stable sort: ties stay in insertion order.
        rules.sort_by_key(|rule| std::cmp::Reverse(rule.key.chars().count()));
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SubstitutionRule> {
        self.rules.iter()
    }

    /// Run every rule in order; returns the text and how many rules matched.
    pub fn apply(&self, text: String) -> (String, usize) {
        let mut current = text;
        let mut matched = 0;
        for rule in &self.rules {
            if let Some(replaced) = rule.apply(&current) {
                current = replaced;
                matched += 1;
            }
        }
        (current, matched)
    }
}
