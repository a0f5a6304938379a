//! Abbreviated text to plain text.

use tracing::debug;

use notam_model::{AbbreviationMapping, ReverseIndex};

use crate::rules::RuleSet;
use crate::text::{capitalize_first, collapse_whitespace, terminate_sentence};

/// Joins the candidate phrases of an ambiguous abbreviation.
pub const AMBIGUITY_SEPARATOR: &str = "/";

/// Compiled abbreviation-to-phrase rules.
///
/// An abbreviation shared by several phrases expands to all of them, in
/// dictionary order, joined by [`AMBIGUITY_SEPARATOR`].
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    rules: RuleSet,
}

impl Decoder {
    pub fn new(mapping: &AbbreviationMapping) -> Self {
        Self::from_reverse_index(&mapping.reverse_index())
    }

    pub fn from_reverse_index(index: &ReverseIndex) -> Self {
        let rules = RuleSet::compile(
            index
                .iter()
                .map(|(key, phrases)| (key, phrases.join(AMBIGUITY_SEPARATOR))),
        );
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Decode abbreviated NOTAM text.
    ///
    /// The result is lower-case apart from its first character, has collapsed
    /// whitespace and ends with a period. Unknown words pass through.
    pub fn decode(&self, encoded_text: &str) -> String {
        let (text, matched) = self.rules.apply(encoded_text.to_lowercase());
        debug!(rules = self.rules.len(), matched, "decoded text");
        terminate_sentence(capitalize_first(&collapse_whitespace(&text)))
    }
}

/// Decode `encoded_text` with a one-off decoder.
pub fn decode(encoded_text: &str, mapping: &AbbreviationMapping) -> String {
    Decoder::new(mapping).decode(encoded_text)
}
