//! Plain text to abbreviated text.

use tracing::debug;

use notam_model::AbbreviationMapping;

use crate::rules::RuleSet;
use crate::text::{collapse_whitespace, terminate_sentence};

/// Compiled phrase-to-abbreviation rules.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    rules: RuleSet,
}

impl Encoder {
    pub fn new(mapping: &AbbreviationMapping) -> Self {
        let rules = RuleSet::compile(
            mapping
                .iter()
                .map(|entry| (entry.phrase(), entry.abbreviation())),
        );
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Encode plain NOTAM text.
    ///
    /// Matching is case-insensitive on the input and case-sensitive against
    /// text already inserted by earlier rules; the result is upper-cased,
    /// whitespace-collapsed and ends with a period. Unknown words pass through.
    pub fn encode(&self, plain_text: &str) -> String {
        let (text, matched) = self.rules.apply(plain_text.to_lowercase());
        debug!(rules = self.rules.len(), matched, "encoded text");
        terminate_sentence(collapse_whitespace(&text).to_uppercase())
    }
}

/// Encode `plain_text` with a one-off encoder.
///
/// Prefer [`Encoder`] or [`NotamCodec`](crate::NotamCodec) when encoding more
/// than once with the same mapping.
pub fn encode(plain_text: &str, mapping: &AbbreviationMapping) -> String {
    Encoder::new(mapping).encode(plain_text)
}
