#![deny(unsafe_code)]

pub mod suggest;

pub use suggest::{DEFAULT_CUTOFF, DEFAULT_LIMIT, SuggestOptions, Suggestion, SuggestionEngine, suggest};
