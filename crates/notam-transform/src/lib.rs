//! NOTAM text transformation.
//!
//! This crate turns plain-language NOTAM text into its abbreviated form and
//! back, driven by an [`AbbreviationMapping`](notam_model::AbbreviationMapping):
//!
//! - **encode**: longest-phrase-first, whole-word substitution of phrases by
//!   their abbreviations, upper-cased and period-terminated
//! - **decode**: whole-word expansion of abbreviations into every phrase that
//!   maps to them (joined with `/`), sentence-cased and period-terminated
//! - **codec**: both rule sets compiled once for repeated use
//! - **text**: the shared whitespace and sentence helpers

pub mod codec;
pub mod decode;
pub mod encode;
pub mod rules;
pub mod text;

pub use codec::{Direction, NotamCodec};
pub use decode::{AMBIGUITY_SEPARATOR, Decoder, decode};
pub use encode::{Encoder, encode};
