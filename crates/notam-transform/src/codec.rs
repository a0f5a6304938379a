//! Both directions compiled together.

use serde::{Deserialize, Serialize};
use tracing::info_span;

use notam_model::AbbreviationMapping;

use crate::decode::Decoder;
use crate::encode::Encoder;

/// Which way to transform text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encode,
    Decode,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Encode => "encode",
            Self::Decode => "decode",
        }
    }
}

/// Encoder and decoder built from one mapping snapshot.
///
/// The mapping is only read during construction; rebuild the codec after the
/// dictionary changes.
#[derive(Debug, Clone, Default)]
pub struct NotamCodec {
    encoder: Encoder,
    decoder: Decoder,
}

impl NotamCodec {
    pub fn new(mapping: &AbbreviationMapping) -> Self {
        Self {
            encoder: Encoder::new(mapping),
            decoder: Decoder::new(mapping),
        }
    }

    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }

    pub fn encode(&self, plain_text: &str) -> String {
        self.encoder.encode(plain_text)
    }

    pub fn decode(&self, encoded_text: &str) -> String {
        self.decoder.decode(encoded_text)
    }

    pub fn apply(&self, direction: Direction, text: &str) -> String {
        let span = info_span!("transform", direction = direction.as_str(), len = text.len());
        let _guard = span.enter();
        match direction {
            Direction::Encode => self.encode(text),
            Direction::Decode => self.decode(text),
        }
    }
}
