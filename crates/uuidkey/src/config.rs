//! Options for key encoding and API key generation.

use crate::entropy::EntropyStrength;
use crate::key::KeyFormat;

/// Options for key encoding and API key generation.
#[derive(Debug, Clone, Default)]
pub struct KeyOptions {
    /// Whether standalone keys are rendered with hyphens between segments.
    pub hyphens: bool,
    /// Entropy strength appended to generated API keys.
    pub strength: EntropyStrength,
}

impl KeyOptions {
    /// Create options with the defaults (compact keys, 160-bit entropy).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether keys are rendered with hyphens.
    pub fn with_hyphens(mut self, hyphens: bool) -> Self {
        self.hyphens = hyphens;
        self
    }

    /// Set the entropy strength for generated API keys.
    pub fn with_strength(mut self, strength: EntropyStrength) -> Self {
        self.strength = strength;
        self
    }

    pub(crate) fn key_format(&self) -> KeyFormat {
        if self.hyphens {
            KeyFormat::Hyphenated
        } else {
            KeyFormat::Compact
        }
    }
}
