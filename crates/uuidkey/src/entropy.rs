//! Random entropy suffixes for API keys.

use rand::RngCore;
use rand::rngs::OsRng;
use zeroize::Zeroize;

use crate::hasher::{Blake2bHasher, Hasher};

/// Seed length drawn from the system randomness source.
const SEED_LEN: usize = 32;

/// Digest size used when stretching the seed.
const DIGEST_LEN: usize = 32;

/// Crockford Base32 characters a chunk can encode to, at most.
const MAX_CHUNK_CHARS: usize = 13;

/// Selects how many Crockford Base32 characters of entropy are appended to
/// an API key.
///
/// The bit labels are nominal; the generated suffix carries 5 bits per
/// character at best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntropyStrength {
    /// 14 characters.
    Bits80,
    /// 21 characters.
    Bits128,
    /// 28 characters.
    #[default]
    Bits160,
    /// 42 characters.
    Bits256,
}

impl EntropyStrength {
    /// Number of Base32 characters produced for this strength.
    pub fn char_count(self) -> usize {
        match self {
            EntropyStrength::Bits80 => 14,
            EntropyStrength::Bits128 => 21,
            EntropyStrength::Bits160 => 28,
            EntropyStrength::Bits256 => 42,
        }
    }
}

/// Produces fixed-length pseudorandom Base32 suffixes by stretching a fresh
/// system-random seed through a hash chain.
pub struct EntropyGenerator<H: Hasher = Blake2bHasher> {
    hasher: H,
}

impl EntropyGenerator {
    /// Generator backed by the production BLAKE2b hasher.
    pub fn new() -> Self {
        Self {
            hasher: Blake2bHasher::new(DIGEST_LEN),
        }
    }
}

impl Default for EntropyGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Hasher> EntropyGenerator<H> {
    /// Generator backed by a caller-supplied hasher.
    pub fn with_hasher(hasher: H) -> Self {
        Self { hasher }
    }

    /// Generates an entropy suffix of exactly `strength.char_count()`
    /// Crockford Base32 characters.
    ///
    /// Each call draws its own seed, so independent calls are unrelated.
    pub fn generate(&self, strength: EntropyStrength) -> String {
        let mut seed = [0u8; SEED_LEN];
        OsRng.fill_bytes(&mut seed);
        let out = self.expand(&seed, strength.char_count());
        seed.zeroize();
        out
    }

    /// Stretches `seed` into `char_count` Base32 characters.
    ///
    /// The seed is chained through the hash to accumulate one byte per
    /// output character, the stream is folded big-endian into 64-bit chunks
    /// and Base32-encoded, and the result is truncated or right-padded with
    /// zeros to the exact length.
    fn expand(&self, seed: &[u8], char_count: usize) -> String {
        let mut stream = Vec::with_capacity(char_count);
        let mut block = seed.to_vec();
        while stream.len() < char_count {
            let digest = self.hasher.digest(&block);
            let needed = (char_count - stream.len()).min(digest.len());
            stream.extend_from_slice(&digest[..needed]);
            block.zeroize();
            block = digest;
        }
        block.zeroize();

        let mut encoded = String::with_capacity(char_count + MAX_CHUNK_CHARS);
        for chunk in stream.chunks(8) {
            let value = chunk.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b));
            encoded.push_str(&crockford::encode(value));
        }
        stream.zeroize();

        let mut out = encoded.to_uppercase();
        if out.len() < char_count {
            out.push_str(&"0".repeat(char_count - out.len()));
        } else {
            out.truncate(char_count);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALPHABET: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";

    /// Hasher returning a constant byte, for deterministic expansion.
    struct ConstantHasher(u8);

    impl Hasher for ConstantHasher {
        fn output_len(&self) -> usize {
            DIGEST_LEN
        }

        fn digest(&self, _input: &[u8]) -> Vec<u8> {
            vec![self.0; DIGEST_LEN]
        }
    }

    #[test]
    fn test_lengths_per_strength() {
        let generator = EntropyGenerator::new();
        for (strength, len) in [
            (EntropyStrength::Bits80, 14),
            (EntropyStrength::Bits128, 21),
            (EntropyStrength::Bits160, 28),
            (EntropyStrength::Bits256, 42),
        ] {
            assert_eq!(strength.char_count(), len);
            assert_eq!(generator.generate(strength).len(), len);
        }
    }

    #[test]
    fn test_alphabet() {
        let generator = EntropyGenerator::new();
        let entropy = generator.generate(EntropyStrength::Bits256);
        assert!(entropy.chars().all(|c| ALPHABET.contains(c)));
    }

    #[test]
    fn test_independent_draws_differ() {
        let generator = EntropyGenerator::new();
        let first = generator.generate(EntropyStrength::Bits160);
        let second = generator.generate(EntropyStrength::Bits160);
        assert_ne!(first, second);
    }

    #[test]
    fn test_expand_is_deterministic() {
        let generator = EntropyGenerator::new();
        let seed = [7u8; SEED_LEN];
        assert_eq!(generator.expand(&seed, 21), generator.expand(&seed, 21));
        assert_ne!(
            generator.expand(&[7u8; SEED_LEN], 21),
            generator.expand(&[8u8; SEED_LEN], 21)
        );
    }

    #[test]
    fn test_expand_pads_short_encodings() {
        // All-zero chunks encode to a single '0' each, forcing the
        // right-padding path.
        let generator = EntropyGenerator::with_hasher(ConstantHasher(0));
        assert_eq!(generator.expand(&[0u8; SEED_LEN], 14), "0".repeat(14));
    }

    #[test]
    fn test_expand_truncates_long_encodings() {
        // All-ones chunks encode to 13 characters each, forcing truncation.
        let generator = EntropyGenerator::with_hasher(ConstantHasher(0xFF));
        let out = generator.expand(&[0u8; SEED_LEN], 14);
        assert_eq!(out.len(), 14);
        assert_eq!(&out[..13], "FZZZZZZZZZZZZ");
    }
}
