//! Hashing seam used to stretch entropy seeds.

use blake2::Blake2bVar;
use blake2::digest::{Update, VariableOutput};

/// A one-shot cryptographic hash with a configurable output size.
///
/// Each `digest` call builds its own hasher state, so implementations are
/// safe to share across threads.
pub trait Hasher {
    /// Digest size in bytes.
    fn output_len(&self) -> usize;

    /// Hashes `input` and returns a digest of `output_len` bytes.
    fn digest(&self, input: &[u8]) -> Vec<u8>;
}

/// BLAKE2b-backed production hasher.
///
/// `output_len` must be between 1 and 64 bytes, the range BLAKE2b supports.
#[derive(Debug, Clone)]
pub struct Blake2bHasher {
    output_len: usize,
}

impl Blake2bHasher {
    /// Creates a hasher producing digests of `output_len` bytes.
    pub fn new(output_len: usize) -> Self {
        Self { output_len }
    }
}

impl Hasher for Blake2bHasher {
    fn output_len(&self) -> usize {
        self.output_len
    }

    fn digest(&self, input: &[u8]) -> Vec<u8> {
        let mut hasher = Blake2bVar::new(self.output_len).expect("valid BLAKE2b output size");
        hasher.update(input);
        let mut out = vec![0u8; self.output_len];
        hasher
            .finalize_variable(&mut out)
            .expect("buffer matches configured output size");
        out
    }
}
