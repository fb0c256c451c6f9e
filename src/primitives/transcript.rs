//! Fiat-Shamir transcript for the signature schemes.
//!
//! The ledger format hashes the raw concatenation of its inputs, so there are
//! no labels or length prefixes: the order of `append_*` calls is the format.

use sha3::{Digest, Keccak256};

use super::hash::Hash;
use super::scalar::Scalar;

/// Keccak-256 transcript producing challenge scalars.
#[derive(Clone, Default)]
pub struct Transcript(Keccak256);

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self(Keccak256::new())
    }

    /// Appends the transaction prefix hash.
    pub fn append_hash(&mut self, hash: &Hash) {
        self.0.update(hash.as_bytes());
    }

    /// Appends a compressed point (public key, key image or commitment).
    pub fn append_point(&mut self, point: &[u8; 32]) {
        self.0.update(point);
    }

    /// Appends arbitrary bytes.
    pub fn append_bytes(&mut self, bytes: &[u8]) {
        self.0.update(bytes);
    }

    /// Finishes the transcript: Keccak-256 of everything appended, reduced mod `L`.
    pub fn challenge_scalar(self) -> Scalar {
        Scalar::from_bytes_mod_order(self.0.finalize().into())
    }
}
