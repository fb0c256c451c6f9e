//! Keccak-256 "fast hash" used throughout the ledger format.

use core::fmt;

use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

use crate::{Error, Result};

/// Number of bytes in a digest.
pub const HASH_BYTES: usize = 32;

/// 32-byte Keccak-256 digest (original Keccak padding, not SHA3-256).
///
/// Transaction prefix hashes enter the signature schemes as values of this type.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Hash(pub [u8; HASH_BYTES]);

impl Hash {
    /// Hashes `data` with Keccak-256.
    pub fn digest(data: &[u8]) -> Self {
        Self(fast_hash(data))
    }

    /// Creates a hash from a byte slice of exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; HASH_BYTES] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: HASH_BYTES,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }

    /// Parses a hash from a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s).map_err(|_| Error::InvalidLength {
            expected: HASH_BYTES,
            actual: s.len() / 2,
        })?;
        Self::from_slice(&bytes)
    }

    /// Returns the digest bytes.
    pub fn as_bytes(&self) -> &[u8; HASH_BYTES] {
        &self.0
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", hex::encode(self.0))
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl From<[u8; HASH_BYTES]> for Hash {
    fn from(bytes: [u8; HASH_BYTES]) -> Self {
        Self(bytes)
    }
}

/// Keccak-256 of `data`.
pub fn fast_hash(data: &[u8]) -> [u8; HASH_BYTES] {
    Keccak256::digest(data).into()
}
