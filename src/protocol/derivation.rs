//! Stealth addresses: Diffie-Hellman derivations and per-output one-time keys.
//!
//! A sender with transaction key `r` and a recipient with view key `a` share
//! `D = 8 * r * A = 8 * a * R`. For output index `i` the one-time key is
//! `P = Hs(D || varint(i)) * G + B`, spendable with `x = Hs(D || varint(i)) + b`.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::keys::{PublicKey, SecretKey};
use crate::primitives::varint::{write_varint, MAX_VARINT_BYTES};
use crate::primitives::{Point, Scalar};
use crate::{Error, Result};

/// Number of bytes in a derivation.
pub const DERIVATION_BYTES: usize = 32;

/// Cofactor-cleared shared secret `8 * secret * public`.
///
/// Only its encoding is ever hashed, so any 32 bytes are accepted.
#[derive(Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct KeyDerivation([u8; DERIVATION_BYTES]);

impl KeyDerivation {
    /// Computes the shared secret between `public` and `secret`.
    ///
    /// The secret is used modulo the group order; the cofactor multiplication
    /// makes the result independent of that reduction.
    pub fn generate(public: &PublicKey, secret: &SecretKey) -> Self {
        let shared = public.point().scalar_mul(&secret.reduced()).mul_by_cofactor();
        Self(shared.encode())
    }

    /// Wraps raw derivation bytes.
    pub fn from_bytes(bytes: [u8; DERIVATION_BYTES]) -> Self {
        Self(bytes)
    }

    /// Parses a derivation from a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self> {
        let mut bytes = [0u8; DERIVATION_BYTES];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| Error::InvalidLength {
            expected: DERIVATION_BYTES,
            actual: s.len() / 2,
        })?;
        Ok(Self(bytes))
    }

    /// Returns the derivation bytes.
    pub fn as_bytes(&self) -> &[u8; DERIVATION_BYTES] {
        &self.0
    }

    /// `Hs(derivation || varint(index))`, the per-output offset.
    pub fn to_scalar(&self, index: u64) -> Scalar {
        let mut buf = Vec::with_capacity(DERIVATION_BYTES + MAX_VARINT_BYTES);
        buf.extend_from_slice(&self.0);
        write_varint(index, &mut buf);
        Scalar::hash_to_scalar(&buf)
    }

    /// One-time output key `Hs(D || i) * G + base`.
    pub fn derive_public_key(&self, index: u64, base: &PublicKey) -> PublicKey {
        let offset = Point::mul_base(&self.to_scalar(index));
        PublicKey::from_point(offset + *base.point())
    }

    /// One-time output secret `Hs(D || i) + base`.
    ///
    /// The base secret is taken modulo the group order.
    pub fn derive_secret_key(&self, index: u64, base: &SecretKey) -> SecretKey {
        SecretKey::from_scalar(&(self.to_scalar(index) + base.reduced()))
    }

    /// Recovers the base key from a one-time output key: `output - Hs(D || i) * G`.
    pub fn underive_public_key(&self, index: u64, output: &PublicKey) -> PublicKey {
        let offset = Point::mul_base(&self.to_scalar(index));
        PublicKey::from_point(*output.point() - offset)
    }
}

impl fmt::Debug for KeyDerivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyDerivation({})", hex::encode(self.0))
    }
}

/// `derivation_to_scalar` under its ledger name.
pub fn derivation_to_scalar(derivation: &KeyDerivation, index: u64) -> Scalar {
    derivation.to_scalar(index)
}
