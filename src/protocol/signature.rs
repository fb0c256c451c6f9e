//! Single-signer Schnorr signatures over a transaction prefix hash.
//!
//! `generate` commits to `R = k * G`, derives `c = Hs(prefix || P || R)` and
//! answers with `r = k - c * x`. `check` recomputes `R' = r * G + c * P` and
//! accepts iff `Hs(prefix || P || R') == c`.

use core::fmt;

use rand_core::CryptoRngCore;
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::keys::{PublicKey, SecretKey};
use crate::primitives::scalar::SCALAR_BYTES;
use crate::primitives::{Hash, Point, Scalar, Transcript};
use crate::{Error, Result};

/// Number of bytes in an encoded signature.
pub const SIGNATURE_BYTES: usize = 2 * SCALAR_BYTES;

/// Secret nonce used in the commitment phase.
///
/// Automatically zeroized when dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub(crate) struct Nonce(Scalar);

impl Nonce {
    /// Draws a fresh nonce.
    pub(crate) fn generate<R: CryptoRngCore>(rng: &mut R) -> Self {
        Self(Scalar::random(rng))
    }

    /// Returns the nonce scalar.
    pub(crate) fn k(&self) -> &Scalar {
        &self.0
    }
}

/// Challenge/response pair `(c, r)`, encoded as `c || r`.
#[derive(Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    c: Scalar,
    r: Scalar,
}

impl Signature {
    /// Creates a signature from its scalars.
    pub fn new(c: Scalar, r: Scalar) -> Self {
        Self { c, r }
    }

    /// Signs `prefix_hash` with `secret`, whose public key is `public`.
    ///
    /// The public key is not recomputed from the secret; a mismatched pair
    /// yields a signature that fails [`Signature::check`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cryptonote_crypto::{Hash, KeyPair, SecureRng, Signature};
    ///
    /// let mut rng = SecureRng::new();
    /// let keys = KeyPair::generate(&mut rng);
    /// let prefix = Hash::digest(b"transaction prefix");
    ///
    /// let sig = Signature::generate(&prefix, keys.public(), keys.secret(), &mut rng);
    /// assert!(sig.check(&prefix, keys.public()));
    /// ```
    pub fn generate<R: CryptoRngCore>(
        prefix_hash: &Hash,
        public: &PublicKey,
        secret: &SecretKey,
        rng: &mut R,
    ) -> Self {
        tracing::trace!("generating signature");
        let nonce = Nonce::generate(rng);
        let commitment = Point::mul_base(nonce.k());

        let c = challenge(prefix_hash, public, &commitment);
        let r = Scalar::mul_sub(&c, &secret.reduced(), nonce.k());

        Self { c, r }
    }

    /// Verifies the signature against `prefix_hash` and `public`.
    pub fn check(&self, prefix_hash: &Hash, public: &PublicKey) -> bool {
        let commitment = public.point().vartime_double_mul_base(&self.c, &self.r);
        let expected = challenge(prefix_hash, public, &commitment);

        let valid: bool = expected.ct_eq(&self.c).into();
        if !valid {
            tracing::debug!("signature challenge mismatch");
        }
        valid
    }

    /// Decodes `c || r`; both halves must be canonical scalars.
    pub fn from_bytes(bytes: &[u8; SIGNATURE_BYTES]) -> Result<Self> {
        Self::from_slice(bytes)
    }

    /// Decodes a signature from a slice of exactly 64 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SIGNATURE_BYTES {
            return Err(Error::InvalidLength {
                expected: SIGNATURE_BYTES,
                actual: bytes.len(),
            });
        }

        let (c, r) = bytes.split_at(SCALAR_BYTES);
        let c = Scalar::from_slice(c)?;
        let r = Scalar::from_slice(r)?;
        Ok(Self { c, r })
    }

    /// Encodes the signature as `c || r`.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_BYTES] {
        let mut out = [0u8; SIGNATURE_BYTES];
        out[..SCALAR_BYTES].copy_from_slice(self.c.as_bytes());
        out[SCALAR_BYTES..].copy_from_slice(self.r.as_bytes());
        out
    }

    /// Returns the challenge `c`.
    pub fn c(&self) -> &Scalar {
        &self.c
    }

    /// Returns the response `r`.
    pub fn r(&self) -> &Scalar {
        &self.r
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", hex::encode(self.to_bytes()))
    }
}

/// `Hs(prefix || P || R)`.
fn challenge(prefix_hash: &Hash, public: &PublicKey, commitment: &Point) -> Scalar {
    let mut transcript = Transcript::new();
    transcript.append_hash(prefix_hash);
    transcript.append_point(public.as_bytes());
    transcript.append_point(&commitment.encode());
    transcript.challenge_scalar()
}
