//! Key types: secret scalars, public points and key pairs.

use core::fmt;

use rand_core::CryptoRngCore;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::primitives::point::POINT_BYTES;
use crate::primitives::scalar::SCALAR_BYTES;
use crate::primitives::{Point, Scalar};
use crate::{Error, Result};

/// Secret key as supplied by the caller.
///
/// The bytes are kept verbatim so that callers holding a non-canonical value
/// can be told so by [`SecretKey::to_public`]; operations that only need the
/// value modulo the group order reduce it.
///
/// # Security
///
/// - The key is automatically zeroized when dropped
/// - `Debug` output never contains the key bytes
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey([u8; SCALAR_BYTES]);

impl SecretKey {
    /// Wraps raw secret key bytes.
    pub fn from_bytes(bytes: [u8; SCALAR_BYTES]) -> Self {
        Self(bytes)
    }

    /// Wraps a canonical scalar.
    pub fn from_scalar(scalar: &Scalar) -> Self {
        Self(scalar.to_bytes())
    }

    /// Parses a secret key from a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self> {
        let mut bytes = [0u8; SCALAR_BYTES];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| Error::InvalidLength {
            expected: SCALAR_BYTES,
            actual: s.len() / 2,
        })?;
        Ok(Self(bytes))
    }

    /// Draws a fresh secret: 64 random bytes reduced mod the group order.
    pub fn generate<R: CryptoRngCore>(rng: &mut R) -> Self {
        Self::from_scalar(&Scalar::random(rng))
    }

    /// Returns the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; SCALAR_BYTES] {
        &self.0
    }

    /// Returns the key as a canonical scalar, rejecting values at or above the group order.
    pub fn to_scalar(&self) -> Result<Scalar> {
        Scalar::from_canonical_bytes(&self.0)
    }

    /// Returns the key reduced modulo the group order.
    pub(crate) fn reduced(&self) -> Scalar {
        Scalar::from_bytes_mod_order(self.0)
    }

    /// Computes `secret * G`, rejecting non-canonical secrets.
    pub fn to_public(&self) -> Result<PublicKey> {
        let scalar = self.to_scalar().inspect_err(|_| {
            tracing::debug!("rejecting non-canonical secret key");
        })?;
        Ok(PublicKey::from_point(Point::mul_base(&scalar)))
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

/// Public key: a valid compressed curve point.
///
/// The encoding the key was decoded from is retained verbatim, since
/// signature transcripts hash the caller's bytes rather than a re-encoding.
#[derive(Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[u8; 32]", into = "[u8; 32]")]
pub struct PublicKey {
    bytes: [u8; POINT_BYTES],
    point: Point,
}

impl PublicKey {
    /// Decodes and validates a public key.
    pub fn from_bytes(bytes: &[u8; POINT_BYTES]) -> Result<Self> {
        let point = Point::decode(bytes).inspect_err(|_| {
            tracing::debug!("rejecting public key that is not a curve point");
        })?;
        Ok(Self {
            bytes: *bytes,
            point,
        })
    }

    /// Decodes a public key from a slice of exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; POINT_BYTES] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: POINT_BYTES,
            actual: bytes.len(),
        })?;
        Self::from_bytes(&arr)
    }

    /// Parses a public key from a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self> {
        let mut bytes = [0u8; POINT_BYTES];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| Error::InvalidLength {
            expected: POINT_BYTES,
            actual: s.len() / 2,
        })?;
        Self::from_bytes(&bytes)
    }

    /// Wraps a point, encoding it canonically.
    pub fn from_point(point: Point) -> Self {
        Self {
            bytes: point.encode(),
            point,
        }
    }

    /// Returns `true` iff `bytes` is a valid public key.
    pub fn check(bytes: &[u8; POINT_BYTES]) -> bool {
        Point::is_valid(bytes)
    }

    /// Returns the key encoding.
    pub fn as_bytes(&self) -> &[u8; POINT_BYTES] {
        &self.bytes
    }

    /// Returns the decoded point.
    pub fn point(&self) -> &Point {
        &self.point
    }
}

impl TryFrom<[u8; POINT_BYTES]> for PublicKey {
    type Error = Error;

    fn try_from(bytes: [u8; POINT_BYTES]) -> Result<Self> {
        Self::from_bytes(&bytes)
    }
}

impl From<PublicKey> for [u8; POINT_BYTES] {
    fn from(key: PublicKey) -> Self {
        key.bytes
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", hex::encode(self.bytes))
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.bytes))
    }
}

/// A secret key together with its public key `secret * G`.
#[derive(Clone, Debug)]
pub struct KeyPair {
    secret: SecretKey,
    public: PublicKey,
}

impl KeyPair {
    /// Generates a fresh key pair.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cryptonote_crypto::{KeyPair, PublicKey, SecureRng};
    ///
    /// let mut rng = SecureRng::new();
    /// let keys = KeyPair::generate(&mut rng);
    /// assert!(PublicKey::check(keys.public().as_bytes()));
    /// ```
    pub fn generate<R: CryptoRngCore>(rng: &mut R) -> Self {
        let scalar = Scalar::random(rng);
        Self {
            secret: SecretKey::from_scalar(&scalar),
            public: PublicKey::from_point(Point::mul_base(&scalar)),
        }
    }

    /// Builds the key pair for an existing secret.
    pub fn from_secret(secret: SecretKey) -> Result<Self> {
        let public = secret.to_public()?;
        Ok(Self { secret, public })
    }

    /// Returns the secret key.
    pub fn secret(&self) -> &SecretKey {
        &self.secret
    }

    /// Returns the public key.
    pub fn public(&self) -> &PublicKey {
        &self.public
    }
}
