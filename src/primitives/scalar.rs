//! Scalar field: integers modulo the prime group order `L = 2^252 + 27742317777372353535851937790883648493`.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use curve25519_dalek::scalar::Scalar as DalekScalar;
use rand_core::CryptoRngCore;
use serde::{Deserialize, Serialize};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use super::hash::fast_hash;
use crate::{Error, Result};

/// Number of bytes in a scalar encoding.
pub const SCALAR_BYTES: usize = 32;

/// Number of bytes consumed by wide reduction.
pub const WIDE_REDUCTION_BYTES: usize = 64;

/// Canonical scalar modulo the group order.
///
/// Values of this type are always fully reduced; non-canonical encodings are
/// rejected by [`Scalar::from_canonical_bytes`].
#[derive(Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Zeroize)]
pub struct Scalar(DalekScalar);

impl Scalar {
    /// The scalar `0`.
    pub const ZERO: Self = Self(DalekScalar::ZERO);

    /// The scalar `1`.
    pub const ONE: Self = Self(DalekScalar::ONE);

    /// Creates a new scalar from a curve25519_dalek Scalar.
    pub fn new(value: DalekScalar) -> Self {
        Self(value)
    }

    /// Returns a reference to the inner curve25519_dalek Scalar.
    pub fn inner(&self) -> &DalekScalar {
        &self.0
    }

    /// Returns `true` iff `bytes` encodes an integer strictly below `L`.
    pub fn check_canonical(bytes: &[u8; SCALAR_BYTES]) -> bool {
        DalekScalar::from_canonical_bytes(*bytes).is_some().into()
    }

    /// Decodes a canonical scalar.
    pub fn from_canonical_bytes(bytes: &[u8; SCALAR_BYTES]) -> Result<Self> {
        Option::<DalekScalar>::from(DalekScalar::from_canonical_bytes(*bytes))
            .map(Self)
            .ok_or(Error::NonCanonicalScalar)
    }

    /// Decodes a canonical scalar from a slice of exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; SCALAR_BYTES] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: SCALAR_BYTES,
            actual: bytes.len(),
        })?;
        Self::from_canonical_bytes(&arr)
    }

    /// Interprets 32 bytes as a 256-bit integer and reduces it mod `L`.
    pub fn from_bytes_mod_order(bytes: [u8; SCALAR_BYTES]) -> Self {
        Self(DalekScalar::from_bytes_mod_order(bytes))
    }

    /// Interprets 64 bytes as a 512-bit integer and reduces it mod `L`.
    pub fn reduce_wide(bytes: &[u8; WIDE_REDUCTION_BYTES]) -> Self {
        Self(DalekScalar::from_bytes_mod_order_wide(bytes))
    }

    /// Keccak-256 of `data`, reduced mod `L`.
    pub fn hash_to_scalar(data: &[u8]) -> Self {
        Self::from_bytes_mod_order(fast_hash(data))
    }

    /// Draws 64 bytes from `rng` and reduces them mod `L`.
    pub fn random<R: CryptoRngCore>(rng: &mut R) -> Self {
        let mut bytes = [0u8; WIDE_REDUCTION_BYTES];
        rng.fill_bytes(&mut bytes);
        let scalar = Self::reduce_wide(&bytes);
        bytes.zeroize();
        scalar
    }

    /// Computes `a * b + c`.
    pub fn mul_add(a: &Self, b: &Self, c: &Self) -> Self {
        Self(a.0 * b.0 + c.0)
    }

    /// Computes `c - a * b`.
    pub fn mul_sub(a: &Self, b: &Self, c: &Self) -> Self {
        Self(c.0 - a.0 * b.0)
    }

    /// Returns the canonical little-endian encoding.
    pub fn to_bytes(&self) -> [u8; SCALAR_BYTES] {
        self.0.to_bytes()
    }

    /// Returns a reference to the canonical little-endian encoding.
    pub fn as_bytes(&self) -> &[u8; SCALAR_BYTES] {
        self.0.as_bytes()
    }

    /// Returns `true` if this is the zero scalar.
    pub fn is_zero(&self) -> bool {
        self.ct_eq(&Self::ZERO).into()
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar({})", hex::encode(self.as_bytes()))
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Self(DalekScalar::from(value))
    }
}

impl Add for Scalar {
    type Output = Scalar;

    fn add(self, rhs: Scalar) -> Scalar {
        Scalar(self.0 + rhs.0)
    }
}

impl Sub for Scalar {
    type Output = Scalar;

    fn sub(self, rhs: Scalar) -> Scalar {
        Scalar(self.0 - rhs.0)
    }
}

impl Mul for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Scalar) -> Scalar {
        Scalar(self.0 * rhs.0)
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        Scalar(-self.0)
    }
}
