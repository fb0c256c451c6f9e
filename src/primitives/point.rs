//! Point group: compressed Ed25519 points, group operations and the hash-to-point map.

use core::fmt;
use core::ops::{Add, Sub};

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::traits::{Identity, IsIdentity, VartimeMultiscalarMul};
use serde::{Deserialize, Serialize};

use super::field::FieldElement;
use super::hash::fast_hash;
use super::scalar::Scalar;
use crate::{Error, Result};

/// Number of bytes in a compressed point.
pub const POINT_BYTES: usize = 32;

/// Montgomery curve coefficient `A` of Curve25519.
const MONTGOMERY_A: u64 = 486662;

/// A point on the Ed25519 curve (not necessarily in the prime-order subgroup).
#[derive(Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Point(EdwardsPoint);

impl Point {
    /// Creates a new point from a curve25519_dalek EdwardsPoint.
    pub fn new(value: EdwardsPoint) -> Self {
        Self(value)
    }

    /// Returns a reference to the inner EdwardsPoint.
    pub fn inner(&self) -> &EdwardsPoint {
        &self.0
    }

    /// The neutral element.
    pub fn identity() -> Self {
        Self(EdwardsPoint::identity())
    }

    /// Decompresses 32 bytes into a curve point.
    ///
    /// Bits 0..254 carry `y` (values at or above `p` are reduced), bit 255 the
    /// sign of `x`. Fails when no `x` satisfies the curve equation, or when
    /// `x = 0` is paired with a set sign bit.
    pub fn decode(bytes: &[u8; POINT_BYTES]) -> Result<Self> {
        let point = CompressedEdwardsY(*bytes)
            .decompress()
            .ok_or(Error::InvalidPoint)?;

        let sign_requested = bytes[31] >> 7;
        let sign_recovered = point.compress().as_bytes()[31] >> 7;
        if sign_requested != sign_recovered {
            return Err(Error::InvalidPoint);
        }

        Ok(Self(point))
    }

    /// Decodes a point from a slice of exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; POINT_BYTES] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: POINT_BYTES,
            actual: bytes.len(),
        })?;
        Self::decode(&arr)
    }

    /// Returns `true` iff `bytes` decodes to a curve point.
    pub fn is_valid(bytes: &[u8; POINT_BYTES]) -> bool {
        Self::decode(bytes).is_ok()
    }

    /// Canonical compressed encoding.
    pub fn encode(&self) -> [u8; POINT_BYTES] {
        self.0.compress().to_bytes()
    }

    /// `s * G` for the Ed25519 base point `G`.
    pub fn mul_base(s: &Scalar) -> Self {
        Self(EdwardsPoint::mul_base(s.inner()))
    }

    /// `s * self`, constant time in `s`.
    pub fn scalar_mul(&self, s: &Scalar) -> Self {
        Self(self.0 * s.inner())
    }

    /// `a * self + b * G`, variable time. Only for public scalars.
    pub fn vartime_double_mul_base(&self, a: &Scalar, b: &Scalar) -> Self {
        Self(EdwardsPoint::vartime_double_scalar_mul_basepoint(
            a.inner(),
            &self.0,
            b.inner(),
        ))
    }

    /// `a * p + b * q`, variable time. Only for public scalars.
    pub fn vartime_double_mul(a: &Scalar, p: &Point, b: &Scalar, q: &Point) -> Self {
        Self(EdwardsPoint::vartime_multiscalar_mul(
            [a.inner(), b.inner()],
            [&p.0, &q.0],
        ))
    }

    /// Multiplies by the cofactor 8.
    pub fn mul_by_cofactor(&self) -> Self {
        Self(self.0.mul_by_cofactor())
    }

    /// `true` iff the point lies in the prime-order subgroup.
    pub fn is_torsion_free(&self) -> bool {
        self.0.is_torsion_free()
    }

    /// `true` iff this is the neutral element.
    pub fn is_identity(&self) -> bool {
        self.0.is_identity()
    }

    /// Deterministic map from 32 bytes onto the curve.
    ///
    /// The output may carry a small-order component; see [`Point::hash_to_point`].
    /// Runs in variable time, so it must only see public data.
    pub fn map_to_curve(bytes: &[u8; 32]) -> Self {
        let a = FieldElement::from_u64(MONTGOMERY_A);
        let one = FieldElement::one();

        let u = FieldElement::from_bytes_wide(bytes);
        let v = u.square().double();
        let w = v + one;
        let x = w.square() - a.square() * v;

        let r = FieldElement::div_pow_p38(&w, &x);
        let t = r.square() * x;

        // Neither w = t nor w = -t: w / x is not a square and the point
        // comes from the second branch of the map.
        let negative = !(w - t).is_zero() && !(w + t).is_zero();

        let z = if negative {
            a.negate()
        } else {
            a.negate() * v
        };

        let y = (z - w) * (z + w).invert();
        let mut encoded = y.to_bytes();
        encoded[31] |= u8::from(negative) << 7;

        let point = CompressedEdwardsY(encoded)
            .decompress()
            .unwrap_or_else(|| unreachable!("map output lies on the curve"));
        Self(point)
    }

    /// `8 * map_to_curve(bytes)`: lands in the prime-order subgroup.
    pub fn hash_to_point(bytes: &[u8; 32]) -> Self {
        Self::map_to_curve(bytes).mul_by_cofactor()
    }

    /// `hash_to_point(Keccak256(data))`, the map used for key images.
    pub fn hash_to_ec(data: &[u8]) -> Self {
        Self::hash_to_point(&fast_hash(data))
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({})", hex::encode(self.encode()))
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point(self.0 + rhs.0)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point(self.0 - rhs.0)
    }
}
