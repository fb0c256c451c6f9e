//! Arithmetic in GF(2^255 - 19) for the hash-to-point map.
//!
//! curve25519-dalek keeps its field element private, so the map evaluates its
//! formulas here in Montgomery form and hands the resulting `y` coordinate back
//! to dalek for decompression.

use core::ops::{Add, Mul, Sub};
use std::sync::OnceLock;

use crypto_bigint::modular::{MontyForm, MontyParams};
use crypto_bigint::{Encoding, NonZero, Odd, U256};

/// Field modulus `p = 2^255 - 19`.
const MODULUS: U256 =
    U256::from_be_hex("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed");

/// `p - 2`, the inversion exponent.
const INVERT_EXPONENT: U256 =
    U256::from_be_hex("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeb");

/// `(p - 5) / 8`.
const POW_P58_EXPONENT: U256 =
    U256::from_be_hex("0ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffd");

/// Montgomery parameters for `p`.
///
/// Uses `new_vartime` for setup, which is acceptable because the modulus is public.
fn params() -> MontyParams<{ U256::LIMBS }> {
    static PARAMS: OnceLock<MontyParams<{ U256::LIMBS }>> = OnceLock::new();
    *PARAMS.get_or_init(|| {
        let odd_modulus: Option<Odd<U256>> = Odd::new(MODULUS).into();
        let odd_modulus = odd_modulus.unwrap_or_else(|| unreachable!("2^255 - 19 is odd"));
        MontyParams::new_vartime(odd_modulus)
    })
}

/// Element of GF(2^255 - 19).
#[derive(Clone, Copy, Debug)]
pub struct FieldElement(MontyForm<{ U256::LIMBS }>);

impl FieldElement {
    /// Lifts a small integer into the field.
    pub fn from_u64(value: u64) -> Self {
        Self::from_uint(&U256::from_u64(value))
    }

    /// Interprets all 256 bits of `bytes` as a little-endian integer and reduces it mod `p`.
    pub fn from_bytes_wide(bytes: &[u8; 32]) -> Self {
        Self::from_uint(&U256::from_le_bytes(*bytes))
    }

    fn from_uint(value: &U256) -> Self {
        let non_zero_p: Option<NonZero<U256>> = NonZero::new(MODULUS).into();
        let non_zero_p = non_zero_p.unwrap_or_else(|| unreachable!("p is non-zero"));
        let reduced = value.rem(&non_zero_p);
        Self(MontyForm::new(&reduced, params()))
    }

    /// `0`.
    pub fn zero() -> Self {
        Self::from_u64(0)
    }

    /// `1`.
    pub fn one() -> Self {
        Self::from_u64(1)
    }

    /// Canonical little-endian encoding (always below `p`, so bit 255 is clear).
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.retrieve().to_le_bytes()
    }

    /// `true` iff the element is `0`.
    pub fn is_zero(&self) -> bool {
        self.0.retrieve() == U256::ZERO
    }

    /// `true` iff the canonical encoding is odd ("negative" in Ed25519 terms).
    pub fn is_negative(&self) -> bool {
        self.to_bytes()[0] & 1 == 1
    }

    /// `self^2`.
    pub fn square(&self) -> Self {
        Self(self.0 * self.0)
    }

    /// `2 * self`.
    pub fn double(&self) -> Self {
        Self(self.0 + self.0)
    }

    /// `-self`.
    pub fn negate(&self) -> Self {
        Self::zero() - *self
    }

    /// Multiplicative inverse via Fermat; `0` maps to `0`.
    pub fn invert(&self) -> Self {
        Self(self.0.pow(&INVERT_EXPONENT))
    }

    /// `(u / v)^((p + 3) / 8)` computed without an inversion as `u * v^3 * (u * v^7)^((p - 5) / 8)`.
    pub fn div_pow_p38(u: &Self, v: &Self) -> Self {
        let v3 = v.square() * *v;
        let v7 = v3.square() * *v;
        let uv7 = *u * v7;
        *u * v3 * Self(uv7.0.pow(&POW_P58_EXPONENT))
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.0.retrieve() == other.0.retrieve()
    }
}

impl Eq for FieldElement {}

impl Add for FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: FieldElement) -> FieldElement {
        FieldElement(self.0 + rhs.0)
    }
}

impl Sub for FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: FieldElement) -> FieldElement {
        FieldElement(self.0 - rhs.0)
    }
}

impl Mul for FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: FieldElement) -> FieldElement {
        FieldElement(self.0 * rhs.0)
    }
}
