//! Byte-buffer boundary for ledger code that predates the typed API.
//!
//! Every function takes and returns fixed-size buffers. Construction
//! operations return all-zero bytes when an input is rejected, and check
//! operations return `false`. The reason for a rejection is only visible in
//! `tracing` output; use the typed API when it matters.

use rand_core::CryptoRngCore;

use crate::primitives::point::POINT_BYTES;
use crate::primitives::scalar::SCALAR_BYTES;
use crate::primitives::{Hash, Point, Scalar};
use crate::protocol::signature::SIGNATURE_BYTES;
use crate::protocol::{
    KeyDerivation, KeyImage, KeyPair, PublicKey, RingSignature, SecretKey, Signature,
};
use crate::Result;

fn or_zero<const N: usize>(value: Result<[u8; N]>) -> [u8; N] {
    value.unwrap_or([0u8; N])
}

/// `true` iff `bytes` encodes a scalar below the group order.
pub fn check_scalar(bytes: &[u8; SCALAR_BYTES]) -> bool {
    Scalar::check_canonical(bytes)
}

/// Uniform scalar drawn from `rng`.
pub fn random_scalar<R: CryptoRngCore>(rng: &mut R) -> [u8; SCALAR_BYTES] {
    Scalar::random(rng).to_bytes()
}

/// Keccak-256 of `data` reduced mod the group order.
pub fn hash_to_scalar(data: &[u8]) -> [u8; SCALAR_BYTES] {
    Scalar::hash_to_scalar(data).to_bytes()
}

/// Fresh `(public, secret)` pair.
pub fn generate_keys<R: CryptoRngCore>(rng: &mut R) -> ([u8; POINT_BYTES], [u8; SCALAR_BYTES]) {
    let keys = KeyPair::generate(rng);
    (*keys.public().as_bytes(), *keys.secret().as_bytes())
}

/// `true` iff `public` decodes to a curve point.
pub fn check_key(public: &[u8; POINT_BYTES]) -> bool {
    PublicKey::check(public)
}

/// `secret * G`, or zeros for a non-canonical secret.
pub fn secret_key_to_public_key(secret: &[u8; SCALAR_BYTES]) -> [u8; POINT_BYTES] {
    or_zero(
        SecretKey::from_bytes(*secret)
            .to_public()
            .map(|public| *public.as_bytes()),
    )
}

/// `8 * secret * public`, or zeros when `public` is not a point.
pub fn generate_key_derivation(
    public: &[u8; POINT_BYTES],
    secret: &[u8; SCALAR_BYTES],
) -> [u8; POINT_BYTES] {
    or_zero(PublicKey::from_bytes(public).map(|public| {
        *KeyDerivation::generate(&public, &SecretKey::from_bytes(*secret)).as_bytes()
    }))
}

/// One-time output key, or zeros when `base` is not a point.
pub fn derive_public_key(
    derivation: &[u8; POINT_BYTES],
    index: u64,
    base: &[u8; POINT_BYTES],
) -> [u8; POINT_BYTES] {
    let derivation = KeyDerivation::from_bytes(*derivation);
    or_zero(
        PublicKey::from_bytes(base)
            .map(|base| *derivation.derive_public_key(index, &base).as_bytes()),
    )
}

/// One-time output secret.
pub fn derive_secret_key(
    derivation: &[u8; POINT_BYTES],
    index: u64,
    base: &[u8; SCALAR_BYTES],
) -> [u8; SCALAR_BYTES] {
    let derived =
        KeyDerivation::from_bytes(*derivation).derive_secret_key(index, &SecretKey::from_bytes(*base));
    *derived.as_bytes()
}

/// Base key behind a one-time output key, or zeros when `output` is not a point.
pub fn underive_public_key(
    derivation: &[u8; POINT_BYTES],
    index: u64,
    output: &[u8; POINT_BYTES],
) -> [u8; POINT_BYTES] {
    let derivation = KeyDerivation::from_bytes(*derivation);
    or_zero(
        PublicKey::from_bytes(output)
            .map(|output| *derivation.underive_public_key(index, &output).as_bytes()),
    )
}

/// Signature `c || r`, or zeros when `public` is not a point.
pub fn generate_signature<R: CryptoRngCore>(
    prefix_hash: &[u8; 32],
    public: &[u8; POINT_BYTES],
    secret: &[u8; SCALAR_BYTES],
    rng: &mut R,
) -> [u8; SIGNATURE_BYTES] {
    let prefix = Hash::from(*prefix_hash);
    or_zero(PublicKey::from_bytes(public).map(|public| {
        Signature::generate(&prefix, &public, &SecretKey::from_bytes(*secret), rng).to_bytes()
    }))
}

/// `true` iff `signature` is valid for `prefix_hash` under `public`.
pub fn check_signature(
    prefix_hash: &[u8; 32],
    public: &[u8; POINT_BYTES],
    signature: &[u8; SIGNATURE_BYTES],
) -> bool {
    let prefix = Hash::from(*prefix_hash);
    match (PublicKey::from_bytes(public), Signature::from_bytes(signature)) {
        (Ok(public), Ok(signature)) => signature.check(&prefix, &public),
        _ => false,
    }
}

/// The raw map `map_to_curve(bytes)`, without cofactor clearing.
///
/// The result may have a small-order component; the typed
/// [`Point::hash_to_point`] multiplies by 8.
pub fn hash_to_point(bytes: &[u8; 32]) -> [u8; POINT_BYTES] {
    Point::map_to_curve(bytes).encode()
}

/// `8 * map_to_curve(keccak(key))`.
pub fn hash_to_ec(key: &[u8; POINT_BYTES]) -> [u8; POINT_BYTES] {
    Point::hash_to_ec(key).encode()
}

/// `secret * hash_to_ec(public)`, or zeros when `public` is not a point.
pub fn generate_key_image(
    public: &[u8; POINT_BYTES],
    secret: &[u8; SCALAR_BYTES],
) -> [u8; POINT_BYTES] {
    or_zero(PublicKey::from_bytes(public).map(|public| {
        *KeyImage::generate(&public, &SecretKey::from_bytes(*secret)).as_bytes()
    }))
}

/// Ring signature of `64 * ring.len()` bytes, all zero when any input is
/// rejected.
pub fn generate_ring_signature<R: CryptoRngCore>(
    prefix_hash: &[u8; 32],
    image: &[u8; POINT_BYTES],
    ring: &[[u8; POINT_BYTES]],
    secret: &[u8; SCALAR_BYTES],
    index: usize,
    rng: &mut R,
) -> Vec<u8> {
    let prefix = Hash::from(*prefix_hash);
    let signed = decode_ring(image, ring).and_then(|(image, ring)| {
        RingSignature::generate(
            &prefix,
            &image,
            &ring,
            &SecretKey::from_bytes(*secret),
            index,
            rng,
        )
    });

    match signed {
        Ok(sig) => sig.to_bytes(),
        Err(_) => vec![0u8; ring.len() * SIGNATURE_BYTES],
    }
}

/// `true` iff `signature` is a valid ring signature over `ring`.
pub fn check_ring_signature(
    prefix_hash: &[u8; 32],
    image: &[u8; POINT_BYTES],
    ring: &[[u8; POINT_BYTES]],
    signature: &[u8],
) -> bool {
    let prefix = Hash::from(*prefix_hash);
    let Ok((image, ring)) = decode_ring(image, ring) else {
        return false;
    };
    match RingSignature::from_bytes(signature, ring.len()) {
        Ok(sig) => sig.check(&prefix, &image, &ring),
        Err(_) => false,
    }
}

fn decode_ring(
    image: &[u8; POINT_BYTES],
    ring: &[[u8; POINT_BYTES]],
) -> Result<(KeyImage, Vec<PublicKey>)> {
    let image = KeyImage::from_bytes(image)?;
    let ring = ring
        .iter()
        .map(PublicKey::from_bytes)
        .collect::<Result<Vec<_>>>()?;
    Ok((image, ring))
}
