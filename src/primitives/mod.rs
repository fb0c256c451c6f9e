//! Core cryptographic primitives.
//!
//! This module contains the mathematical building blocks shared by the protocol layer:
//! - **scalar**: arithmetic modulo the group order and hashing into it
//! - **field**: GF(2^255 - 19) arithmetic backing the hash-to-point map
//! - **point**: compressed Ed25519 points, group operations, hash-to-point
//! - **hash**: Keccak-256 fast hash
//! - **varint**: output index encoding
//! - **transcript**: challenge hashing for the signature schemes
//! - **rng**: secure and deterministic generators

/// GF(2^255 - 19) arithmetic.
pub mod field;
/// Keccak-256 fast hash.
pub mod hash;
/// Ed25519 point group.
pub mod point;
/// Random number generators.
pub mod rng;
/// Scalar field modulo the group order.
pub mod scalar;
/// Challenge transcript.
pub mod transcript;
/// Varint encoding.
pub mod varint;

pub use hash::{fast_hash, Hash};
pub use point::Point;
#[cfg(any(test, feature = "deterministic-rng"))]
pub use rng::DeterministicRng;
pub use rng::SecureRng;
pub use scalar::Scalar;
pub use transcript::Transcript;
