//! Protocol layer: keys, stealth-address derivation, key images and signatures.

/// Key derivation and one-time output keys.
pub mod derivation;
/// Key images for double-spend detection.
pub mod key_image;
/// Secret, public and paired keys.
pub mod keys;
/// Linkable ring signatures.
pub mod ring;
/// Single-signer Schnorr signatures.
pub mod signature;

pub use derivation::{derivation_to_scalar, KeyDerivation};
pub use key_image::KeyImage;
pub use keys::{KeyPair, PublicKey, SecretKey};
pub use ring::RingSignature;
pub use signature::Signature;
