//! Ed25519 primitives for CryptoNote-style ledgers.
//!
//! The crate is layered bottom-up:
//! - [`primitives`]: scalars, points, the Keccak fast hash, hash-to-point and
//!   random generators
//! - [`protocol`]: keys, stealth-address derivation, key images, Schnorr
//!   signatures and linkable ring signatures
//! - [`compat`]: the same operations over raw byte buffers with all-zero /
//!   `false` results for rejected input
//!
//! # Examples
//!
//! ```rust
//! use cryptonote_crypto::{Hash, KeyDerivation, KeyImage, KeyPair, RingSignature, SecureRng};
//!
//! let mut rng = SecureRng::new();
//! let recipient = KeyPair::generate(&mut rng);
//! let tx = KeyPair::generate(&mut rng);
//!
//! // Sender side: one-time key for output 0.
//! let sender_view = KeyDerivation::generate(recipient.public(), tx.secret());
//! let output = sender_view.derive_public_key(0, recipient.public());
//!
//! // Recipient side: the same derivation yields the spend secret.
//! let recipient_view = KeyDerivation::generate(tx.public(), recipient.secret());
//! let output_secret = recipient_view.derive_secret_key(0, recipient.secret());
//! assert_eq!(output_secret.to_public()?, output);
//!
//! // Spend it inside a ring of decoys.
//! let decoy = KeyPair::generate(&mut rng);
//! let ring = [*decoy.public(), output];
//! let image = KeyImage::generate(&output, &output_secret);
//! let prefix = Hash::digest(b"transaction prefix");
//! let sig = RingSignature::generate(&prefix, &image, &ring, &output_secret, 1, &mut rng)?;
//! assert!(sig.check(&prefix, &image, &ring));
//! # Ok::<(), cryptonote_crypto::Error>(())
//! ```

/// Byte-buffer interface with sentinel results.
pub mod compat;
/// Ring signature limits.
pub mod config;
/// Error types.
pub mod error;
/// Core cryptographic primitives.
pub mod primitives;
/// Keys, derivations, key images and signatures.
pub mod protocol;

pub use config::RingConfig;
pub use error::Error;
#[cfg(any(test, feature = "deterministic-rng"))]
pub use primitives::DeterministicRng;
pub use primitives::{fast_hash, Hash, Point, Scalar, SecureRng, Transcript};
pub use protocol::{
    derivation_to_scalar, KeyDerivation, KeyImage, KeyPair, PublicKey, RingSignature, SecretKey,
    Signature,
};

/// Result type for crate operations.
pub type Result<T> = core::result::Result<T, Error>;
