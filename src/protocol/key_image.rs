//! Key images: `I = x * Hp(P)`, the linkability tag of a spent output.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::keys::{PublicKey, SecretKey};
use crate::primitives::point::POINT_BYTES;
use crate::primitives::Point;
use crate::{Error, Result};

/// Key image of a (secret, public) pair.
///
/// Deterministic in its inputs: signing twice with the same output key always
/// exposes the same image, which is how double spends are detected.
#[derive(Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[u8; 32]", into = "[u8; 32]")]
pub struct KeyImage {
    bytes: [u8; POINT_BYTES],
    point: Point,
}

impl KeyImage {
    /// Computes `secret * hash_to_ec(public)`.
    pub fn generate(public: &PublicKey, secret: &SecretKey) -> Self {
        let point = Point::hash_to_ec(public.as_bytes()).scalar_mul(&secret.reduced());
        Self {
            bytes: point.encode(),
            point,
        }
    }

    /// Decodes a key image; it must be a curve point.
    pub fn from_bytes(bytes: &[u8; POINT_BYTES]) -> Result<Self> {
        let point = Point::decode(bytes).inspect_err(|_| {
            tracing::debug!("rejecting key image that is not a curve point");
        })?;
        Ok(Self {
            bytes: *bytes,
            point,
        })
    }

    /// Parses a key image from a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self> {
        let mut bytes = [0u8; POINT_BYTES];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| Error::InvalidLength {
            expected: POINT_BYTES,
            actual: s.len() / 2,
        })?;
        Self::from_bytes(&bytes)
    }

    /// Returns the image encoding.
    pub fn as_bytes(&self) -> &[u8; POINT_BYTES] {
        &self.bytes
    }

    /// Returns the decoded point.
    pub fn point(&self) -> &Point {
        &self.point
    }
}

impl TryFrom<[u8; POINT_BYTES]> for KeyImage {
    type Error = Error;

    fn try_from(bytes: [u8; POINT_BYTES]) -> Result<Self> {
        Self::from_bytes(&bytes)
    }
}

impl From<KeyImage> for [u8; POINT_BYTES] {
    fn from(image: KeyImage) -> Self {
        image.bytes
    }
}

impl fmt::Debug for KeyImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyImage({})", hex::encode(self.bytes))
    }
}

impl fmt::Display for KeyImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::SecureRng;
    use crate::protocol::keys::KeyPair;

    #[test]
    fn key_image_vector() {
        let public = PublicKey::from_hex(
            "425a8512cee515f60247fdd202abd619b6164ad723b6dc1deabde4a7cf141a90",
        )
        .unwrap();
        let secret = SecretKey::from_hex(
            "9c0257114eb9399a2985f8e75dad7600c5d89fe3824ffa99ec1c3eb8bf3b0501",
        )
        .unwrap();

        assert_eq!(
            KeyImage::generate(&public, &secret).to_string(),
            "f3c3f60f4e0cf4c5bf6a93fdc6401d81ee7ff2696ba743a4ddcc5bb9ad1f3d82"
        );
    }

    #[test]
    fn key_image_is_deterministic_and_torsion_free() {
        let mut rng = SecureRng::new();
        let keys = KeyPair::generate(&mut rng);

        let first = KeyImage::generate(keys.public(), keys.secret());
        let second = KeyImage::generate(keys.public(), keys.secret());
        assert_eq!(first, second);
        assert!(first.point().is_torsion_free());
        assert_eq!(KeyImage::from_bytes(first.as_bytes()).unwrap(), first);
    }

    #[test]
    fn different_keys_have_different_images() {
        let mut rng = SecureRng::new();
        let a = KeyPair::generate(&mut rng);
        let b = KeyPair::generate(&mut rng);
        assert_ne!(
            KeyImage::generate(a.public(), a.secret()),
            KeyImage::generate(b.public(), b.secret())
        );
    }

    #[test]
    fn rejects_invalid_encoding() {
        let mut bytes = [0u8; 32];
        bytes[0] = 2;
        assert_eq!(KeyImage::from_bytes(&bytes), Err(Error::InvalidPoint));
    }
}
