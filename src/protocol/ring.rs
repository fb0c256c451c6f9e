//! Linkable ring signatures over a cyclic challenge chain.
//!
//! For a ring `P_0 .. P_{n-1}`, real index `j`, secret `x` and key image
//! `I = x * Hp(P_j)`, every member `i` contributes
//!
//! ```text
//! L_i = r_i * G + c_i * P_i
//! R_i = r_i * Hp(P_i) + c_i * I
//! c_{i+1} = Hs(prefix || I || L_i || R_i)
//! ```
//!
//! The signer opens the chain at `j` with a nonce `k` (`L_j = k * G`,
//! `R_j = k * Hp(P_j)`), walks the decoys with random responses and closes it
//! with `r_j = k - c_j * x`. The encoding stores every `(c_i, r_i)` pair.

use core::fmt;

use rand_core::CryptoRngCore;
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

use super::key_image::KeyImage;
use super::keys::{PublicKey, SecretKey};
use super::signature::{Nonce, Signature, SIGNATURE_BYTES};
use crate::config::RingConfig;
use crate::primitives::{Hash, Point, Scalar, Transcript};
use crate::{Error, Result};

/// Ring signature: one `(c_i, r_i)` pair per ring member, in ring order.
#[derive(Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RingSignature(Vec<Signature>);

impl RingSignature {
    /// Signs `prefix_hash` on behalf of `ring[index]` with the default
    /// [`RingConfig`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cryptonote_crypto::{Hash, KeyImage, KeyPair, RingSignature, SecureRng};
    ///
    /// let mut rng = SecureRng::new();
    /// let members: Vec<KeyPair> = (0..4).map(|_| KeyPair::generate(&mut rng)).collect();
    /// let ring: Vec<_> = members.iter().map(|k| *k.public()).collect();
    /// let signer = &members[2];
    /// let image = KeyImage::generate(signer.public(), signer.secret());
    /// let prefix = Hash::digest(b"transaction prefix");
    ///
    /// let sig = RingSignature::generate(&prefix, &image, &ring, signer.secret(), 2, &mut rng)?;
    /// assert!(sig.check(&prefix, &image, &ring));
    /// # Ok::<(), cryptonote_crypto::Error>(())
    /// ```
    pub fn generate<R: CryptoRngCore>(
        prefix_hash: &Hash,
        image: &KeyImage,
        ring: &[PublicKey],
        secret: &SecretKey,
        index: usize,
        rng: &mut R,
    ) -> Result<Self> {
        Self::generate_with_config(
            prefix_hash,
            image,
            ring,
            secret,
            index,
            rng,
            &RingConfig::default(),
        )
    }

    /// Signs `prefix_hash` on behalf of `ring[index]`.
    ///
    /// Fails with [`Error::RingSizeMismatch`] when the ring is empty or larger
    /// than `config.max_ring_size`, and with [`Error::SignerIndexOutOfRange`]
    /// when `index` does not address a member. Neither `image` nor
    /// `ring[index]` is checked against `secret`; a mismatch produces a
    /// signature that does not verify.
    pub fn generate_with_config<R: CryptoRngCore>(
        prefix_hash: &Hash,
        image: &KeyImage,
        ring: &[PublicKey],
        secret: &SecretKey,
        index: usize,
        rng: &mut R,
        config: &RingConfig,
    ) -> Result<Self> {
        let n = ring.len();
        config.check_ring_size(n)?;
        if index >= n {
            tracing::debug!(index, ring_size = n, "signer index out of range");
            return Err(Error::SignerIndexOutOfRange {
                index,
                ring_size: n,
            });
        }
        tracing::trace!(ring_size = n, "generating ring signature");

        let hashed: Vec<Point> = ring.iter().map(member_hash_point).collect();
        let mut c = vec![Scalar::ZERO; n];
        let mut r = vec![Scalar::ZERO; n];

        let nonce = Nonce::generate(rng);
        let l = Point::mul_base(nonce.k());
        let rr = hashed[index].scalar_mul(nonce.k());
        c[(index + 1) % n] = chain_challenge(prefix_hash, image, &l, &rr);

        for step in 1..n {
            let i = (index + step) % n;
            r[i] = Scalar::random(rng);
            let (l, rr) = chain_link(&ring[i], &hashed[i], image, &c[i], &r[i]);
            c[(i + 1) % n] = chain_challenge(prefix_hash, image, &l, &rr);
        }

        r[index] = Scalar::mul_sub(&c[index], &secret.reduced(), nonce.k());

        Ok(Self(
            c.into_iter()
                .zip(r)
                .map(|(c, r)| Signature::new(c, r))
                .collect(),
        ))
    }

    /// Verifies the signature with the default [`RingConfig`].
    ///
    /// Returns `false` for a key image with a small-order component, even
    /// one that decodes to a curve point; see [`RingSignature::check_with_config`].
    pub fn check(&self, prefix_hash: &Hash, image: &KeyImage, ring: &[PublicKey]) -> bool {
        self.check_with_config(prefix_hash, image, ring, &RingConfig::default())
    }

    /// Verifies the signature against `prefix_hash`, `image` and `ring`.
    ///
    /// Walks the chain from the published `c_0`. Every published `c_i` must
    /// match the value derived from its predecessor, the walk must return to
    /// `c_0`, and the key image must lie in the prime-order subgroup.
    pub fn check_with_config(
        &self,
        prefix_hash: &Hash,
        image: &KeyImage,
        ring: &[PublicKey],
        config: &RingConfig,
    ) -> bool {
        let n = ring.len();
        if config.check_ring_size(n).is_err() {
            return false;
        }
        if self.0.len() != n {
            tracing::debug!(
                ring_size = n,
                members = self.0.len(),
                "ring signature member count mismatch"
            );
            return false;
        }
        if !image.point().is_torsion_free() {
            tracing::debug!("rejecting key image with a small-order component");
            return false;
        }

        let first = *self.0[0].c();
        let mut expected = first;
        for (i, (member, pair)) in ring.iter().zip(&self.0).enumerate() {
            if i > 0 && !bool::from(expected.ct_eq(pair.c())) {
                tracing::debug!(member = i, "ring signature challenge mismatch");
                return false;
            }
            let hashed = member_hash_point(member);
            let (l, rr) = chain_link(member, &hashed, image, pair.c(), pair.r());
            expected = chain_challenge(prefix_hash, image, &l, &rr);
        }

        let closed: bool = expected.ct_eq(&first).into();
        if !closed {
            tracing::debug!("ring signature chain does not close");
        }
        closed
    }

    /// Decodes `ring_size` consecutive `c || r` pairs.
    pub fn from_bytes(bytes: &[u8], ring_size: usize) -> Result<Self> {
        let expected = ring_size
            .checked_mul(SIGNATURE_BYTES)
            .ok_or(Error::InvalidLength {
                expected: usize::MAX,
                actual: bytes.len(),
            })?;
        if ring_size == 0 || bytes.len() != expected {
            return Err(Error::InvalidLength {
                expected,
                actual: bytes.len(),
            });
        }

        bytes
            .chunks_exact(SIGNATURE_BYTES)
            .map(Signature::from_slice)
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// Encodes the pairs in ring order, `64 * n` bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.iter().flat_map(|sig| sig.to_bytes()).collect()
    }

    /// Returns the `(c_i, r_i)` pairs.
    pub fn members(&self) -> &[Signature] {
        &self.0
    }

    /// Number of ring members covered.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` iff the signature covers no members.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Signature>> for RingSignature {
    fn from(members: Vec<Signature>) -> Self {
        Self(members)
    }
}

impl fmt::Debug for RingSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RingSignature").field(&self.0).finish()
    }
}

/// `Hp(P) = hash_to_ec(P)`.
fn member_hash_point(member: &PublicKey) -> Point {
    Point::hash_to_ec(member.as_bytes())
}

/// `(r * G + c * P, r * Hp(P) + c * I)`. Inputs are public.
fn chain_link(
    member: &PublicKey,
    hashed: &Point,
    image: &KeyImage,
    c: &Scalar,
    r: &Scalar,
) -> (Point, Point) {
    let l = member.point().vartime_double_mul_base(c, r);
    let rr = Point::vartime_double_mul(r, hashed, c, image.point());
    (l, rr)
}

/// `Hs(prefix || I || L || R)`.
fn chain_challenge(prefix_hash: &Hash, image: &KeyImage, l: &Point, r: &Point) -> Scalar {
    let mut transcript = Transcript::new();
    transcript.append_hash(prefix_hash);
    transcript.append_point(image.as_bytes());
    transcript.append_point(&l.encode());
    transcript.append_point(&r.encode());
    transcript.challenge_scalar()
}
