mod common;

use cryptonote_crypto::{
    compat, Error, Hash, KeyImage, KeyPair, Point, PublicKey, RingSignature, SecretKey, SecureRng,
    Signature,
};

const ORDER: &str = "edd3f55c1a631258d69cf7a2def9de1400000000000000000000000000000010";

fn bytes32(s: &str) -> [u8; 32] {
    hex::decode(s).unwrap().try_into().unwrap()
}

#[test]
fn reject_signature_with_non_canonical_response() {
    common::init_tracing();
    let mut rng = SecureRng::new();
    let keys = KeyPair::generate(&mut rng);
    let prefix = Hash::digest(b"malleability");
    let sig = Signature::generate(&prefix, keys.public(), keys.secret(), &mut rng);

    // r + L encodes the same residue but must not be accepted.
    let mut bytes = sig.to_bytes();
    let mut carry = 0u16;
    let order = bytes32(ORDER);
    for i in 0..32 {
        let sum = u16::from(bytes[32 + i]) + u16::from(order[i]) + carry;
        bytes[32 + i] = sum as u8;
        carry = sum >> 8;
    }
    assert_eq!(carry, 0);

    assert_eq!(Signature::from_bytes(&bytes), Err(Error::NonCanonicalScalar));
    assert!(!compat::check_signature(
        prefix.as_bytes(),
        keys.public().as_bytes(),
        &bytes
    ));
}

#[test]
fn reject_corrupted_signature_bytes() {
    common::init_tracing();
    let mut rng = SecureRng::new();
    let keys = KeyPair::generate(&mut rng);
    let prefix = Hash::digest(b"corruption");
    let sig = Signature::generate(&prefix, keys.public(), keys.secret(), &mut rng).to_bytes();

    for byte in [0usize, 7, 31, 32, 45, 63] {
        let mut corrupted = sig;
        corrupted[byte] ^= 0x01;
        assert!(
            !compat::check_signature(prefix.as_bytes(), keys.public().as_bytes(), &corrupted),
            "Flipping byte {byte} should invalidate the signature"
        );
    }
}

#[test]
fn reject_invalid_public_keys() {
    let mut not_on_curve = [0u8; 32];
    not_on_curve[0] = 0x02;
    assert_eq!(PublicKey::from_bytes(&not_on_curve), Err(Error::InvalidPoint));

    // y = 1 with the sign bit set encodes x = -0.
    let mut negative_zero = [0u8; 32];
    negative_zero[0] = 0x01;
    negative_zero[31] = 0x80;
    assert_eq!(Point::decode(&negative_zero), Err(Error::InvalidPoint));
    assert!(!compat::check_key(&negative_zero));

    assert_eq!(
        PublicKey::from_slice(&[0u8; 31]),
        Err(Error::InvalidLength {
            expected: 32,
            actual: 31
        })
    );
}

#[test]
fn reject_non_canonical_secret_keys() {
    let order = SecretKey::from_bytes(bytes32(ORDER));
    assert_eq!(order.to_public(), Err(Error::NonCanonicalScalar));
    assert_eq!(compat::secret_key_to_public_key(&bytes32(ORDER)), [0u8; 32]);
}

#[test]
fn reject_ring_signature_replayed_on_other_ring() {
    common::init_tracing();
    let mut rng = SecureRng::new();
    let (ring, signer, image) = common::ring_with_signer(&mut rng, 4, 3);
    let prefix = Hash::digest(b"replay");
    let sig = RingSignature::generate(&prefix, &image, &ring, signer.secret(), 3, &mut rng).unwrap();

    let mut swapped = ring.clone();
    swapped[0] = *KeyPair::generate(&mut rng).public();
    assert!(!sig.check(&prefix, &image, &swapped));

    let mut rotated = ring.clone();
    rotated.rotate_left(1);
    assert!(!sig.check(&prefix, &image, &rotated));

    assert!(!sig.check(&Hash::digest(b"other prefix"), &image, &ring));
}

#[test]
fn reject_ring_signature_with_swapped_pairs() {
    let mut rng = SecureRng::new();
    let (ring, signer, image) = common::ring_with_signer(&mut rng, 3, 1);
    let prefix = Hash::digest(b"swap");
    let sig = RingSignature::generate(&prefix, &image, &ring, signer.secret(), 1, &mut rng).unwrap();

    let mut pairs = sig.members().to_vec();
    pairs.swap(0, 2);
    assert!(!RingSignature::from(pairs).check(&prefix, &image, &ring));
}

#[test]
fn reject_key_image_with_torsion_component() {
    let mut rng = SecureRng::new();
    let (ring, signer, image) = common::ring_with_signer(&mut rng, 2, 0);
    let prefix = Hash::digest(b"torsion");
    let sig = RingSignature::generate(&prefix, &image, &ring, signer.secret(), 0, &mut rng).unwrap();
    assert!(sig.check(&prefix, &image, &ring));

    // (0, -1) has order two.
    let order_two = Point::decode(&bytes32(
        "ecffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f",
    ))
    .unwrap();
    assert!(!order_two.is_torsion_free());

    let shifted = KeyImage::from_bytes(&(*image.point() + order_two).encode()).unwrap();
    assert_ne!(shifted, image);
    assert!(!sig.check(&prefix, &shifted, &ring));
}

#[test]
fn reject_identity_key_image() {
    let mut rng = SecureRng::new();
    let (ring, signer, image) = common::ring_with_signer(&mut rng, 2, 1);
    let prefix = Hash::digest(b"identity");
    let sig = RingSignature::generate(&prefix, &image, &ring, signer.secret(), 1, &mut rng).unwrap();

    let identity = KeyImage::from_bytes(&Point::identity().encode()).unwrap();
    assert!(!sig.check(&prefix, &identity, &ring));
}

#[test]
fn reject_ring_contract_violations() {
    let mut rng = SecureRng::new();
    let (ring, signer, image) = common::ring_with_signer(&mut rng, 3, 0);
    let prefix = Hash::digest(b"contract");

    assert_eq!(
        RingSignature::generate(&prefix, &image, &ring, signer.secret(), 3, &mut rng),
        Err(Error::SignerIndexOutOfRange {
            index: 3,
            ring_size: 3
        })
    );
    assert!(matches!(
        RingSignature::generate(&prefix, &image, &[], signer.secret(), 0, &mut rng),
        Err(Error::RingSizeMismatch { .. })
    ));

    let sig = RingSignature::generate(&prefix, &image, &ring, signer.secret(), 0, &mut rng).unwrap();
    let bytes = sig.to_bytes();
    assert!(RingSignature::from_bytes(&bytes, 2).is_err());
    assert!(RingSignature::from_bytes(&bytes[..bytes.len() - 1], 3).is_err());
}

#[test]
fn secret_key_debug_does_not_leak() {
    let mut rng = SecureRng::new();
    let keys = KeyPair::generate(&mut rng);
    let rendered = format!("{:?}", keys);
    assert!(!rendered.contains(&hex::encode(keys.secret().as_bytes())));
}
