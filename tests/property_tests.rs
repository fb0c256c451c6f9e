use cryptonote_crypto::{
    compat, Hash, KeyDerivation, KeyImage, KeyPair, Point, PublicKey, RingSignature, Scalar,
    SecretKey, SecureRng, Signature,
};
use proptest::prelude::*;

const ORDER: [u8; 32] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
];

/// Little-endian `a >= b`.
fn at_least(a: &[u8; 32], b: &[u8; 32]) -> bool {
    for i in (0..32).rev() {
        if a[i] != b[i] {
            return a[i] > b[i];
        }
    }
    true
}

proptest! {
    #[test]
    fn canonical_iff_below_group_order(bytes in any::<[u8; 32]>()) {
        prop_assert_eq!(Scalar::check_canonical(&bytes), !at_least(&bytes, &ORDER));
    }

    #[test]
    fn reduced_scalars_are_canonical(bytes in any::<[u8; 32]>()) {
        let scalar = Scalar::from_bytes_mod_order(bytes);
        prop_assert!(compat::check_scalar(&scalar.to_bytes()));
    }

    #[test]
    fn hash_to_scalar_is_canonical(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        prop_assert!(Scalar::check_canonical(&compat::hash_to_scalar(&data)));
    }

    #[test]
    fn mul_add_distributes(a in any::<[u8; 32]>(), b in any::<[u8; 32]>(), c in any::<[u8; 32]>()) {
        let (a, b, c) = (
            Scalar::from_bytes_mod_order(a),
            Scalar::from_bytes_mod_order(b),
            Scalar::from_bytes_mod_order(c),
        );
        prop_assert_eq!(Scalar::mul_add(&a, &b, &c), a * b + c);
        prop_assert_eq!(Scalar::mul_sub(&a, &b, &c), c - a * b);
    }

    #[test]
    fn hash_to_point_lands_in_prime_order_subgroup(bytes in any::<[u8; 32]>()) {
        let point = Point::hash_to_point(&bytes);
        prop_assert!(point.is_torsion_free());
        prop_assert_eq!(Point::map_to_curve(&bytes).mul_by_cofactor(), point);
        prop_assert!(Point::decode(&point.encode()).is_ok());
    }

    #[test]
    fn decoded_points_reencode_to_a_valid_point(bytes in any::<[u8; 32]>()) {
        if let Ok(point) = Point::decode(&bytes) {
            let reencoded = point.encode();
            prop_assert_eq!(Point::decode(&reencoded).unwrap(), point);
            prop_assert!(compat::check_key(&bytes));
        } else {
            prop_assert!(!compat::check_key(&bytes));
        }
    }

    #[test]
    fn secret_to_public_matches_generation(_seed in any::<u64>()) {
        let mut rng = SecureRng::new();
        let keys = KeyPair::generate(&mut rng);
        prop_assert_eq!(&keys.secret().to_public().unwrap(), keys.public());
    }

    #[test]
    fn derivation_agrees_on_both_sides(_seed in any::<u64>(), index in any::<u64>()) {
        let mut rng = SecureRng::new();
        let recipient = KeyPair::generate(&mut rng);
        let tx = KeyPair::generate(&mut rng);

        let sender = KeyDerivation::generate(recipient.public(), tx.secret());
        let receiver = KeyDerivation::generate(tx.public(), recipient.secret());
        prop_assert_eq!(sender, receiver);

        let output = sender.derive_public_key(index, recipient.public());
        let output_secret = receiver.derive_secret_key(index, recipient.secret());
        prop_assert_eq!(output_secret.to_public().unwrap(), output);
        prop_assert_eq!(&sender.underive_public_key(index, &output), recipient.public());
    }

    #[test]
    fn key_image_is_deterministic(_seed in any::<u64>()) {
        let mut rng = SecureRng::new();
        let keys = KeyPair::generate(&mut rng);
        let first = KeyImage::generate(keys.public(), keys.secret());
        let second = KeyImage::generate(keys.public(), keys.secret());
        prop_assert_eq!(first, second);
        prop_assert!(first.point().is_torsion_free());
    }

    #[test]
    fn signature_roundtrip(message in proptest::collection::vec(any::<u8>(), 0..128)) {
        let mut rng = SecureRng::new();
        let keys = KeyPair::generate(&mut rng);
        let prefix = Hash::digest(&message);

        let sig = Signature::generate(&prefix, keys.public(), keys.secret(), &mut rng);
        prop_assert!(sig.check(&prefix, keys.public()));
        prop_assert!(compat::check_signature(prefix.as_bytes(), keys.public().as_bytes(), &sig.to_bytes()));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn ring_roundtrip_for_any_size_and_index((size, index) in (1usize..9).prop_flat_map(|n| (Just(n), 0..n))) {
        let mut rng = SecureRng::new();
        let members: Vec<KeyPair> = (0..size).map(|_| KeyPair::generate(&mut rng)).collect();
        let ring: Vec<PublicKey> = members.iter().map(|k| *k.public()).collect();
        let signer = &members[index];
        let image = KeyImage::generate(signer.public(), signer.secret());
        let prefix = Hash::digest(&(size as u64 * 31 + index as u64).to_le_bytes());

        let sig = RingSignature::generate(&prefix, &image, &ring, signer.secret(), index, &mut rng)
            .expect("Ring signature generation should succeed");
        prop_assert_eq!(sig.len(), size);
        prop_assert!(sig.check(&prefix, &image, &ring));

        let decoded = RingSignature::from_bytes(&sig.to_bytes(), size).unwrap();
        prop_assert!(decoded.check(&prefix, &image, &ring));
    }

    #[test]
    fn ring_rejects_foreign_secret(size in 1usize..6) {
        let mut rng = SecureRng::new();
        let ring: Vec<PublicKey> = (0..size).map(|_| *KeyPair::generate(&mut rng).public()).collect();
        let outsider = SecretKey::generate(&mut rng);
        let image = KeyImage::generate(&ring[0], &outsider);
        let prefix = Hash::digest(b"foreign");

        let sig = RingSignature::generate(&prefix, &image, &ring, &outsider, 0, &mut rng).unwrap();
        prop_assert!(!sig.check(&prefix, &image, &ring));
    }
}
