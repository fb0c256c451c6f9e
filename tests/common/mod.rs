//! Common test utilities shared across integration tests.

use cryptonote_crypto::{KeyImage, KeyPair, PublicKey, SecureRng};

/// Initialize test tracing (call once at the beginning of tests).
///
/// Shows the library's rejection reasons at DEBUG level through the test writer.
/// Subsequent calls are safe and will be ignored.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::new("cryptonote_crypto=debug");

    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(filter)
        .try_init();
}

/// A ring of `size` fresh members; the signer's pair and image are returned too.
#[allow(dead_code)]
pub fn ring_with_signer(
    rng: &mut SecureRng,
    size: usize,
    index: usize,
) -> (Vec<PublicKey>, KeyPair, KeyImage) {
    let members: Vec<KeyPair> = (0..size).map(|_| KeyPair::generate(rng)).collect();
    let ring = members.iter().map(|k| *k.public()).collect();
    let signer = members[index].clone();
    let image = KeyImage::generate(signer.public(), signer.secret());
    (ring, signer, image)
}
