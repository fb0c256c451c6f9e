#![no_main]

use cryptonote_crypto::{KeyImage, Point, PublicKey};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 32 {
        return;
    }

    let bytes: [u8; 32] = data[..32].try_into().unwrap();
    let _ = Point::map_to_curve(&bytes);

    if let Ok(point) = Point::decode(&bytes) {
        assert!(Point::decode(&point.encode()).is_ok());
        assert!(PublicKey::from_bytes(&bytes).is_ok());
        assert!(KeyImage::from_bytes(&bytes).is_ok());
    }
});
