#![no_main]

use cryptonote_crypto::{RingSignature, Signature};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(sig) = Signature::from_slice(data) {
        assert_eq!(sig.to_bytes().as_slice(), data);
    }

    if !data.is_empty() {
        let ring_size = usize::from(data[0] % 8) + 1;
        if let Ok(sig) = RingSignature::from_bytes(&data[1..], ring_size) {
            assert_eq!(sig.to_bytes(), &data[1..]);
        }
    }
});
