#![no_main]

use cryptonote_crypto::compat;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // prefix || image || member || signature
    if data.len() < 96 + 64 {
        return;
    }

    let prefix: [u8; 32] = data[..32].try_into().unwrap();
    let image: [u8; 32] = data[32..64].try_into().unwrap();
    let member: [u8; 32] = data[64..96].try_into().unwrap();

    let _ = compat::check_ring_signature(&prefix, &image, &[member], &data[96..]);
});
