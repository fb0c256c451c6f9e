//! Random number generators.
//!
//! Every generating operation takes its generator explicitly. [`SecureRng`] is
//! the production source; [`DeterministicRng`] exists only to reproduce fixed
//! test vectors and is compiled out of normal builds.

use rand_core::{CryptoRng, OsRng, RngCore};

/// Cryptographically secure random number generator.
///
/// This is a thin wrapper around `OsRng` that provides a consistent interface
/// for cryptographic randomness throughout the library.
pub struct SecureRng(OsRng);

impl SecureRng {
    /// Creates a new cryptographically secure random number generator.
    pub fn new() -> Self {
        Self(OsRng)
    }
}

impl Default for SecureRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for SecureRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.0.try_fill_bytes(dest)
    }
}

impl CryptoRng for SecureRng {}

#[cfg(any(test, feature = "deterministic-rng"))]
pub use deterministic::DeterministicRng;

#[cfg(any(test, feature = "deterministic-rng"))]
mod deterministic {
    use rand_core::{impls, CryptoRng, RngCore};

    /// Number of 64-bit lanes in the Keccak-f[1600] state.
    const STATE_LANES: usize = 25;

    /// Bytes released per permutation (the Keccak-256 rate).
    const BLOCK_BYTES: usize = 136;

    /// Seedable Keccak-f[1600] stream reproducing the ledger's test-vector generator.
    ///
    /// The state starts with every byte equal to the seed. Each `fill_bytes`
    /// call permutes the state once per 136-byte block and copies out the
    /// leading bytes of the state.
    ///
    /// # Security
    ///
    /// The output is fully determined by an 8-bit seed. It implements
    /// [`CryptoRng`] only so it can be injected where [`super::SecureRng`]
    /// normally goes; never use it to generate live secrets.
    #[derive(Clone, Debug)]
    pub struct DeterministicRng {
        state: [u64; STATE_LANES],
    }

    impl DeterministicRng {
        /// Creates a generator whose state bytes are all `seed`.
        pub fn new(seed: u8) -> Self {
            Self {
                state: [u64::from_le_bytes([seed; 8]); STATE_LANES],
            }
        }

        fn next_block(&mut self) -> [u8; BLOCK_BYTES] {
            keccak::f1600(&mut self.state);
            let mut block = [0u8; BLOCK_BYTES];
            for (chunk, lane) in block.chunks_exact_mut(8).zip(self.state.iter()) {
                chunk.copy_from_slice(&lane.to_le_bytes());
            }
            block
        }
    }

    impl RngCore for DeterministicRng {
        fn next_u32(&mut self) -> u32 {
            impls::next_u32_via_fill(self)
        }

        fn next_u64(&mut self) -> u64 {
            impls::next_u64_via_fill(self)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for chunk in dest.chunks_mut(BLOCK_BYTES) {
                let block = self.next_block();
                chunk.copy_from_slice(&block[..chunk.len()]);
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for DeterministicRng {}
}
