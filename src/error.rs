//! Error types for the CryptoNote primitives.

/// Main error types for the library.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A 32-byte scalar encodes a value that is not strictly below the group order.
    #[error("Scalar is not canonical (value must be below the group order)")]
    NonCanonicalScalar,

    /// Bytes do not decompress to a point on the curve.
    #[error("Bytes do not encode a valid curve point")]
    InvalidPoint,

    /// The ring is empty, larger than the configured limit, or does not match
    /// the number of signature members.
    #[error("Ring size mismatch: expected {expected}, got {actual}")]
    RingSizeMismatch {
        /// Size required by the operation.
        expected: usize,
        /// Size that was supplied.
        actual: usize,
    },

    /// The real signer index does not address a ring member.
    #[error("Signer index {index} out of range for ring of size {ring_size}")]
    SignerIndexOutOfRange {
        /// Index supplied by the caller.
        index: usize,
        /// Number of ring members.
        ring_size: usize,
    },

    /// A byte buffer has the wrong length for the value being decoded.
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required length in bytes.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// Configuration values are out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
