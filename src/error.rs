/// Unified error type for all signing operations.
///
/// Every variant reflects an invalid input, never a transient condition;
/// callers can branch on the kind without parsing messages.
#[derive(Debug, thiserror::Error)]
pub enum SignerError {
    /// The private key string is not valid hexadecimal or does not decode
    /// to exactly 32 bytes.
    #[error("invalid private key format: {0}")]
    InvalidKeyFormat(String),

    /// The decoded private key scalar is zero or not below the curve order.
    #[error("private key scalar out of range: must be in (0, curve order)")]
    InvalidKeyRange,

    /// Raw-digest signing received a value that is not exactly 32 bytes.
    #[error("invalid digest length: expected {expected} bytes, got {got}")]
    InvalidDigestLength {
        /// The required digest length.
        expected: usize,
        /// The length actually provided.
        got: usize,
    },

    /// A typed-data encoding referenced an undefined type, a cyclic struct
    /// graph, or a malformed type name.
    #[error("invalid type definition: {0}")]
    InvalidTypeDefinition(String),

    /// A typed-data value does not match its declared type (missing field,
    /// malformed address, out-of-range number, wrong JSON shape).
    #[error("invalid typed data value: {0}")]
    InvalidTypedData(String),

    /// A serialized signature failed validation during decoding or
    /// public-key recovery.
    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    /// An intermediate elliptic-curve value (r or s) was zero.
    /// Astronomically unlikely with a valid nonce, but a defined outcome.
    #[error("degenerate signature: intermediate curve value was zero")]
    DegenerateSignature,
}
