//! EIP-191 personal-message digest preparation.

use crate::hash::keccak256;

/// The EIP-191 version 0x45 preamble prepended before hashing.
pub const PERSONAL_MESSAGE_PREFIX: &str = "\x19Ethereum Signed Message:\n";

/// Compute the EIP-191 personal-message digest.
///
/// `keccak256(prefix ‖ ascii_decimal(len(message)) ‖ message)`, where the
/// length is the ASCII decimal byte count of the message. Any byte
/// sequence is accepted; this never fails.
///
/// # Arguments
/// * `message` - The raw message bytes to be signed.
///
/// # Returns
/// The 32-byte digest to feed into the signing engine.
pub fn personal_digest(message: &[u8]) -> [u8; 32] {
    let length = message.len().to_string();
    let mut preimage =
        Vec::with_capacity(PERSONAL_MESSAGE_PREFIX.len() + length.len() + message.len());
    preimage.extend_from_slice(PERSONAL_MESSAGE_PREFIX.as_bytes());
    preimage.extend_from_slice(length.as_bytes());
    preimage.extend_from_slice(message);
    keccak256(&preimage)
}
