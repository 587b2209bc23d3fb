//! The top-level signing surface.
//!
//! Thin free functions that tie digest preparation to the signing engine:
//! parse the key, build the digest, sign. Each is a pure function of its
//! arguments and returns the canonical low-S recoverable signature.

use crate::ec::private_key::PrivateKey;
use crate::ec::signature::RecoverableSignature;
use crate::eip712::TypedData;
use crate::message::personal_digest;
use crate::SignerError;

/// A message in one of the digest-preparation schemes.
pub enum SignableMessage<'a> {
    /// Raw bytes hashed under the EIP-191 personal-message scheme.
    Personal(&'a [u8]),
    /// EIP-712 typed structured data.
    Typed(&'a TypedData),
}

/// Sign a precomputed 32-byte digest.
///
/// # Arguments
/// * `digest` - The digest to sign; must be exactly 32 bytes.
/// * `private_key` - The private key as a hex string, with or without a
///   `0x` prefix.
///
/// # Returns
/// The canonical recoverable signature, or an error if the digest is not
/// 32 bytes or the key is malformed or out of range.
pub fn sign_hash(digest: &[u8], private_key: &str) -> Result<RecoverableSignature, SignerError> {
    let digest: &[u8; 32] =
        digest
            .try_into()
            .map_err(|_| SignerError::InvalidDigestLength {
                expected: 32,
                got: digest.len(),
            })?;
    let key = PrivateKey::from_hex(private_key)?;
    key.sign_prehash(digest)
}

/// Sign a message, preparing the digest per its scheme.
///
/// # Arguments
/// * `message` - The personal-message bytes or typed data to sign.
/// * `private_key` - The private key as a hex string, with or without a
///   `0x` prefix.
pub fn sign_message(
    message: SignableMessage<'_>,
    private_key: &str,
) -> Result<RecoverableSignature, SignerError> {
    let digest = match message {
        SignableMessage::Personal(bytes) => personal_digest(bytes),
        SignableMessage::Typed(typed) => typed.signing_digest()?,
    };
    let key = PrivateKey::from_hex(private_key)?;
    key.sign_prehash(&digest)
}

/// Sign EIP-712 typed data. Shorthand for
/// [`sign_message`] with [`SignableMessage::Typed`].
pub fn sign_typed_data(
    typed: &TypedData,
    private_key: &str,
) -> Result<RecoverableSignature, SignerError> {
    sign_message(SignableMessage::Typed(typed), private_key)
}
