//! secp256k1 private key parsing and validation.
//!
//! Wraps a k256 signing key. The scalar is the only secret in the system;
//! it is accepted solely as an explicit argument and overwritten with zeros
//! when the key is dropped.

use k256::ecdsa::SigningKey;
use k256::Scalar;

use crate::ec::public_key::PublicKey;
use crate::ec::signature::RecoverableSignature;
use crate::SignerError;

/// Length of a serialized private key in bytes.
const PRIVATE_KEY_BYTES_LEN: usize = 32;

/// A secp256k1 private key scalar in the open range (0, curve order).
///
/// Constructed from a hex string or raw bytes; both constructors enforce
/// the range invariant. Holds no other state and performs no I/O.
#[derive(Clone, Debug)]
pub struct PrivateKey {
    /// The underlying k256 signing key.
    inner: SigningKey,
}

impl PrivateKey {
    /// Create a private key from a raw 32-byte big-endian scalar.
    ///
    /// # Arguments
    /// * `bytes` - A 32-byte slice representing the private key scalar.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` if the bytes represent a valid non-zero scalar below
    /// the curve order, [`SignerError::InvalidKeyFormat`] on a wrong length,
    /// or [`SignerError::InvalidKeyRange`] if the scalar is zero or too large.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignerError> {
        if bytes.len() != PRIVATE_KEY_BYTES_LEN {
            return Err(SignerError::InvalidKeyFormat(format!(
                "expected {} bytes, got {}",
                PRIVATE_KEY_BYTES_LEN,
                bytes.len()
            )));
        }
        let signing_key = SigningKey::from_bytes(k256::FieldBytes::from_slice(bytes))
            .map_err(|_| SignerError::InvalidKeyRange)?;
        Ok(PrivateKey {
            inner: signing_key,
        })
    }

    /// Create a private key from a hexadecimal string.
    ///
    /// Accepts upper or lower case digits and an optional `0x` / `0X`
    /// prefix. The string must decode to exactly 32 bytes.
    ///
    /// # Arguments
    /// * `hex_str` - A 64-character hex string, optionally `0x`-prefixed.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` on success, [`SignerError::InvalidKeyFormat`] if the
    /// string is not valid hex of the right length, or
    /// [`SignerError::InvalidKeyRange`] if the scalar is out of range.
    pub fn from_hex(hex_str: &str) -> Result<Self, SignerError> {
        if hex_str.is_empty() {
            return Err(SignerError::InvalidKeyFormat(
                "private key hex is empty".to_string(),
            ));
        }
        let stripped = hex_str
            .strip_prefix("0x")
            .or_else(|| hex_str.strip_prefix("0X"))
            .unwrap_or(hex_str);
        let bytes = hex::decode(stripped)
            .map_err(|e| SignerError::InvalidKeyFormat(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Serialize the private key as a 32-byte big-endian array.
    ///
    /// The caller owns the copy and is responsible for zeroing it.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.inner.to_bytes());
        out
    }

    /// Serialize the private key as a lowercase hex string without prefix.
    ///
    /// The caller is responsible for handling the returned secret.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Derive the corresponding public key for this private key.
    pub fn pub_key(&self) -> PublicKey {
        let verifying_key = self.inner.verifying_key();
        PublicKey::from_verifying_key(verifying_key)
    }

    /// Sign a 32-byte digest, producing a low-S recoverable signature.
    ///
    /// Deterministic: identical (key, digest) pairs always yield identical
    /// signatures. See [`crate::ecdsa::sign_prehash`].
    ///
    /// # Arguments
    /// * `digest` - The 32-byte digest to sign.
    ///
    /// # Returns
    /// `Ok(RecoverableSignature)` on success, or
    /// [`SignerError::DegenerateSignature`] in the astronomically unlikely
    /// case that an intermediate curve value is zero.
    pub fn sign_prehash(&self, digest: &[u8; 32]) -> Result<RecoverableSignature, SignerError> {
        crate::ecdsa::sign_prehash(self, digest)
    }

    /// Convert the private key to a k256 `Scalar` for signing arithmetic.
    pub(crate) fn to_scalar(&self) -> Scalar {
        *self.inner.as_nonzero_scalar().as_ref()
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        // Overwrite the signing key's memory with zeros.
        // SigningKey stores the scalar internally; we zeroize via its bytes representation.
        let mut bytes = self.inner.to_bytes();
        bytes.zeroize();
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for PrivateKey {}
