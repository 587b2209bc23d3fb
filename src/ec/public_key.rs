//! secp256k1 public key with Ethereum-specific functionality.
//!
//! Supports compressed/uncompressed SEC1 serialization, prehash signature
//! verification, and EIP-55 checksummed address derivation.

use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{self, VerifyingKey};
use std::fmt;

use crate::ec::signature::RecoverableSignature;
use crate::hash::keccak256;
use crate::SignerError;

/// A secp256k1 public key for signature verification and address derivation.
#[derive(Clone, Debug)]
pub struct PublicKey {
    /// The underlying k256 verifying key.
    inner: VerifyingKey,
}

impl PublicKey {
    /// Create a PublicKey from raw SEC1 encoded bytes.
    ///
    /// Accepts both compressed (33-byte) and uncompressed (65-byte) formats.
    ///
    /// # Arguments
    /// * `bytes` - SEC1-encoded public key bytes.
    ///
    /// # Returns
    /// `Ok(PublicKey)` on success, or [`SignerError::InvalidSignature`] if
    /// the bytes don't represent a valid curve point.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignerError> {
        let vk = VerifyingKey::from_sec1_bytes(bytes)
            .map_err(|e| SignerError::InvalidSignature(format!("invalid public key: {}", e)))?;
        Ok(PublicKey { inner: vk })
    }

    /// Create a PublicKey from a hex-encoded SEC1 string.
    ///
    /// # Arguments
    /// * `hex_str` - A hex string of a compressed (66 chars) or uncompressed (130 chars) key.
    pub fn from_hex(hex_str: &str) -> Result<Self, SignerError> {
        let bytes = hex::decode(hex_str)
            .map_err(|e| SignerError::InvalidSignature(format!("invalid public key hex: {}", e)))?;
        Self::from_bytes(&bytes)
    }

    /// Serialize the public key in compressed SEC1 format (33 bytes).
    ///
    /// The first byte is 0x02 (even Y) or 0x03 (odd Y), followed by the 32-byte X coordinate.
    pub fn to_compressed(&self) -> [u8; 33] {
        let point = self.inner.to_encoded_point(true);
        let mut out = [0u8; 33];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Serialize the public key in uncompressed SEC1 format (65 bytes).
    ///
    /// The first byte is 0x04, followed by 32-byte X and 32-byte Y coordinates.
    pub fn to_uncompressed(&self) -> [u8; 65] {
        let point = self.inner.to_encoded_point(false);
        let mut out = [0u8; 65];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Serialize the public key as a lowercase hexadecimal string (compressed format).
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_compressed())
    }

    /// Derive the EIP-55 checksummed Ethereum address for this public key.
    ///
    /// The address is the last 20 bytes of keccak256 over the uncompressed
    /// point coordinates (without the 0x04 prefix); hex letters are
    /// upper-cased where the corresponding nibble of keccak256 of the
    /// lowercase hex address is >= 8.
    ///
    /// # Returns
    /// A `0x`-prefixed, checksum-cased 42-character address string.
    pub fn to_address(&self) -> String {
        let uncompressed = self.to_uncompressed();
        let digest = keccak256(&uncompressed[1..]);
        let addr_hex = hex::encode(&digest[12..]);

        let check = keccak256(addr_hex.as_bytes());
        let mut out = String::with_capacity(42);
        out.push_str("0x");
        for (i, c) in addr_hex.chars().enumerate() {
            let nibble = if i % 2 == 0 {
                check[i / 2] >> 4
            } else {
                check[i / 2] & 0x0f
            };
            if c.is_ascii_alphabetic() && nibble >= 8 {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
        }
        out
    }

    /// Verify a recoverable signature against a 32-byte digest.
    ///
    /// Only the (r, s) pair is checked; the recovery id does not
    /// participate in plain verification.
    ///
    /// # Arguments
    /// * `digest` - The 32-byte digest that was signed.
    /// * `sig` - The signature to verify.
    ///
    /// # Returns
    /// `true` if the signature is valid for this digest and public key.
    pub fn verify_prehash(&self, digest: &[u8; 32], sig: &RecoverableSignature) -> bool {
        let k256_sig = match ecdsa::Signature::from_scalars(
            k256::FieldBytes::from(*sig.r()),
            k256::FieldBytes::from(*sig.s()),
        ) {
            Ok(sig) => sig,
            Err(_) => return false,
        };
        self.inner.verify_prehash(digest, &k256_sig).is_ok()
    }

    /// Construct a PublicKey from a k256 `VerifyingKey`.
    pub(crate) fn from_verifying_key(vk: &VerifyingKey) -> Self {
        PublicKey { inner: *vk }
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_compressed() == other.to_compressed()
    }
}

impl Eq for PublicKey {}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
