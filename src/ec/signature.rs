//! Recoverable ECDSA signature triple and its 65-byte wire form.
//!
//! The engine always produces the canonical form: r and s in [1, order-1],
//! s in the lower half of the order, v in {0, 1}. Decoding rejects anything
//! else, including the high-S variant, so a signature value round-trips
//! bit-for-bit.

use k256::Scalar;

use crate::SignerError;

/// The secp256k1 curve order N.
/// N = FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
const CURVE_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFE, 0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36,
    0x41, 0x41,
];

/// Half of the secp256k1 curve order (N/2), the low-S boundary.
const HALF_ORDER: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B,
    0x20, 0xA0,
];

/// Length of the encoded signature: r (32) + s (32) + v (1).
const ENCODED_LEN: usize = 65;

/// An ECDSA signature with recovery identifier.
///
/// Holds the (r, s, v) triple with v in its canonical {0, 1} form.
/// Chain-specific presentations of v (27/28 legacy, EIP-155) are available
/// as boundary adjusters and never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecoverableSignature {
    /// The R component (32 bytes, big-endian).
    r: [u8; 32],
    /// The S component (32 bytes, big-endian), always in low-S form.
    s: [u8; 32],
    /// The recovery identifier, canonically 0 or 1.
    v: u8,
}

impl RecoverableSignature {
    /// Access the R component of the signature.
    pub fn r(&self) -> &[u8; 32] {
        &self.r
    }

    /// Access the S component of the signature.
    pub fn s(&self) -> &[u8; 32] {
        &self.s
    }

    /// The canonical recovery identifier (0 or 1).
    pub fn v(&self) -> u8 {
        self.v
    }

    /// The legacy pre-EIP-155 recovery byte: `v + 27`.
    ///
    /// Presentation-only; the stored value stays canonical.
    pub fn legacy_v(&self) -> u8 {
        self.v + 27
    }

    /// The EIP-155 chain-adjusted recovery value: `35 + 2 * chain_id + v`.
    ///
    /// Presentation-only; the stored value stays canonical.
    pub fn eip155_v(&self, chain_id: u64) -> u64 {
        35 + 2 * chain_id + u64::from(self.v)
    }

    /// Serialize as the 65-byte concatenation `r ‖ s ‖ v` with v in {0, 1}.
    pub fn to_bytes(&self) -> [u8; ENCODED_LEN] {
        let mut out = [0u8; ENCODED_LEN];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }

    /// Parse a 65-byte `r ‖ s ‖ v` signature, validating canonical form.
    ///
    /// Accepts v as 0/1 or the legacy 27/28 form (normalized to 0/1).
    /// Rejects wrong lengths, r or s outside [1, order-1], high-S values,
    /// and any other v.
    ///
    /// # Arguments
    /// * `bytes` - The 65-byte encoded signature.
    ///
    /// # Returns
    /// `Ok(RecoverableSignature)` on success, or
    /// [`SignerError::InvalidSignature`] describing the violation.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignerError> {
        if bytes.len() != ENCODED_LEN {
            return Err(SignerError::InvalidSignature(format!(
                "expected {} bytes, got {}",
                ENCODED_LEN,
                bytes.len()
            )));
        }
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);

        let v = match bytes[64] {
            v @ (0 | 1) => v,
            v @ (27 | 28) => v - 27,
            v => {
                return Err(SignerError::InvalidSignature(format!(
                    "unsupported recovery id {}",
                    v
                )));
            }
        };

        if is_zero(&r) {
            return Err(SignerError::InvalidSignature("signature R is zero".to_string()));
        }
        if is_zero(&s) {
            return Err(SignerError::InvalidSignature("signature S is zero".to_string()));
        }
        if !is_less_than(&r, &CURVE_ORDER) {
            return Err(SignerError::InvalidSignature(
                "signature R is >= curve order".to_string(),
            ));
        }
        if !is_less_than(&s, &CURVE_ORDER) {
            return Err(SignerError::InvalidSignature(
                "signature S is >= curve order".to_string(),
            ));
        }
        if is_greater_than(&s, &HALF_ORDER) {
            return Err(SignerError::InvalidSignature(
                "signature S is in high-S form".to_string(),
            ));
        }

        Ok(RecoverableSignature { r, s, v })
    }

    /// Build a signature from scalar components produced by the engine.
    ///
    /// The engine guarantees r and s are non-zero and s is low-S.
    pub(crate) fn from_scalars(r: Scalar, s: Scalar, v: u8) -> Self {
        let mut r_bytes = [0u8; 32];
        let mut s_bytes = [0u8; 32];
        r_bytes.copy_from_slice(&r.to_bytes());
        s_bytes.copy_from_slice(&s.to_bytes());
        RecoverableSignature {
            r: r_bytes,
            s: s_bytes,
            v,
        }
    }

    /// Whether the S component lies in the lower half of the curve order.
    pub fn is_low_s(&self) -> bool {
        !is_greater_than(&self.s, &HALF_ORDER)
    }
}

/// Check if a 32-byte big-endian integer is zero.
fn is_zero(val: &[u8; 32]) -> bool {
    val.iter().all(|&b| b == 0)
}

/// Compare two 32-byte big-endian integers: a < b.
fn is_less_than(a: &[u8; 32], b: &[u8; 32]) -> bool {
    for i in 0..32 {
        if a[i] < b[i] {
            return true;
        }
        if a[i] > b[i] {
            return false;
        }
    }
    false // equal
}

/// Compare two 32-byte big-endian integers: a > b.
fn is_greater_than(a: &[u8; 32], b: &[u8; 32]) -> bool {
    for i in 0..32 {
        if a[i] > b[i] {
            return true;
        }
        if a[i] < b[i] {
            return false;
        }
    }
    false // equal
}
