//! The ECDSA signing engine for secp256k1.
//!
//! Performs the core computation: deterministic nonce, curve point
//! `R = k·G`, `s = k⁻¹(z + r·d)`, low-S normalization, and closed-form
//! recovery-id selection. Also provides public key recovery from a
//! signature and digest, which is how verifiers reconstruct the signer.

use k256::ecdsa::{self, RecoveryId, VerifyingKey};
use k256::elliptic_curve::ops::Reduce;
use k256::elliptic_curve::point::AffineCoordinates;
use k256::elliptic_curve::scalar::IsHigh;
use k256::elliptic_curve::Field;
use k256::{ProjectivePoint, Scalar, U256};
use zeroize::Zeroize;

use crate::ec::private_key::PrivateKey;
use crate::ec::public_key::PublicKey;
use crate::ec::signature::RecoverableSignature;
use crate::nonce::derive_nonce;
use crate::SignerError;

/// Sign a 32-byte digest with the given private key.
///
/// The nonce comes from RFC 6979, so the result is a pure function of
/// (key, digest). The returned signature is always low-S with the recovery
/// id selected in closed form: bit 0 is the parity of `R.y` (flipped when
/// the high-S branch negates s, since that mirrors R), bit 1 is set when
/// `R.x` exceeded the curve order before reduction.
///
/// # Arguments
/// * `priv_key` - The private key scalar.
/// * `digest` - The 32-byte digest to sign. Digests built from adversarial
///   input are fine; no structure is assumed.
///
/// # Returns
/// `Ok(RecoverableSignature)` on success, or
/// [`SignerError::DegenerateSignature`] if r or s came out zero.
pub fn sign_prehash(
    priv_key: &PrivateKey,
    digest: &[u8; 32],
) -> Result<RecoverableSignature, SignerError> {
    let z = <Scalar as Reduce<U256>>::reduce(U256::from_be_slice(digest));

    let mut key_bytes = priv_key.to_bytes();
    let k = derive_nonce(&key_bytes, digest);
    key_bytes.zeroize();

    let big_r = (ProjectivePoint::GENERATOR * k).to_affine();
    let x_bytes = big_r.x();
    let r = <Scalar as Reduce<U256>>::reduce(U256::from_be_slice(x_bytes.as_slice()));
    if bool::from(r.is_zero()) {
        return Err(SignerError::DegenerateSignature);
    }
    // R.x is a field element below the field prime p, and p < 2n, so the
    // reduction changed the value iff R.x was in [n, p).
    let x_overflowed = r.to_bytes() != x_bytes;

    let k_inv = Option::<Scalar>::from(k.invert()).ok_or(SignerError::DegenerateSignature)?;
    let d = priv_key.to_scalar();
    let mut s = k_inv * (z + r * d);
    if bool::from(s.is_zero()) {
        return Err(SignerError::DegenerateSignature);
    }

    let mut recovery_id = big_r.y_is_odd().unwrap_u8();
    if x_overflowed {
        recovery_id |= 2;
    }
    if bool::from(s.is_high()) {
        s = -s;
        recovery_id ^= 1;
    }

    Ok(RecoverableSignature::from_scalars(r, s, recovery_id))
}

/// Recover the signer's public key from a signature and digest.
///
/// # Arguments
/// * `sig` - The recoverable signature.
/// * `digest` - The 32-byte digest that was signed.
///
/// # Returns
/// `Ok(PublicKey)` if recovery succeeds, or
/// [`SignerError::InvalidSignature`] if the (r, s, v) triple does not
/// describe a valid curve point for this digest.
pub fn recover_public_key(
    sig: &RecoverableSignature,
    digest: &[u8; 32],
) -> Result<PublicKey, SignerError> {
    let recovery_id = RecoveryId::from_byte(sig.v())
        .ok_or_else(|| SignerError::InvalidSignature("invalid recovery id".to_string()))?;

    let k256_sig = ecdsa::Signature::from_scalars(
        k256::FieldBytes::from(*sig.r()),
        k256::FieldBytes::from(*sig.s()),
    )
    .map_err(|e| SignerError::InvalidSignature(e.to_string()))?;

    let recovered = VerifyingKey::recover_from_prehash(digest, &k256_sig, recovery_id)
        .map_err(|e| SignerError::InvalidSignature(e.to_string()))?;

    Ok(PublicKey::from_verifying_key(&recovered))
}
