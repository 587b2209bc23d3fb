//! Deterministic nonce derivation per RFC 6979.
//!
//! HMAC-SHA-256 construction specialized to the secp256k1 scalar field and
//! a 256-bit digest, matching libsecp256k1's `nonce_function_rfc6979` so
//! that standard Ethereum signatures reproduce exactly. The nonce is a pure
//! function of (private scalar, digest): no randomness source exists, and
//! identical inputs always yield identical nonces.

use k256::elliptic_curve::ops::Reduce;
use k256::elliptic_curve::{Field, PrimeField};
use k256::{Scalar, U256};
use zeroize::Zeroize;

use crate::hash::sha256_hmac;

/// Derive the per-signature nonce k for a (private scalar, digest) pair.
///
/// Implements RFC 6979 §3.2 with HMAC-SHA-256. `bits2octets(h1)` is the
/// digest reduced modulo the curve order and re-serialized; candidate
/// outputs are accepted on the first value in [1, order-1], otherwise the
/// construction advances with `K = HMAC_K(V ‖ 0x00)`. Cannot fail: the
/// loop terminates with overwhelming probability on the first iteration
/// and is guaranteed to terminate eventually.
pub(crate) fn derive_nonce(key: &[u8; 32], digest: &[u8; 32]) -> Scalar {
    // bits2octets: int(h1) mod n, back to 32 bytes.
    let h1 = <Scalar as Reduce<U256>>::reduce(U256::from_be_slice(digest)).to_bytes();

    let mut v = [0x01u8; 32];
    let mut k = [0x00u8; 32];

    // Seed: K = HMAC_K(V ‖ 0x00 ‖ key ‖ h1), V = HMAC_K(V), then the same
    // round with separator 0x01.
    let mut seed = [0u8; 97];
    seed[..32].copy_from_slice(&v);
    seed[32] = 0x00;
    seed[33..65].copy_from_slice(key);
    seed[65..].copy_from_slice(&h1);
    k = sha256_hmac(&k, &seed);
    v = sha256_hmac(&k, &v);

    seed[..32].copy_from_slice(&v);
    seed[32] = 0x01;
    k = sha256_hmac(&k, &seed);
    v = sha256_hmac(&k, &v);
    seed.zeroize();

    loop {
        v = sha256_hmac(&k, &v);
        // bits2int of a 256-bit T is T itself; from_repr enforces < order.
        if let Some(candidate) = Option::<Scalar>::from(Scalar::from_repr(v.into())) {
            if !bool::from(candidate.is_zero()) {
                k.zeroize();
                v.zeroize();
                return candidate;
            }
        }
        let mut retry = [0u8; 33];
        retry[..32].copy_from_slice(&v);
        k = sha256_hmac(&k, &retry);
        v = sha256_hmac(&k, &v);
    }
}
