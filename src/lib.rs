//! Ethereum-compatible recoverable ECDSA signing over secp256k1.
//!
//! This crate is the cryptographic core of the Ferrite signer:
//! - Private key parsing and validation (hex, with or without `0x` prefix)
//! - Digest preparation: raw 32-byte hashes, EIP-191 personal messages,
//!   and EIP-712 typed data
//! - Deterministic RFC 6979 nonce derivation (HMAC-SHA-256)
//! - The ECDSA computation itself with low-S normalization and
//!   closed-form recovery-id selection
//! - 65-byte `r ‖ s ‖ v` signature encoding
//!
//! Every operation is a pure function of its explicit inputs: there is no
//! global state, no randomness, and no I/O. Identical (key, digest) pairs
//! always produce byte-identical signatures. Call-site integration (how an
//! application routes an existing library's signing calls through these
//! functions) is deliberately out of scope; the surface here is three
//! explicit functions: [`sign_hash`], [`sign_message`], and
//! [`sign_typed_data`].

pub mod hash;
pub mod ec;
pub mod ecdsa;
pub mod eip712;
pub mod message;

mod error;
mod nonce;
mod sign;

pub use ec::{PrivateKey, PublicKey, RecoverableSignature};
pub use eip712::TypedData;
pub use error::SignerError;
pub use sign::{sign_hash, sign_message, sign_typed_data, SignableMessage};
