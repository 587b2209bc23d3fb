//! Elliptic curve types for secp256k1.
//!
//! Provides the private key (parsing, validation, zeroization), the public
//! key (serialization, verification, Ethereum address derivation), and the
//! recoverable signature triple.

pub mod private_key;
pub mod public_key;
pub mod signature;

pub use private_key::PrivateKey;
pub use public_key::PublicKey;
pub use signature::RecoverableSignature;
