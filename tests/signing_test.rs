//! End-to-end signing tests against published Ethereum vectors.

use ferrite_signer::hash::keccak256;
use ferrite_signer::{
    ecdsa, sign_hash, sign_message, sign_typed_data, PrivateKey, RecoverableSignature,
    SignableMessage, SignerError, TypedData,
};
use serde_json::json;

/// Key used throughout the web3.js `eth.accounts.sign` documentation.
const WEB3_DOC_KEY: &str = "4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

#[test]
fn test_personal_sign_matches_web3_vector() {
    // web3.js documentation example: sign "Some data" with the doc key.
    let sig = sign_message(SignableMessage::Personal(b"Some data"), WEB3_DOC_KEY).unwrap();
    assert_eq!(
        hex::encode(sig.r()),
        "b91467e570a6466aa9e9876cbcd013baba02900b8979d43fe208a4a4f339f5fd"
    );
    assert_eq!(
        hex::encode(sig.s()),
        "6007e74cd82e037b800186422fc2da167c747ef045e5d18a5f5d4300f8e1a029"
    );
    assert_eq!(sig.v(), 1);
    assert_eq!(sig.legacy_v(), 28);
}

#[test]
fn test_eip712_mail_signature_matches_published_vector() {
    // The signed Mail example from the EIP-712 specification; the signer's
    // key is keccak256("cow").
    let typed: TypedData = serde_json::from_value(json!({
        "types": {
            "EIP712Domain": [
                { "name": "name", "type": "string" },
                { "name": "version", "type": "string" },
                { "name": "chainId", "type": "uint256" },
                { "name": "verifyingContract", "type": "address" }
            ],
            "Person": [
                { "name": "name", "type": "string" },
                { "name": "wallet", "type": "address" }
            ],
            "Mail": [
                { "name": "from", "type": "Person" },
                { "name": "to", "type": "Person" },
                { "name": "contents", "type": "string" }
            ]
        },
        "primaryType": "Mail",
        "domain": {
            "name": "Ether Mail",
            "version": "1",
            "chainId": 1,
            "verifyingContract": "0xCcCCccccCCCCcCCCCCCcCcCccCcCCCcCcccccccC"
        },
        "message": {
            "from": { "name": "Cow", "wallet": "0xCD2a3d9F938E13CD947Ec05AbC7FE734Df8DD826" },
            "to": { "name": "Bob", "wallet": "0xbBbBBBBbbBBBbbbBbbBbbbbBBbBbbbbBbBbbBBbB" },
            "contents": "Hello, Bob!"
        }
    }))
    .unwrap();

    let cow_key = hex::encode(keccak256(b"cow"));
    let sig = sign_typed_data(&typed, &cow_key).unwrap();
    assert_eq!(
        hex::encode(sig.r()),
        "4355c47d63924e8a72e509b65029052eb6c299d53a04e167c5775fd466751c9d"
    );
    assert_eq!(
        hex::encode(sig.s()),
        "07299936d304c153f6443dfa05f40ff007d72911b6f72307f996231605b91562"
    );
    assert_eq!(sig.legacy_v(), 28);

    // The recovered signer must be the cow address from the example.
    let digest = typed.signing_digest().unwrap();
    let recovered = ecdsa::recover_public_key(&sig, &digest).unwrap();
    assert_eq!(
        recovered.to_address(),
        "0xCD2a3d9F938E13CD947Ec05AbC7FE734Df8DD826"
    );
}

#[test]
fn test_signing_is_deterministic() {
    let digest = keccak256(b"determinism");
    let first = sign_hash(&digest, WEB3_DOC_KEY).unwrap();
    let second = sign_hash(&digest, WEB3_DOC_KEY).unwrap();
    assert_eq!(first.to_bytes(), second.to_bytes());

    let a = sign_message(SignableMessage::Personal(b"again"), WEB3_DOC_KEY).unwrap();
    let b = sign_message(SignableMessage::Personal(b"again"), WEB3_DOC_KEY).unwrap();
    assert_eq!(a.to_bytes(), b.to_bytes());
}

#[test]
fn test_signature_recovers_signer() {
    let key = PrivateKey::from_hex(WEB3_DOC_KEY).unwrap();
    let digest = keccak256(b"who signed this?");
    let sig = sign_hash(&digest, WEB3_DOC_KEY).unwrap();

    let recovered = ecdsa::recover_public_key(&sig, &digest).unwrap();
    assert_eq!(recovered, key.pub_key());
}

#[test]
fn test_encoded_signature_round_trips() {
    let digest = keccak256(b"wire format");
    let sig = sign_hash(&digest, WEB3_DOC_KEY).unwrap();

    let bytes = sig.to_bytes();
    assert_eq!(bytes.len(), 65);
    assert_eq!(&bytes[..32], sig.r());
    assert_eq!(&bytes[32..64], sig.s());
    assert_eq!(bytes[64], sig.v());

    let decoded = RecoverableSignature::from_bytes(&bytes).unwrap();
    assert_eq!(decoded, sig);
}

#[test]
fn test_malformed_keys_are_rejected() {
    let digest = keccak256(b"never signed");

    // Not hex at all.
    assert!(matches!(
        sign_hash(&digest, "hello"),
        Err(SignerError::InvalidKeyFormat(_))
    ));
    // Too short (31 bytes).
    assert!(matches!(
        sign_hash(&digest, &"ab".repeat(31)),
        Err(SignerError::InvalidKeyFormat(_))
    ));
    // Zero scalar.
    assert!(matches!(
        sign_hash(&digest, &format!("0x{}", "00".repeat(32))),
        Err(SignerError::InvalidKeyRange)
    ));
    // The curve order itself.
    assert!(matches!(
        sign_hash(
            &digest,
            "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"
        ),
        Err(SignerError::InvalidKeyRange)
    ));
}

#[test]
fn test_wrong_digest_length_is_rejected() {
    assert!(matches!(
        sign_hash(&[0u8; 20], WEB3_DOC_KEY),
        Err(SignerError::InvalidDigestLength {
            expected: 32,
            got: 20
        })
    ));
}

#[test]
fn test_prefixed_and_bare_keys_sign_identically() {
    let digest = keccak256(b"prefix");
    let bare = sign_hash(&digest, WEB3_DOC_KEY).unwrap();
    let prefixed = sign_hash(&digest, &format!("0x{WEB3_DOC_KEY}")).unwrap();
    assert_eq!(bare.to_bytes(), prefixed.to_bytes());
}
