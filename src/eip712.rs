//! EIP-712 typed structured data hashing.
//!
//! Implements the type-driven recursive encoding scheme: atomic values are
//! encoded in place as 32-byte words, dynamic values (`bytes`, `string`)
//! are hashed, arrays hash the concatenation of their element encodings,
//! and nested structs are hashed recursively. The signing digest frames
//! the domain separator and message struct hash with the `0x19 0x01`
//! version bytes.
//!
//! Type graphs must admit a total encoding order: referencing an undefined
//! struct type, or any cycle among struct definitions, is rejected with
//! [`SignerError::InvalidTypeDefinition`].

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;
use serde_json::Value;

use crate::hash::keccak256;
use crate::SignerError;

/// A single field of a struct type: its name and declared type.
#[derive(Debug, Clone, Deserialize)]
pub struct TypedDataField {
    /// The field name.
    pub name: String,
    /// The declared type, e.g. `uint256`, `Person`, `bytes32[2]`.
    #[serde(rename = "type")]
    pub type_name: String,
}

/// An EIP-712 typed-data value in the standard JSON shape:
/// type definitions, a primary type, a domain record, and a message record.
///
/// Deserializes directly from the wire format produced by Ethereum tooling:
///
/// ```json
/// {
///   "types": { "EIP712Domain": [...], "Mail": [...] },
///   "primaryType": "Mail",
///   "domain": { ... },
///   "message": { ... }
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct TypedData {
    /// Struct type definitions, keyed by type name.
    pub types: BTreeMap<String, Vec<TypedDataField>>,
    /// The struct type of `message`.
    #[serde(rename = "primaryType")]
    pub primary_type: String,
    /// The signing domain record.
    pub domain: Value,
    /// The message record to sign.
    pub message: Value,
}

/// The standard `EIP712Domain` fields in their canonical order, used to
/// synthesize the domain type when the caller's `types` omits it.
const DOMAIN_FIELDS: [(&str, &str); 5] = [
    ("name", "string"),
    ("version", "string"),
    ("chainId", "uint256"),
    ("verifyingContract", "address"),
    ("salt", "bytes32"),
];

impl TypedData {
    /// Build the canonical `encodeType` string for a struct type:
    /// the type itself followed by every transitively referenced struct
    /// type in alphabetical order, each as `Name(type1 name1,type2 name2)`.
    ///
    /// # Arguments
    /// * `type_name` - The struct type to encode.
    ///
    /// # Returns
    /// The encoded type string, or [`SignerError::InvalidTypeDefinition`]
    /// if the type is undefined, references an undefined or malformed type,
    /// or participates in a cycle.
    pub fn encode_type(&self, type_name: &str) -> Result<String, SignerError> {
        let mut deps = BTreeSet::new();
        let mut path = vec![type_name.to_string()];
        self.collect_dependencies(type_name, &mut path, &mut deps)?;
        deps.remove(type_name);

        let mut out = String::new();
        for name in std::iter::once(type_name).chain(deps.iter().map(String::as_str)) {
            let fields = self
                .types
                .get(name)
                .ok_or_else(|| undefined_type(name))?;
            out.push_str(name);
            out.push('(');
            for (i, field) in fields.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&field.type_name);
                out.push(' ');
                out.push_str(&field.name);
            }
            out.push(')');
        }
        Ok(out)
    }

    /// The keccak-256 hash of [`encode_type`](Self::encode_type).
    pub fn type_hash(&self, type_name: &str) -> Result<[u8; 32], SignerError> {
        Ok(keccak256(self.encode_type(type_name)?.as_bytes()))
    }

    /// Hash a struct value: `keccak256(typeHash ‖ encode(field_1) ‖ ...)`.
    ///
    /// # Arguments
    /// * `type_name` - The struct type of `value`.
    /// * `value` - A JSON object with one entry per declared field.
    pub fn hash_struct(&self, type_name: &str, value: &Value) -> Result<[u8; 32], SignerError> {
        let type_hash = self.type_hash(type_name)?;
        let fields = self
            .types
            .get(type_name)
            .ok_or_else(|| undefined_type(type_name))?;
        let object = value.as_object().ok_or_else(|| {
            SignerError::InvalidTypedData(format!("value for `{}` is not an object", type_name))
        })?;

        let mut encoded = Vec::with_capacity(32 * (fields.len() + 1));
        encoded.extend_from_slice(&type_hash);
        for field in fields {
            let field_value = object.get(&field.name).ok_or_else(|| {
                SignerError::InvalidTypedData(format!(
                    "missing value for field `{}.{}`",
                    type_name, field.name
                ))
            })?;
            encoded.extend_from_slice(&self.encode_value(&field.type_name, field_value)?);
        }
        Ok(keccak256(&encoded))
    }

    /// Hash the signing domain: `hashStruct(EIP712Domain, domain)`.
    ///
    /// If `types` has no `EIP712Domain` entry, one is synthesized from the
    /// standard field order filtered by the fields present in the domain
    /// record; a domain field outside the standard set then has no type to
    /// encode with and is rejected.
    pub fn domain_separator(&self) -> Result<[u8; 32], SignerError> {
        if self.types.contains_key("EIP712Domain") {
            return self.hash_struct("EIP712Domain", &self.domain);
        }
        let with_domain = self.with_default_domain_type()?;
        with_domain.hash_struct("EIP712Domain", &with_domain.domain)
    }

    /// Compute the digest to sign:
    /// `keccak256(0x19 ‖ 0x01 ‖ domainSeparator ‖ hashStruct(primaryType, message))`.
    pub fn signing_digest(&self) -> Result<[u8; 32], SignerError> {
        let mut preimage = Vec::with_capacity(2 + 32 + 32);
        preimage.extend_from_slice(&[0x19, 0x01]);
        preimage.extend_from_slice(&self.domain_separator()?);
        preimage.extend_from_slice(&self.hash_struct(&self.primary_type, &self.message)?);
        Ok(keccak256(&preimage))
    }

    /// Walk the type graph from `type_name`, collecting referenced struct
    /// types into `deps`. `path` carries the in-progress chain; re-entering
    /// a type on the path means the graph has no total encoding order.
    fn collect_dependencies(
        &self,
        type_name: &str,
        path: &mut Vec<String>,
        deps: &mut BTreeSet<String>,
    ) -> Result<(), SignerError> {
        let fields = self
            .types
            .get(type_name)
            .ok_or_else(|| undefined_type(type_name))?;
        for field in fields {
            let base = base_type(&field.type_name);
            if self.types.contains_key(base) {
                if path.iter().any(|seen| seen == base) {
                    return Err(SignerError::InvalidTypeDefinition(format!(
                        "cyclic type reference involving `{}`",
                        base
                    )));
                }
                if deps.insert(base.to_string()) {
                    path.push(base.to_string());
                    self.collect_dependencies(base, path, deps)?;
                    path.pop();
                }
            } else {
                validate_atomic(base)?;
            }
        }
        Ok(())
    }

    /// Encode a single value as a 32-byte word per its declared type.
    fn encode_value(&self, type_name: &str, value: &Value) -> Result<[u8; 32], SignerError> {
        // Arrays: strip the last bracket group to get the element type, so
        // `uint8[2][]` is a dynamic array of `uint8[2]`.
        if let Some(open) = type_name.rfind('[') {
            if !type_name.ends_with(']') {
                return Err(SignerError::InvalidTypeDefinition(format!(
                    "malformed array type `{}`",
                    type_name
                )));
            }
            let element_type = &type_name[..open];
            let length_spec = &type_name[open + 1..type_name.len() - 1];
            let items = value.as_array().ok_or_else(|| {
                SignerError::InvalidTypedData(format!("value for `{}` is not an array", type_name))
            })?;
            if !length_spec.is_empty() {
                let expected: usize = length_spec.parse().map_err(|_| {
                    SignerError::InvalidTypeDefinition(format!(
                        "malformed array length in `{}`",
                        type_name
                    ))
                })?;
                if items.len() != expected {
                    return Err(SignerError::InvalidTypedData(format!(
                        "array `{}` expects {} elements, got {}",
                        type_name,
                        expected,
                        items.len()
                    )));
                }
            }
            let mut encoded = Vec::with_capacity(items.len() * 32);
            for item in items {
                encoded.extend_from_slice(&self.encode_value(element_type, item)?);
            }
            return Ok(keccak256(&encoded));
        }

        if self.types.contains_key(type_name) {
            return self.hash_struct(type_name, value);
        }

        match type_name {
            "string" => {
                let s = value.as_str().ok_or_else(|| expected("string", value))?;
                Ok(keccak256(s.as_bytes()))
            }
            "bytes" => Ok(keccak256(&decode_hex_value(value)?)),
            "bool" => {
                let b = value.as_bool().ok_or_else(|| expected("bool", value))?;
                let mut out = [0u8; 32];
                out[31] = u8::from(b);
                Ok(out)
            }
            "address" => {
                let bytes = decode_hex_value(value)?;
                if bytes.len() != 20 {
                    return Err(SignerError::InvalidTypedData(format!(
                        "address must be 20 bytes, got {}",
                        bytes.len()
                    )));
                }
                let mut out = [0u8; 32];
                out[12..].copy_from_slice(&bytes);
                Ok(out)
            }
            other => {
                if let Some(width) = fixed_bytes_width(other) {
                    let bytes = decode_hex_value(value)?;
                    if bytes.len() != width {
                        return Err(SignerError::InvalidTypedData(format!(
                            "`{}` must be {} bytes, got {}",
                            other,
                            width,
                            bytes.len()
                        )));
                    }
                    let mut out = [0u8; 32];
                    out[..width].copy_from_slice(&bytes);
                    return Ok(out);
                }
                if let Some(bits) = integer_width(other, "uint") {
                    return encode_integer(value, bits, false);
                }
                if let Some(bits) = integer_width(other, "int") {
                    return encode_integer(value, bits, true);
                }
                Err(undefined_type(other))
            }
        }
    }

    /// Clone with an `EIP712Domain` entry synthesized from the standard
    /// field order, filtered by the fields present in the domain record.
    fn with_default_domain_type(&self) -> Result<TypedData, SignerError> {
        let object = self.domain.as_object().ok_or_else(|| {
            SignerError::InvalidTypedData("domain is not an object".to_string())
        })?;
        for key in object.keys() {
            if !DOMAIN_FIELDS.iter().any(|(name, _)| name == key) {
                return Err(SignerError::InvalidTypeDefinition(format!(
                    "domain field `{}` has no type definition",
                    key
                )));
            }
        }
        let fields = DOMAIN_FIELDS
            .iter()
            .filter(|(name, _)| object.contains_key(*name))
            .map(|(name, type_name)| TypedDataField {
                name: (*name).to_string(),
                type_name: (*type_name).to_string(),
            })
            .collect();

        let mut types = self.types.clone();
        types.insert("EIP712Domain".to_string(), fields);
        Ok(TypedData {
            types,
            primary_type: self.primary_type.clone(),
            domain: self.domain.clone(),
            message: self.message.clone(),
        })
    }
}

/// The struct or atomic type underlying an array type: everything before
/// the first bracket.
fn base_type(type_name: &str) -> &str {
    match type_name.find('[') {
        Some(idx) => &type_name[..idx],
        None => type_name,
    }
}

/// Parse `uintN` / `intN` widths: 8..=256 in steps of 8.
fn integer_width(type_name: &str, prefix: &str) -> Option<usize> {
    type_name
        .strip_prefix(prefix)?
        .parse::<usize>()
        .ok()
        .filter(|bits| *bits >= 8 && *bits <= 256 && bits % 8 == 0)
}

/// Parse `bytesN` widths: 1..=32. Plain `bytes` is dynamic, not fixed.
fn fixed_bytes_width(type_name: &str) -> Option<usize> {
    type_name
        .strip_prefix("bytes")?
        .parse::<usize>()
        .ok()
        .filter(|width| *width >= 1 && *width <= 32)
}

/// Reject type names that are neither struct types nor atomic types.
fn validate_atomic(type_name: &str) -> Result<(), SignerError> {
    let ok = matches!(type_name, "address" | "bool" | "string" | "bytes")
        || fixed_bytes_width(type_name).is_some()
        || integer_width(type_name, "uint").is_some()
        || integer_width(type_name, "int").is_some();
    if ok {
        Ok(())
    } else {
        Err(undefined_type(type_name))
    }
}

fn undefined_type(type_name: &str) -> SignerError {
    SignerError::InvalidTypeDefinition(format!("undefined type `{}`", type_name))
}

fn expected(kind: &str, value: &Value) -> SignerError {
    SignerError::InvalidTypedData(format!("expected a {} value, got {}", kind, value))
}

/// Decode a `0x`-prefixed (or bare) hex string value into bytes.
fn decode_hex_value(value: &Value) -> Result<Vec<u8>, SignerError> {
    let s = value.as_str().ok_or_else(|| expected("hex string", value))?;
    let stripped = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    // Tolerate odd-length hex by left-padding a nibble.
    let padded;
    let to_decode = if stripped.len() % 2 == 1 {
        padded = format!("0{}", stripped);
        &padded
    } else {
        stripped
    };
    hex::decode(to_decode).map_err(|e| SignerError::InvalidTypedData(format!("invalid hex: {}", e)))
}

/// Encode an integer value as a 32-byte word, range-checked against its
/// declared width. Negative values use 256-bit two's complement.
fn encode_integer(value: &Value, bits: usize, signed: bool) -> Result<[u8; 32], SignerError> {
    let (negative, magnitude) = integer_magnitude(value)?;

    if negative && !signed {
        return Err(SignerError::InvalidTypedData(
            "negative value for unsigned type".to_string(),
        ));
    }
    let in_range = if !signed {
        fits_bits(&magnitude, bits)
    } else if negative {
        // Two's complement admits -2^(bits-1) exactly.
        fits_bits(&magnitude, bits - 1) || equals_pow2(&magnitude, bits - 1)
    } else {
        fits_bits(&magnitude, bits - 1)
    };
    if !in_range {
        return Err(SignerError::InvalidTypedData(format!(
            "value out of range for {}-bit {} integer",
            bits,
            if signed { "signed" } else { "unsigned" }
        )));
    }

    if negative {
        Ok(twos_complement(&magnitude))
    } else {
        Ok(magnitude)
    }
}

/// Extract (sign, magnitude) from a JSON number or a decimal / hex string.
fn integer_magnitude(value: &Value) -> Result<(bool, [u8; 32]), SignerError> {
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                let mut out = [0u8; 32];
                out[24..].copy_from_slice(&u.to_be_bytes());
                Ok((false, out))
            } else if let Some(i) = n.as_i64() {
                let mut out = [0u8; 32];
                out[24..].copy_from_slice(&i.unsigned_abs().to_be_bytes());
                Ok((i < 0, out))
            } else {
                Err(SignerError::InvalidTypedData(format!(
                    "non-integer number {}",
                    n
                )))
            }
        }
        Value::String(s) => {
            let (negative, body) = match s.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, s.as_str()),
            };
            if body.starts_with("0x") || body.starts_with("0X") {
                let bytes = decode_hex_value(&Value::String(body.to_string()))?;
                if bytes.len() > 32 {
                    return Err(SignerError::InvalidTypedData(
                        "integer wider than 256 bits".to_string(),
                    ));
                }
                let mut out = [0u8; 32];
                out[32 - bytes.len()..].copy_from_slice(&bytes);
                Ok((negative && !is_zero(&out), out))
            } else {
                let out = decimal_to_be_bytes(body)?;
                Ok((negative && !is_zero(&out), out))
            }
        }
        other => Err(expected("integer", other)),
    }
}

/// Parse an ASCII decimal string into a 32-byte big-endian integer.
fn decimal_to_be_bytes(s: &str) -> Result<[u8; 32], SignerError> {
    if s.is_empty() {
        return Err(SignerError::InvalidTypedData(
            "empty integer string".to_string(),
        ));
    }
    let mut out = [0u8; 32];
    for c in s.bytes() {
        let digit = (c as char).to_digit(10).ok_or_else(|| {
            SignerError::InvalidTypedData(format!("invalid decimal integer `{}`", s))
        })? as u16;
        let mut carry = digit;
        for byte in out.iter_mut().rev() {
            let acc = (*byte as u16) * 10 + carry;
            *byte = (acc & 0xff) as u8;
            carry = acc >> 8;
        }
        if carry != 0 {
            return Err(SignerError::InvalidTypedData(
                "integer wider than 256 bits".to_string(),
            ));
        }
    }
    Ok(out)
}

/// Whether the big-endian value is strictly below 2^bits.
fn fits_bits(bytes: &[u8; 32], bits: usize) -> bool {
    if bits >= 256 {
        return true;
    }
    let lead_bytes = (256 - bits) / 8;
    let lead_bits = (256 - bits) % 8;
    if bytes[..lead_bytes].iter().any(|&b| b != 0) {
        return false;
    }
    lead_bits == 0 || (bytes[lead_bytes] >> (8 - lead_bits)) == 0
}

/// Whether the big-endian value equals exactly 2^bits.
fn equals_pow2(bytes: &[u8; 32], bits: usize) -> bool {
    if bits >= 256 {
        return false;
    }
    let idx = 32 - bits / 8 - 1;
    let expected = 1u8 << (bits % 8);
    bytes
        .iter()
        .enumerate()
        .all(|(i, &b)| if i == idx { b == expected } else { b == 0 })
}

fn is_zero(bytes: &[u8; 32]) -> bool {
    bytes.iter().all(|&b| b == 0)
}

/// 256-bit two's complement negation of a magnitude.
fn twos_complement(magnitude: &[u8; 32]) -> [u8; 32] {
    let mut out = [0u8; 32];
    let mut carry = 1u16;
    for i in (0..32).rev() {
        let acc = (!magnitude[i] as u16) + carry;
        out[i] = (acc & 0xff) as u8;
        carry = acc >> 8;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// The example from the EIP-712 specification.
    fn mail_example() -> TypedData {
        serde_json::from_value(json!({
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
        .unwrap()
    }

    #[test]
    fn test_encode_type() {
        let data = mail_example();
        assert_eq!(
            data.encode_type("Mail").unwrap(),
            "Mail(Person from,Person to,string contents)Person(string name,address wallet)"
        );
        assert_eq!(
            data.encode_type("Person").unwrap(),
            "Person(string name,address wallet)"
        );
    }

    #[test]
    fn test_type_hash() {
        let data = mail_example();
        assert_eq!(
            hex::encode(data.type_hash("Mail").unwrap()),
            "a0cedeb2dc280ba39b857546d74f5549c3a1d7bdc2dd96bf881f76108e23dac2"
        );
    }

    #[test]
    fn test_domain_separator() {
        let data = mail_example();
        assert_eq!(
            hex::encode(data.domain_separator().unwrap()),
            "f2cee375fa42b42143804025fc449deafd50cc031ca257e0b194a650a912090f"
        );
    }

    #[test]
    fn test_hash_struct_message() {
        let data = mail_example();
        assert_eq!(
            hex::encode(data.hash_struct("Mail", &data.message).unwrap()),
            "c52c0ee5d84264471806290a3f2c4cecfc5490626bf912d01f240d7a274b371e"
        );
    }

    #[test]
    fn test_signing_digest() {
        let data = mail_example();
        assert_eq!(
            hex::encode(data.signing_digest().unwrap()),
            "be609aee343fb3c4b28e1df9e632fca64fcfaede20f02e86244efddf30957bd2"
        );
    }

    #[test]
    fn test_synthesized_domain_type() {
        // Same data without an explicit EIP712Domain entry must hash
        // identically: the standard fields are synthesized in order.
        let mut data = mail_example();
        data.types.remove("EIP712Domain");
        assert_eq!(
            hex::encode(data.domain_separator().unwrap()),
            "f2cee375fa42b42143804025fc449deafd50cc031ca257e0b194a650a912090f"
        );
    }

    #[test]
    fn test_undefined_type_is_rejected() {
        let data: TypedData = serde_json::from_value(json!({
            "types": {
                "Order": [ { "name": "maker", "type": "Trader" } ]
            },
            "primaryType": "Order",
            "domain": { "name": "Test" },
            "message": { "maker": {} }
        }))
        .unwrap();
        assert!(matches!(
            data.encode_type("Order"),
            Err(SignerError::InvalidTypeDefinition(_))
        ));
    }

    #[test]
    fn test_cyclic_types_are_rejected() {
        let data: TypedData = serde_json::from_value(json!({
            "types": {
                "A": [ { "name": "b", "type": "B" } ],
                "B": [ { "name": "a", "type": "A" } ]
            },
            "primaryType": "A",
            "domain": {},
            "message": {}
        }))
        .unwrap();
        assert!(matches!(
            data.encode_type("A"),
            Err(SignerError::InvalidTypeDefinition(_))
        ));

        // Self-reference is the smallest cycle.
        let recursive: TypedData = serde_json::from_value(json!({
            "types": {
                "Node": [ { "name": "next", "type": "Node" } ]
            },
            "primaryType": "Node",
            "domain": {},
            "message": {}
        }))
        .unwrap();
        assert!(matches!(
            recursive.encode_type("Node"),
            Err(SignerError::InvalidTypeDefinition(_))
        ));
    }

    #[test]
    fn test_missing_field_value_is_rejected() {
        let mut data = mail_example();
        data.message.as_object_mut().unwrap().remove("contents");
        assert!(matches!(
            data.hash_struct("Mail", &data.message),
            Err(SignerError::InvalidTypedData(_))
        ));
    }

    #[test]
    fn test_array_encoding() {
        let data: TypedData = serde_json::from_value(json!({
            "types": {
                "Batch": [ { "name": "ids", "type": "uint256[]" } ]
            },
            "primaryType": "Batch",
            "domain": {},
            "message": { "ids": [1, 2, 3] }
        }))
        .unwrap();

        // uint256[] hashes the concatenation of the 32-byte words.
        let mut expected_items = Vec::new();
        for id in [1u64, 2, 3] {
            let mut word = [0u8; 32];
            word[24..].copy_from_slice(&id.to_be_bytes());
            expected_items.extend_from_slice(&word);
        }
        let mut encoded = Vec::new();
        encoded.extend_from_slice(&data.type_hash("Batch").unwrap());
        encoded.extend_from_slice(&keccak256(&expected_items));
        assert_eq!(
            data.hash_struct("Batch", &data.message).unwrap(),
            keccak256(&encoded)
        );
    }

    #[test]
    fn test_fixed_array_length_mismatch() {
        let data: TypedData = serde_json::from_value(json!({
            "types": {
                "Pair": [ { "name": "values", "type": "uint8[2]" } ]
            },
            "primaryType": "Pair",
            "domain": {},
            "message": { "values": [1, 2, 3] }
        }))
        .unwrap();
        assert!(matches!(
            data.hash_struct("Pair", &data.message),
            Err(SignerError::InvalidTypedData(_))
        ));
    }

    #[test]
    fn test_integer_encodings() {
        // Decimal string, hex string, and JSON number agree.
        let as_number = encode_integer(&json!(255), 256, false).unwrap();
        let as_decimal = encode_integer(&json!("255"), 256, false).unwrap();
        let as_hex = encode_integer(&json!("0xff"), 256, false).unwrap();
        assert_eq!(as_number, as_decimal);
        assert_eq!(as_number, as_hex);
        assert_eq!(as_number[31], 0xff);

        // -1 as int256 is all ones.
        let minus_one = encode_integer(&json!(-1), 256, true).unwrap();
        assert_eq!(minus_one, [0xffu8; 32]);

        // int8 boundary values.
        assert!(encode_integer(&json!(-128), 8, true).is_ok());
        assert!(encode_integer(&json!(127), 8, true).is_ok());
        assert!(encode_integer(&json!(128), 8, true).is_err());
        assert!(encode_integer(&json!(-129), 8, true).is_err());

        // uint8 overflow and negative.
        assert!(encode_integer(&json!(256), 8, false).is_err());
        assert!(encode_integer(&json!(-1), 8, false).is_err());

        // Big decimal string beyond u64.
        let big = encode_integer(&json!("340282366920938463463374607431768211456"), 256, false)
            .unwrap(); // 2^128
        assert_eq!(big[15], 1);
        assert!(big[16..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_bytes_and_bool_encodings() {
        let data = mail_example();
        // bytes32 must match its width exactly.
        let word = data.encode_value(
            "bytes32",
            &json!("0x0101010101010101010101010101010101010101010101010101010101010101"),
        );
        assert!(word.is_ok());
        assert!(data.encode_value("bytes32", &json!("0x01")).is_err());

        // bytes4 is right-padded.
        let padded = data.encode_value("bytes4", &json!("0xdeadbeef")).unwrap();
        assert_eq!(&padded[..4], &[0xde, 0xad, 0xbe, 0xef]);
        assert!(padded[4..].iter().all(|&b| b == 0));

        // Dynamic bytes are hashed.
        let hashed = data.encode_value("bytes", &json!("0xdeadbeef")).unwrap();
        assert_eq!(hashed, keccak256(&[0xde, 0xad, 0xbe, 0xef]));

        let truthy = data.encode_value("bool", &json!(true)).unwrap();
        assert_eq!(truthy[31], 1);
    }
}
