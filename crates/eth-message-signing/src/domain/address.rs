//! # Address Derivation
//!
//! Public key → address, and the EIP-55 mixed-case checksum.

use super::entities::strip_hex_prefix;
use super::errors::SigningError;
use super::hashing::keccak256;
use k256::ecdsa::VerifyingKey;

/// Derive an address from a 65-byte uncompressed public key.
///
/// address = keccak256(x || y)[12..32]
pub fn address_from_uncompressed(public_key: &[u8; 65]) -> [u8; 20] {
    // Skip the 0x04 prefix
    let hash = keccak256(&public_key[1..]);

    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

/// Render an address in EIP-55 checksummed form, `0x`-prefixed.
///
/// Each hex letter is uppercased when the matching nibble of
/// keccak256(lowercase_hex) is >= 8.
pub fn to_checksum_address(address: &[u8; 20]) -> String {
    let lower = hex::encode(address);
    let hash = keccak256(lower.as_bytes());

    let mut result = String::with_capacity(42);
    result.push_str("0x");

    for (i, c) in lower.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            hash[i / 2] >> 4
        } else {
            hash[i / 2] & 0x0f
        };

        if nibble >= 8 {
            result.push(c.to_ascii_uppercase());
        } else {
            result.push(c);
        }
    }

    result
}

/// Whether `input` is an exactly-correct EIP-55 checksummed address.
pub fn is_valid_checksum(input: &str) -> bool {
    let Some(body) = input.strip_prefix("0x") else {
        return false;
    };
    match decode_address(body) {
        Ok(bytes) => to_checksum_address(&bytes)[2..] == *body,
        Err(_) => false,
    }
}

/// Parse a hex address.
///
/// Single-case input is taken as unchecksummed. Mixed-case input must match
/// its EIP-55 checksum exactly.
pub fn parse_address(input: &str) -> Result<[u8; 20], SigningError> {
    let body = strip_hex_prefix(input);
    let bytes = decode_address(body)?;

    let has_lower = body.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = body.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper && to_checksum_address(&bytes)[2..] != *body {
        return Err(SigningError::InvalidAddress(format!(
            "checksum mismatch for {}",
            input
        )));
    }

    Ok(bytes)
}

fn decode_address(body: &str) -> Result<[u8; 20], SigningError> {
    if body.len() != 40 {
        return Err(SigningError::InvalidAddress(format!(
            "expected 40 hex digits, got {}",
            body.len()
        )));
    }
    let decoded = hex::decode(body).map_err(|e| SigningError::InvalidAddress(e.to_string()))?;

    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&decoded);
    Ok(bytes)
}

/// Check that 65 bytes are a valid uncompressed secp256k1 point
/// (0x04 prefix, on the curve, not the identity).
pub fn is_valid_uncompressed_point(bytes: &[u8; 65]) -> bool {
    bytes[0] == 0x04 && VerifyingKey::from_sec1_bytes(bytes).is_ok()
}
