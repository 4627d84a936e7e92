//! # Domain Entities
//!
//! Core data structures shared by the personal-message and typed-message codecs.

use super::address;
use super::errors::SigningError;
use k256::ecdsa::{SigningKey, VerifyingKey};
use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as};
use std::fmt;
use zeroize::Zeroizing;

/// Keccak-256 output. Produced fresh per call, never cached.
pub type Digest = [u8; 32];

/// Length of the wire signature: r (32) || s (32) || marker (1).
pub const SIGNATURE_LENGTH: usize = 65;

/// Offset added to the recovery id to form the wire marker byte.
pub const RECOVERY_MARKER_OFFSET: u8 = 27;

// =============================================================================
// Keys
// =============================================================================

/// secp256k1 private key.
///
/// Consumed by the signing operations only. The scalar is zeroized on drop,
/// never serialized, and redacted from `Debug`.
#[derive(Clone)]
pub struct PrivateKey {
    signing_key: SigningKey,
}

impl PrivateKey {
    /// Create from a 32-byte big-endian scalar.
    ///
    /// # Errors
    /// `SigningError::InvalidKey` if the scalar is zero or not below the curve order.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, SigningError> {
        let signing_key =
            SigningKey::from_bytes(bytes.into()).map_err(|_| SigningError::InvalidKey)?;
        Ok(Self { signing_key })
    }

    /// Create from a hex string, with or without `0x`.
    pub fn from_hex(input: &str) -> Result<Self, SigningError> {
        let decoded = Zeroizing::new(
            hex::decode(strip_hex_prefix(input)).map_err(|_| SigningError::InvalidKey)?,
        );
        let bytes: Zeroizing<[u8; 32]> = Zeroizing::new(
            decoded
                .as_slice()
                .try_into()
                .map_err(|_| SigningError::InvalidKey)?,
        );
        Self::from_bytes(&bytes)
    }

    /// Public key of this scalar in uncompressed form.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_verifying_key(self.signing_key.verifying_key())
    }

    /// Address derived from this key's public key.
    pub fn address(&self) -> Address {
        self.public_key().address()
    }

    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

impl std::str::FromStr for PrivateKey {
    type Err = SigningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// secp256k1 public key (uncompressed format).
///
/// Format: 0x04 || x (32 bytes) || y (32 bytes) = 65 bytes total
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey {
    /// Uncompressed public key bytes
    #[serde_as(as = "Hex")]
    pub bytes: [u8; 65],
}

impl PublicKey {
    /// Create from uncompressed SEC1 bytes, validating the point.
    ///
    /// # Errors
    /// `SigningError::InvalidPublicKey` if the prefix is not `0x04` or the point
    /// is not on the curve.
    pub fn from_bytes(bytes: [u8; 65]) -> Result<Self, SigningError> {
        if !address::is_valid_uncompressed_point(&bytes) {
            return Err(SigningError::InvalidPublicKey);
        }
        Ok(Self { bytes })
    }

    pub(crate) fn from_verifying_key(key: &VerifyingKey) -> Self {
        let encoded = key.to_encoded_point(false);
        let mut bytes = [0u8; 65];
        bytes.copy_from_slice(encoded.as_bytes());
        Self { bytes }
    }

    /// Derived Ethereum address (last 20 bytes of keccak256(x || y)).
    pub fn address(&self) -> Address {
        Address(address::address_from_uncompressed(&self.bytes))
    }

    /// Lowercase hex with `0x`.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.bytes))
    }
}

// =============================================================================
// Address
// =============================================================================

/// Ethereum-style address derived from a public key.
///
/// Serializes as its EIP-55 checksummed form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Address(pub [u8; 20]);

impl Address {
    /// Address of an uncompressed public key.
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        public_key.address()
    }

    /// Raw address bytes.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Mixed-case EIP-55 rendering, `0x`-prefixed.
    pub fn to_checksum(&self) -> String {
        address::to_checksum_address(&self.0)
    }

    /// Parse a 40-digit hex address (with or without `0x`).
    ///
    /// All-lowercase and all-uppercase inputs are accepted as-is. A mixed-case
    /// input must carry a correct EIP-55 checksum.
    pub fn from_hex(input: &str) -> Result<Self, SigningError> {
        address::parse_address(input).map(Self)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum())
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.to_checksum()
    }
}

impl TryFrom<String> for Address {
    type Error = SigningError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl std::str::FromStr for Address {
    type Err = SigningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// =============================================================================
// Signatures
// =============================================================================

/// Recoverable ECDSA signature in Ethereum wire form.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSignature {
    /// R component (32 bytes)
    #[serde_as(as = "Hex")]
    pub r: [u8; 32],
    /// S component (32 bytes)
    #[serde_as(as = "Hex")]
    pub s: [u8; 32],
    /// Recovery marker (27 or 28 when produced by this crate)
    pub v: u8,
}

impl MessageSignature {
    /// Split 65 wire bytes into (r, s, v). The marker is not validated here.
    ///
    /// # Errors
    /// `SigningError::InvalidSignatureLength` unless exactly 65 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SigningError> {
        if bytes.len() != SIGNATURE_LENGTH {
            return Err(SigningError::InvalidSignatureLength(bytes.len()));
        }
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);
        Ok(Self { r, s, v: bytes[64] })
    }

    /// Parse a hex signature, with or without `0x`.
    pub fn from_hex(input: &str) -> Result<Self, SigningError> {
        let bytes = decode_hex(input)?;
        Self::from_bytes(&bytes)
    }

    /// r || s || v
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut out = [0u8; SIGNATURE_LENGTH];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }

    /// The 64-byte (r, s) component.
    pub fn rs(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&self.r);
        out[32..].copy_from_slice(&self.s);
        out
    }

    /// Recovery id decoded from the marker: `v - 27`, only for v in {27, 28}.
    pub fn recovery_id(&self) -> Result<u8, SigningError> {
        match self.v {
            27 | 28 => Ok(self.v - RECOVERY_MARKER_OFFSET),
            other => Err(SigningError::InvalidRecoveryMarker(other)),
        }
    }

    /// Lowercase hex without prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Lowercase hex with `0x`.
    pub fn to_prefixed_hex(&self) -> String {
        format!("0x{}", self.to_hex())
    }
}

impl fmt::Display for MessageSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_prefixed_hex())
    }
}

/// Result shape of a personal-message signing call: the digest that was
/// signed alongside the signature over it.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalMessageSignature {
    /// `hash_personal_message(message)`
    #[serde_as(as = "Hex")]
    pub message_hash: Digest,
    /// Signature over `message_hash`
    pub signature: MessageSignature,
}

// =============================================================================
// Hex helpers
// =============================================================================

/// Strip a leading `0x` / `0X`.
pub fn strip_hex_prefix(input: &str) -> &str {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}

/// Decode hex (any case, optional `0x`).
pub fn decode_hex(input: &str) -> Result<Vec<u8>, SigningError> {
    hex::decode(strip_hex_prefix(input)).map_err(|e| SigningError::InvalidHex(e.to_string()))
}
