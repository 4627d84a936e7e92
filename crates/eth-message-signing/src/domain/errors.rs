//! # Signing Errors
//!
//! Two error types for the two failure policies:
//!
//! - [`SigningError`] surfaces on the fail-loud paths (signing, typed-message
//!   recovery). Callers must handle it.
//! - [`RecoveryError`] is the diagnostic reason behind an absent result on the
//!   best-effort personal-message recovery path. It is never required to be
//!   handled; the public recovery functions collapse it to `None`.

use thiserror::Error;

/// Errors raised by the fail-loud operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SigningError {
    /// The private key is not a valid secp256k1 scalar in `[1, n-1]`
    #[error("Invalid private key")]
    InvalidKey,

    /// The input document does not parse or does not match the typed-data schema
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// The signature is not exactly 65 bytes
    #[error("Invalid signature length: expected 65 bytes, got {0}")]
    InvalidSignatureLength(usize),

    /// A hex string could not be decoded
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// The trailing recovery marker is not 27 or 28
    #[error("Invalid recovery marker: {0}")]
    InvalidRecoveryMarker(u8),

    /// The (r, s) pair is out of range or has a high S value
    #[error("Non-canonical signature")]
    NonCanonicalSignature,

    /// Curve public-key recovery failed for this digest and signature
    #[error("Failed to recover public key")]
    RecoveryFailed,

    /// Bytes do not encode a valid uncompressed secp256k1 point
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// Bytes do not encode a 20-byte address, or the checksum casing is wrong
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// The curve library refused to sign the digest
    #[error("Signing failed")]
    SigningFailed,
}

/// Why a best-effort personal-message recovery produced no signer.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RecoveryError {
    /// Wrong length, or (r, s) not in `[1, n-1]`
    #[error("Malformed signature")]
    MalformedSignature,

    /// Recovery marker outside {27, 28}
    #[error("Invalid recovery marker: {0}")]
    InvalidRecoveryMarker(u8),

    /// High S value (EIP-2)
    #[error("Non-canonical signature (high S value)")]
    NonCanonicalSignature,

    /// No public key corresponds to this signature and digest
    #[error("Point not recoverable")]
    Unrecoverable,

    /// The recovered point failed validation
    #[error("Recovered point is invalid")]
    InvalidPoint,
}

impl From<RecoveryError> for SigningError {
    fn from(err: RecoveryError) -> Self {
        match err {
            RecoveryError::MalformedSignature => SigningError::NonCanonicalSignature,
            RecoveryError::InvalidRecoveryMarker(v) => SigningError::InvalidRecoveryMarker(v),
            RecoveryError::NonCanonicalSignature => SigningError::NonCanonicalSignature,
            RecoveryError::Unrecoverable => SigningError::RecoveryFailed,
            RecoveryError::InvalidPoint => SigningError::InvalidPublicKey,
        }
    }
}
