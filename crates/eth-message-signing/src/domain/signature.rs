//! # Recoverable ECDSA (secp256k1)
//!
//! Digest signing and public-key recovery shared by both codecs.
//!
//! ## Security Notes
//!
//! - RFC 6979 deterministic nonces, no RNG dependency for signing
//! - Low-S normalization on signing, high S rejected on recovery (EIP-2)
//! - R and S must be in [1, n-1]
//! - Wire marker = recovery_id + 27; only 27 and 28 decode

use super::entities::{Digest, MessageSignature, PrivateKey, PublicKey, RECOVERY_MARKER_OFFSET};
use super::errors::{RecoveryError, SigningError};
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use k256::elliptic_curve::scalar::IsHigh;

/// Sign a 32-byte digest, producing the 65-byte wire signature.
///
/// The signature is deterministic (RFC 6979) and always low-S.
pub fn sign_digest(
    digest: &Digest,
    private_key: &PrivateKey,
) -> Result<MessageSignature, SigningError> {
    let (signature, recovery_id) = private_key
        .signing_key()
        .sign_prehash_recoverable(digest)
        .map_err(|_| SigningError::SigningFailed)?;

    let bytes = signature.to_bytes();
    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&bytes[..32]);
    s.copy_from_slice(&bytes[32..]);

    Ok(MessageSignature {
        r,
        s,
        v: recovery_id.to_byte() + RECOVERY_MARKER_OFFSET,
    })
}

/// Recover the signer's public key from raw wire bytes.
///
/// Every failure carries its reason; nothing panics on adversarial input.
pub fn recover_public_key(digest: &Digest, signature: &[u8]) -> Result<PublicKey, RecoveryError> {
    let parsed =
        MessageSignature::from_bytes(signature).map_err(|_| RecoveryError::MalformedSignature)?;
    recover_from_signature(digest, &parsed)
}

/// Recover the signer's public key from a parsed signature.
pub fn recover_from_signature(
    digest: &Digest,
    signature: &MessageSignature,
) -> Result<PublicKey, RecoveryError> {
    let recovery_id = parse_recovery_id(signature.v)?;

    // R and S in [1, n-1]
    let sig =
        Signature::from_slice(&signature.rs()).map_err(|_| RecoveryError::MalformedSignature)?;

    if bool::from(sig.s().is_high()) {
        return Err(RecoveryError::NonCanonicalSignature);
    }

    let recovered = VerifyingKey::recover_from_prehash(digest, &sig, recovery_id)
        .map_err(|_| RecoveryError::Unrecoverable)?;

    // Uncompressed point, re-validated (on curve, not identity)
    let candidate = PublicKey::from_verifying_key(&recovered);
    PublicKey::from_bytes(candidate.bytes).map_err(|_| RecoveryError::InvalidPoint)
}

/// Decode the wire marker: 27 → 0, 28 → 1, anything else is malformed.
fn parse_recovery_id(v: u8) -> Result<RecoveryId, RecoveryError> {
    let id = match v {
        27 | 28 => v - RECOVERY_MARKER_OFFSET,
        _ => return Err(RecoveryError::InvalidRecoveryMarker(v)),
    };

    RecoveryId::from_byte(id).ok_or(RecoveryError::InvalidRecoveryMarker(v))
}

// =============================================================================
// TEST HELPERS
// =============================================================================
