//! # Personal Message Codec
//!
//! Signing and best-effort signer recovery for arbitrary data under the
//! `"\x19Ethereum Signed Message:\n32"` prefix scheme.
//!
//! ## Failure policy
//!
//! - Signing is fail-loud: an invalid key is an error.
//! - Recovery is a query over untrusted input: every failure collapses to
//!   `None`. The reason is kept for diagnostics in
//!   [`try_recover_public_key_from_personal_message`].

use super::entities::{Address, MessageSignature, PersonalMessageSignature, PrivateKey, PublicKey};
use super::errors::{RecoveryError, SigningError};
use super::hashing::hash_personal_message;
use super::signature::{recover_public_key, sign_digest};
use rayon::prelude::*;
use tracing::debug;

/// Sign `message` under the personal-message scheme.
///
/// # Errors
/// Only fails if the curve library refuses the digest; key validity is
/// already enforced by [`PrivateKey`].
pub fn sign_personal_message(
    message: &[u8],
    private_key: &PrivateKey,
) -> Result<MessageSignature, SigningError> {
    sign_personal_message_with_hash(message, private_key).map(|signed| signed.signature)
}

/// Sign `message` and also return the digest that was signed.
pub fn sign_personal_message_with_hash(
    message: &[u8],
    private_key: &PrivateKey,
) -> Result<PersonalMessageSignature, SigningError> {
    let message_hash = hash_personal_message(message);
    let signature = sign_digest(&message_hash, private_key)?;

    Ok(PersonalMessageSignature {
        message_hash,
        signature,
    })
}

/// Recover the signer's public key, keeping the reason on failure.
///
/// The digest is always recomputed from `message`.
pub fn try_recover_public_key_from_personal_message(
    message: &[u8],
    signature: &[u8],
) -> Result<PublicKey, RecoveryError> {
    let message_hash = hash_personal_message(message);
    recover_public_key(&message_hash, signature)
}

/// Recover the signer's public key, or `None` if there is no valid signer.
pub fn recover_public_key_from_personal_message(
    message: &[u8],
    signature: &[u8],
) -> Option<PublicKey> {
    match try_recover_public_key_from_personal_message(message, signature) {
        Ok(public_key) => Some(public_key),
        Err(reason) => {
            debug!(
                %reason,
                message_len = message.len(),
                signature_len = signature.len(),
                "personal message recovery yielded no signer"
            );
            None
        }
    }
}

/// Recover the signer's address, or `None` if recovery failed.
pub fn recover_address_from_personal_message(message: &[u8], signature: &[u8]) -> Option<Address> {
    recover_public_key_from_personal_message(message, signature).map(|pk| pk.address())
}

/// Whether `signature` over `message` recovers to `expected`.
pub fn verify_personal_message(message: &[u8], signature: &[u8], expected: &Address) -> bool {
    recover_address_from_personal_message(message, signature).as_ref() == Some(expected)
}

/// Recover many (message, signature) pairs in parallel.
///
/// Results are in input order; each item fails independently.
pub fn recover_personal_addresses<M, S>(items: &[(M, S)]) -> Vec<Option<Address>>
where
    M: AsRef<[u8]> + Sync,
    S: AsRef<[u8]> + Sync,
{
    items
        .par_iter()
        .map(|(message, signature)| {
            recover_address_from_personal_message(message.as_ref(), signature.as_ref())
        })
        .collect()
}

// =============================================================================
// TEST HELPERS
// =============================================================================
