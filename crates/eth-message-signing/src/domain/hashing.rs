//! # Message Hashing
//!
//! Keccak-256 and the personal-message digest.

use super::entities::Digest;
use sha3::{Digest as _, Keccak256};

/// Domain-separation prefix for personal messages.
///
/// The trailing "32" is the length of the inner keccak digest, which is
/// always 32 bytes, so the prefix is a constant.
pub const PERSONAL_MESSAGE_PREFIX: &[u8; 28] = b"\x19Ethereum Signed Message:\n32";

/// Keccak256 hash function.
pub fn keccak256(data: &[u8]) -> Digest {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// keccak256(PREFIX || keccak256(message))
pub fn hash_personal_message(message: &[u8]) -> Digest {
    hash_with_prefix(PERSONAL_MESSAGE_PREFIX, message)
}

fn hash_with_prefix(prefix: &[u8], message: &[u8]) -> Digest {
    let inner = keccak256(message);

    let mut hasher = Keccak256::new();
    hasher.update(prefix);
    hasher.update(inner);
    hasher.finalize().into()
}
