//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this crate.

use crate::domain::entities::{
    Address, Digest, MessageSignature, PersonalMessageSignature, PrivateKey, PublicKey,
};
use crate::domain::errors::SigningError;

/// Primary message signing API.
///
/// Every operation is a pure function of its inputs. Implementations must be
/// thread-safe (`Send + Sync`) and hold no mutable state.
pub trait MessageSigningApi: Send + Sync {
    // =========================================================================
    // Personal Messages
    // =========================================================================

    /// keccak256("\x19Ethereum Signed Message:\n32" || keccak256(message))
    fn hash_personal_message(&self, message: &[u8]) -> Digest;

    /// Sign a personal message.
    fn sign_personal_message(
        &self,
        message: &[u8],
        private_key: &PrivateKey,
    ) -> Result<MessageSignature, SigningError>;

    /// Sign a personal message, also returning the signed digest.
    fn sign_personal_message_with_hash(
        &self,
        message: &[u8],
        private_key: &PrivateKey,
    ) -> Result<PersonalMessageSignature, SigningError>;

    /// Recover the signer's public key. `None` means "no valid signer".
    fn recover_public_key_from_personal_message(
        &self,
        message: &[u8],
        signature: &[u8],
    ) -> Option<PublicKey>;

    /// Recover the signer's address. `None` means "no valid signer".
    fn recover_address_from_personal_message(
        &self,
        message: &[u8],
        signature: &[u8],
    ) -> Option<Address>;

    /// Whether the signature over `message` recovers to `expected`.
    fn verify_personal_message(&self, message: &[u8], signature: &[u8], expected: &Address)
        -> bool;

    /// Recover many (message, signature) pairs in parallel, preserving order.
    fn recover_personal_addresses(&self, items: &[(Vec<u8>, Vec<u8>)]) -> Vec<Option<Address>>;

    // =========================================================================
    // Typed Messages (EIP-712)
    // =========================================================================

    /// EIP-712 signing digest of a JSON typed-data document.
    fn hash_typed_message(&self, typed_data_json: &str) -> Result<Digest, SigningError>;

    /// Sign a JSON typed-data document.
    ///
    /// # Errors
    /// `SigningError::MalformedInput` for unparseable or schema-invalid JSON.
    fn sign_typed_message(
        &self,
        typed_data_json: &str,
        private_key: &PrivateKey,
    ) -> Result<MessageSignature, SigningError>;

    /// Recover the checksummed signer address of a typed-data document.
    ///
    /// Fails loud: a malformed signature or document is an error, never an
    /// empty result.
    fn recover_address_from_typed_message(
        &self,
        typed_data_json: &str,
        signature: &[u8],
    ) -> Result<String, SigningError>;
}
