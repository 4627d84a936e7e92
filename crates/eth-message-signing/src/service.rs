//! # Message Signing Service
//!
//! Application service layer that implements the `MessageSigningApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`MessageSigningApi`)
//! - Uses the outbound port (`TypedDataHasher`) for structured-data digests
//! - Delegates cryptographic operations to the domain layer

use crate::adapters::eip712::Eip712Hasher;
use crate::domain::entities::{
    Address, Digest, MessageSignature, PersonalMessageSignature, PrivateKey, PublicKey,
};
use crate::domain::errors::SigningError;
use crate::domain::{hashing, personal, typed};
use crate::ports::inbound::MessageSigningApi;
use crate::ports::outbound::TypedDataHasher;
use tracing::{debug, debug_span};

/// Message Signing Service.
///
/// Stateless apart from the injected hasher, which is itself read-only, so
/// one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct MessageSigningService<H: TypedDataHasher = Eip712Hasher> {
    hasher: H,
}

impl MessageSigningService<Eip712Hasher> {
    /// Service backed by the production EIP-712 hasher.
    pub fn eip712() -> Self {
        Self::new(Eip712Hasher)
    }
}

impl<H: TypedDataHasher> MessageSigningService<H> {
    /// Create a new message signing service.
    ///
    /// # Arguments
    /// * `hasher` - The typed-data hasher used for EIP-712 documents
    pub fn new(hasher: H) -> Self {
        Self { hasher }
    }

    /// The injected typed-data hasher.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }
}

impl<H: TypedDataHasher> MessageSigningApi for MessageSigningService<H> {
    fn hash_personal_message(&self, message: &[u8]) -> Digest {
        hashing::hash_personal_message(message)
    }

    fn sign_personal_message(
        &self,
        message: &[u8],
        private_key: &PrivateKey,
    ) -> Result<MessageSignature, SigningError> {
        let _span = debug_span!("sign_personal_message", message_len = message.len()).entered();
        personal::sign_personal_message(message, private_key)
    }

    fn sign_personal_message_with_hash(
        &self,
        message: &[u8],
        private_key: &PrivateKey,
    ) -> Result<PersonalMessageSignature, SigningError> {
        let _span = debug_span!("sign_personal_message", message_len = message.len()).entered();
        personal::sign_personal_message_with_hash(message, private_key)
    }

    fn recover_public_key_from_personal_message(
        &self,
        message: &[u8],
        signature: &[u8],
    ) -> Option<PublicKey> {
        let _span = debug_span!("recover_personal_message", message_len = message.len()).entered();
        personal::recover_public_key_from_personal_message(message, signature)
    }

    fn recover_address_from_personal_message(
        &self,
        message: &[u8],
        signature: &[u8],
    ) -> Option<Address> {
        let _span = debug_span!("recover_personal_message", message_len = message.len()).entered();
        personal::recover_address_from_personal_message(message, signature)
    }

    fn verify_personal_message(
        &self,
        message: &[u8],
        signature: &[u8],
        expected: &Address,
    ) -> bool {
        let valid = personal::verify_personal_message(message, signature, expected);
        debug!(%expected, valid, "personal message verified");
        valid
    }

    fn recover_personal_addresses(&self, items: &[(Vec<u8>, Vec<u8>)]) -> Vec<Option<Address>> {
        let _span = debug_span!("recover_personal_batch", batch_size = items.len()).entered();
        personal::recover_personal_addresses(items)
    }

    fn hash_typed_message(&self, typed_data_json: &str) -> Result<Digest, SigningError> {
        typed::hash_typed_message(&self.hasher, typed_data_json)
    }

    fn sign_typed_message(
        &self,
        typed_data_json: &str,
        private_key: &PrivateKey,
    ) -> Result<MessageSignature, SigningError> {
        let _span = debug_span!("sign_typed_message", json_len = typed_data_json.len()).entered();
        typed::sign_typed_message(&self.hasher, typed_data_json, private_key)
    }

    fn recover_address_from_typed_message(
        &self,
        typed_data_json: &str,
        signature: &[u8],
    ) -> Result<String, SigningError> {
        let _span =
            debug_span!("recover_typed_message", json_len = typed_data_json.len()).entered();
        typed::recover_address_from_typed_message(&self.hasher, typed_data_json, signature)
    }
}
