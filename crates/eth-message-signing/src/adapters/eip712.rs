//! # EIP-712 Hasher Adapter
//!
//! Binds [`TypedDataHasher`] to `alloy-dyn-abi`'s `TypedData`, which performs
//! type resolution, struct encoding and the domain separator.

use crate::domain::entities::Digest;
use crate::domain::errors::SigningError;
use crate::domain::typed::TypedMessage;
use crate::ports::outbound::TypedDataHasher;
use alloy_dyn_abi::TypedData;
use tracing::trace;

/// Production typed-data hasher (EIP-712 v4 semantics).
#[derive(Debug, Clone, Copy, Default)]
pub struct Eip712Hasher;

impl TypedDataHasher for Eip712Hasher {
    fn hash_typed_data(&self, message: &TypedMessage) -> Result<Digest, SigningError> {
        let typed: TypedData = serde_json::from_value(message.to_value())
            .map_err(|e| SigningError::MalformedInput(format!("typed data: {}", e)))?;

        let hash = typed
            .eip712_signing_hash()
            .map_err(|e| SigningError::MalformedInput(format!("eip712 encoding: {}", e)))?;

        trace!(primary_type = message.primary_type(), "typed data hashed");
        Ok(hash.0)
    }
}
