//! # Outbound Ports (Driven Ports / SPI)
//!
//! The contract boundary to the external typed-data hasher.

use crate::domain::entities::Digest;
use crate::domain::errors::SigningError;
use crate::domain::typed::TypedMessage;

/// Structured-data hasher (EIP-712-class).
///
/// Given a document carrying `types`, `domain`, `primaryType` and `message`,
/// returns the 32-byte signing digest
/// `keccak256(0x19 0x01 || domainSeparator || hashStruct(message))`.
///
/// Implementations must be deterministic and must not mutate shared state:
/// the same document always yields the same digest, from any thread.
pub trait TypedDataHasher: Send + Sync {
    /// Hash a schema-validated document.
    ///
    /// # Errors
    /// `SigningError::MalformedInput` if the document passes the top-level
    /// schema gate but cannot be encoded (undeclared types, values that do
    /// not fit their declared type, ...).
    fn hash_typed_data(&self, message: &TypedMessage) -> Result<Digest, SigningError>;
}
