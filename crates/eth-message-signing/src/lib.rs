//! # Ethereum Message Signing
//!
//! Signing and signer recovery for Ethereum "personal" messages and EIP-712
//! typed structured data over secp256k1.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure cryptographic logic, no I/O
//! - **Ports Layer** (`ports/`): Trait definitions for inbound/outbound interfaces
//! - **Adapters Layer** (`adapters/`): The EIP-712 hasher binding
//! - **Service Layer** (`service.rs`): Wires domain logic to ports
//!
//! ## Wire Formats
//!
//! - Personal digest: `keccak256("\x19Ethereum Signed Message:\n32" || keccak256(message))`
//! - Signature: `r (32) || s (32) || v (1)` with `v = recovery_id + 27`
//! - Address: EIP-55 checksummed hex
//!
//! ## Failure Policies
//!
//! - **Best-effort**: personal-message recovery returns `Option`; any
//!   malformed or unrecoverable signature is `None`.
//! - **Fail-loud**: signing and typed-message recovery return
//!   `Result<_, SigningError>`.
//!
//! ## Example
//!
//! ```rust
//! use eth_message_signing::{MessageSigningApi, MessageSigningService, PrivateKey};
//!
//! let service = MessageSigningService::eip712();
//! let key = PrivateKey::from_bytes(&[0x01; 32]).unwrap();
//!
//! let signature = service.sign_personal_message(b"hello", &key).unwrap();
//! let signer = service
//!     .recover_address_from_personal_message(b"hello", &signature.to_bytes())
//!     .unwrap();
//!
//! assert_eq!(signer.to_checksum(), "0x1a642f0E3c3aF545E7AcBD38b07251B3990914F1");
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::eip712::Eip712Hasher;
pub use domain::address::{is_valid_checksum, to_checksum_address};
pub use domain::entities::{
    Address, Digest, MessageSignature, PersonalMessageSignature, PrivateKey, PublicKey,
    RECOVERY_MARKER_OFFSET, SIGNATURE_LENGTH,
};
pub use domain::errors::{RecoveryError, SigningError};
pub use domain::hashing::{hash_personal_message, keccak256, PERSONAL_MESSAGE_PREFIX};
pub use domain::personal::{
    recover_address_from_personal_message, recover_personal_addresses,
    recover_public_key_from_personal_message, sign_personal_message,
    sign_personal_message_with_hash, try_recover_public_key_from_personal_message,
    verify_personal_message,
};
pub use domain::typed::{
    hash_typed_message, recover_address_from_typed_message, recover_typed_message_signer,
    sign_typed_message, TypedMessage,
};
pub use ports::inbound::MessageSigningApi;
pub use ports::outbound::TypedDataHasher;
pub use service::MessageSigningService;
