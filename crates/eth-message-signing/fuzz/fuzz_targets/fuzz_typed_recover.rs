//! Fuzz target for fail-loud typed-message recovery.
//!
//! Arbitrary JSON text and signatures must produce `Ok` or `Err`, never a
//! panic.
//!
//! ## Running
//!
//! ```bash
//! cd crates/eth-message-signing
//! cargo +nightly fuzz run fuzz_typed_recover
//! ```

#![no_main]

use eth_message_signing::{recover_address_from_typed_message, Eip712Hasher, TypedMessage};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    json: String,
    signature: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let result = recover_address_from_typed_message(&Eip712Hasher, &input.json, &input.signature);

    // Anything that fails the schema gate can never recover
    if TypedMessage::from_json(&input.json).is_err() {
        assert!(result.is_err());
    }

    if let Ok(address) = result {
        assert_eq!(address.len(), 42);
        assert!(eth_message_signing::is_valid_checksum(&address));
    }
});
