//! Fuzz target for best-effort personal-message recovery.
//!
//! Recovery runs on attacker-supplied signatures, so it must return `None`
//! rather than panic for every input.
//!
//! ## Running
//!
//! ```bash
//! cd crates/eth-message-signing
//! cargo +nightly fuzz run fuzz_personal_recover
//! ```

#![no_main]

use eth_message_signing::{
    recover_address_from_personal_message, recover_public_key_from_personal_message,
    try_recover_public_key_from_personal_message,
};
use libfuzzer_sys::fuzz_target;

/// Fuzz input structure for personal-message recovery.
#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    message: Vec<u8>,
    r: [u8; 32],
    s: [u8; 32],
    v: u8,
    /// Bytes appended past the 65-byte signature (length errors)
    trailing: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let mut signature = Vec::with_capacity(65 + input.trailing.len());
    signature.extend_from_slice(&input.r);
    signature.extend_from_slice(&input.s);
    signature.push(input.v);
    signature.extend_from_slice(&input.trailing);

    let public_key = recover_public_key_from_personal_message(&input.message, &signature);

    // 1. Deterministic
    let again = recover_public_key_from_personal_message(&input.message, &signature);
    assert_eq!(public_key, again);

    // 2. Only 65-byte signatures with marker 27/28 can recover
    if public_key.is_some() {
        assert!(input.trailing.is_empty());
        assert!(input.v == 27 || input.v == 28);
    }

    // 3. Option and diagnostic forms agree
    let diagnosed = try_recover_public_key_from_personal_message(&input.message, &signature);
    assert_eq!(public_key.is_some(), diagnosed.is_ok());

    // 4. Address follows the public key
    let address = recover_address_from_personal_message(&input.message, &signature);
    assert_eq!(address, public_key.map(|pk| pk.address()));
});
