//! # Personal Message Flows
//!
//! Sign and recover through [`MessageSigningService`], checking the digest and
//! the recovered key against an independent `k256`/`sha3` computation.

#[cfg(test)]
mod tests {
    use eth_message_signing::{
        try_recover_public_key_from_personal_message, Address, MessageSignature,
        MessageSigningApi, MessageSigningService, PrivateKey, RecoveryError,
    };
    use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
    use sha3::{Digest, Keccak256};

    use crate::fixtures::{
        fixture_key, random_key, FIXTURE_ADDRESS, FIXTURE_HELLO_SIGNATURE, FIXTURE_KEY,
        OTHER_ADDRESS, OTHER_KEY,
    };

    fn service() -> MessageSigningService {
        MessageSigningService::eip712()
    }

    /// keccak256("\x19Ethereum Signed Message:\n32" || keccak256(message)), built by hand.
    fn reference_digest(message: &[u8]) -> [u8; 32] {
        let inner = Keccak256::digest(message);
        let mut outer = Keccak256::new();
        outer.update(b"\x19Ethereum Signed Message:\n32");
        outer.update(inner);
        outer.finalize().into()
    }

    // =========================================================================
    // Pinned vectors
    // =========================================================================

    #[test]
    fn test_hello_signature_is_pinned() {
        let signature = service()
            .sign_personal_message(b"hello", &fixture_key())
            .unwrap();
        assert_eq!(signature.to_prefixed_hex(), FIXTURE_HELLO_SIGNATURE);
        assert_eq!(signature.v, 28);
    }

    #[test]
    fn test_digest_matches_reference_construction() {
        let api = service();
        for message in [&b""[..], b"hello", &[0u8; 1024], "héllo wörld".as_bytes()] {
            assert_eq!(
                api.hash_personal_message(message),
                reference_digest(message)
            );
        }
    }

    #[test]
    fn test_hello_recovers_fixture_address() {
        let signature = hex::decode(&FIXTURE_HELLO_SIGNATURE[2..]).unwrap();
        let address = service()
            .recover_address_from_personal_message(b"hello", &signature)
            .unwrap();
        assert_eq!(address.to_checksum(), FIXTURE_ADDRESS);
    }

    // =========================================================================
    // Cross-checks against k256
    // =========================================================================

    #[test]
    fn test_signature_verifies_with_k256() {
        let key = fixture_key();
        let signature = service().sign_personal_message(b"hello", &key).unwrap();

        let signing_key = SigningKey::from_bytes(&FIXTURE_KEY.into()).unwrap();
        let k256_sig = Signature::from_slice(&signature.rs()).unwrap();
        let recovery_id = RecoveryId::from_byte(signature.v - 27).unwrap();

        let recovered =
            VerifyingKey::recover_from_prehash(&reference_digest(b"hello"), &k256_sig, recovery_id)
                .unwrap();
        assert_eq!(&recovered, signing_key.verifying_key());
        assert_eq!(
            recovered.to_encoded_point(false).as_bytes(),
            &key.public_key().bytes[..]
        );
    }

    #[test]
    fn test_recovers_k256_produced_signature() {
        let signing_key = SigningKey::from_bytes(&FIXTURE_KEY.into()).unwrap();
        let (sig, recovery_id) = signing_key
            .sign_prehash_recoverable(&reference_digest(b"from k256"))
            .unwrap();

        let mut wire = sig.to_bytes().to_vec();
        wire.push(recovery_id.to_byte() + 27);

        let address = service()
            .recover_address_from_personal_message(b"from k256", &wire)
            .unwrap();
        assert_eq!(address.to_checksum(), FIXTURE_ADDRESS);
    }

    // =========================================================================
    // Round trips
    // =========================================================================

    #[test]
    fn test_random_keys_round_trip() {
        let api = service();
        for i in 0..32 {
            let key = random_key();
            let message = format!("message number {}", i);

            let signature = api.sign_personal_message(message.as_bytes(), &key).unwrap();
            assert!(signature.v == 27 || signature.v == 28);

            let recovered = api
                .recover_public_key_from_personal_message(message.as_bytes(), &signature.to_bytes())
                .unwrap();
            assert_eq!(recovered, key.public_key());
        }
    }

    #[test]
    fn test_signers_are_distinguished() {
        let api = service();
        let other = PrivateKey::from_hex(OTHER_KEY).unwrap();
        assert_eq!(other.address().to_checksum(), OTHER_ADDRESS);

        let signature = api.sign_personal_message(b"hello", &other).unwrap();
        let fixture_address = Address::from_hex(FIXTURE_ADDRESS).unwrap();

        assert!(!api.verify_personal_message(b"hello", &signature.to_bytes(), &fixture_address));
        assert!(api.verify_personal_message(b"hello", &signature.to_bytes(), &other.address()));
    }

    #[test]
    fn test_other_message_recovers_other_signer() {
        let api = service();
        let key = fixture_key();
        let signature = api.sign_personal_message(b"hello", &key).unwrap();

        let recovered = api.recover_address_from_personal_message(b"hellO", &signature.to_bytes());
        assert_ne!(recovered, Some(key.address()));
    }

    // =========================================================================
    // Best-effort failures
    // =========================================================================

    #[test]
    fn test_malformed_signatures_yield_none() {
        let api = service();
        let good = MessageSignature::from_hex(FIXTURE_HELLO_SIGNATURE).unwrap();

        let mut bad_marker = good.to_bytes();
        bad_marker[64] = 5;
        let mut zero_r = good.to_bytes();
        zero_r[..32].fill(0);

        let cases: Vec<Vec<u8>> = vec![
            Vec::new(),
            vec![0u8; 64],
            vec![0u8; 66],
            vec![0u8; 65],
            bad_marker.to_vec(),
            zero_r.to_vec(),
        ];

        for case in &cases {
            assert_eq!(
                api.recover_public_key_from_personal_message(b"hello", case),
                None,
                "signature {} should not recover",
                hex::encode(case)
            );
        }
    }

    #[test]
    fn test_high_s_is_rejected_with_reason() {
        let good = MessageSignature::from_hex(FIXTURE_HELLO_SIGNATURE).unwrap();
        let sig = Signature::from_slice(&good.rs()).unwrap();

        // (r, n - s) with the flipped parity recovers the same key in plain ECDSA
        let high = Signature::from_scalars(sig.r(), -*sig.s()).unwrap();
        let mut wire = high.to_bytes().to_vec();
        wire.push(if good.v == 27 { 28 } else { 27 });

        assert_eq!(
            try_recover_public_key_from_personal_message(b"hello", &wire),
            Err(RecoveryError::NonCanonicalSignature)
        );
    }

    #[test]
    fn test_batch_recovery_preserves_order() {
        let api = service();
        let keys: Vec<PrivateKey> = (0..16).map(|_| random_key()).collect();

        let mut items = Vec::new();
        let mut expected = Vec::new();
        for (i, key) in keys.iter().enumerate() {
            let message = format!("batch item {}", i).into_bytes();
            let signature = api.sign_personal_message(&message, key).unwrap();
            if i % 5 == 0 {
                items.push((message, vec![0xAB; 10]));
                expected.push(None);
            } else {
                items.push((message, signature.to_bytes().to_vec()));
                expected.push(Some(key.address()));
            }
        }

        assert_eq!(api.recover_personal_addresses(&items), expected);
    }
}
