//! # Typed Message (EIP-712) Flows
//!
//! The EIP-712 "Mail" reference document end to end, plus the fail-loud
//! behavior of typed recovery.

#[cfg(test)]
mod tests {
    use eth_message_signing::{
        recover_typed_message_signer, Digest, Eip712Hasher, MessageSignature, MessageSigningApi,
        MessageSigningService, PrivateKey, SigningError, TypedDataHasher, TypedMessage,
    };
    use serde_json::Value;

    use crate::fixtures::{
        fixture_key, random_key, COW_ADDRESS, COW_KEY, FIXTURE_ADDRESS, MAIL_DIGEST, MAIL_JSON,
        MAIL_SIGNATURE,
    };

    fn service() -> MessageSigningService {
        MessageSigningService::eip712()
    }

    fn mail_with(edit: impl FnOnce(&mut Value)) -> String {
        let mut value: Value = serde_json::from_str(MAIL_JSON).unwrap();
        edit(&mut value);
        value.to_string()
    }

    // =========================================================================
    // Reference document
    // =========================================================================

    #[test]
    fn test_mail_digest_is_pinned() {
        let digest = service().hash_typed_message(MAIL_JSON).unwrap();
        assert_eq!(hex::encode(digest), MAIL_DIGEST);
    }

    #[test]
    fn test_mail_signature_is_pinned() {
        let key = PrivateKey::from_hex(COW_KEY).unwrap();
        assert_eq!(key.address().to_checksum(), COW_ADDRESS);

        let signature = service().sign_typed_message(MAIL_JSON, &key).unwrap();
        assert_eq!(signature.to_prefixed_hex(), MAIL_SIGNATURE);
    }

    #[test]
    fn test_mail_signature_recovers_cow() {
        let signature = MessageSignature::from_hex(MAIL_SIGNATURE).unwrap();
        let address = service()
            .recover_address_from_typed_message(MAIL_JSON, &signature.to_bytes())
            .unwrap();
        assert_eq!(address, COW_ADDRESS);
    }

    #[test]
    fn test_key_order_does_not_matter() {
        // Same document, top-level keys reordered and reformatted
        let value: Value = serde_json::from_str(MAIL_JSON).unwrap();
        let reordered = format!(
            r#"{{"message":{},"domain":{},"primaryType":"Mail","types":{}}}"#,
            value["message"], value["domain"], value["types"]
        );
        assert_eq!(
            hex::encode(service().hash_typed_message(&reordered).unwrap()),
            MAIL_DIGEST
        );
    }

    // =========================================================================
    // Round trips
    // =========================================================================

    #[test]
    fn test_random_keys_round_trip() {
        let api = service();
        for _ in 0..8 {
            let key = random_key();
            let signature = api.sign_typed_message(MAIL_JSON, &key).unwrap();
            let address = api
                .recover_address_from_typed_message(MAIL_JSON, &signature.to_bytes())
                .unwrap();
            assert_eq!(address, key.address().to_checksum());
        }
    }

    #[test]
    fn test_tampered_document_recovers_other_signer() {
        let api = service();
        let signature = MessageSignature::from_hex(MAIL_SIGNATURE).unwrap();
        let tampered = mail_with(|v| v["message"]["contents"] = Value::from("Hello, Eve!"));

        match api.recover_address_from_typed_message(&tampered, &signature.to_bytes()) {
            Ok(address) => assert_ne!(address, COW_ADDRESS),
            Err(err) => assert_eq!(err, SigningError::RecoveryFailed),
        }
    }

    #[test]
    fn test_personal_and_typed_digests_differ() {
        let api = service();
        let key = fixture_key();
        let typed_signature = api.sign_typed_message(MAIL_JSON, &key).unwrap();

        let as_personal = api.recover_address_from_personal_message(
            MAIL_JSON.as_bytes(),
            &typed_signature.to_bytes(),
        );
        assert_ne!(
            as_personal.map(|a| a.to_checksum()),
            Some(FIXTURE_ADDRESS.to_string())
        );
    }

    // =========================================================================
    // Fail-loud recovery
    // =========================================================================

    #[test]
    fn test_missing_fields_are_malformed() {
        let api = service();
        let signature = MessageSignature::from_hex(MAIL_SIGNATURE)
            .unwrap()
            .to_bytes();

        for field in ["types", "primaryType", "domain", "message"] {
            let document = mail_with(|v| {
                v.as_object_mut().unwrap().remove(field);
            });
            assert!(
                matches!(
                    api.recover_address_from_typed_message(&document, &signature),
                    Err(SigningError::MalformedInput(_))
                ),
                "missing {} must be rejected",
                field
            );
            assert!(matches!(
                api.sign_typed_message(&document, &fixture_key()),
                Err(SigningError::MalformedInput(_))
            ));
        }
    }

    #[test]
    fn test_unparseable_json_is_malformed() {
        let api = service();
        assert!(matches!(
            api.hash_typed_message("{ not json"),
            Err(SigningError::MalformedInput(_))
        ));
        assert!(matches!(
            api.hash_typed_message("[1, 2, 3]"),
            Err(SigningError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_bad_signatures_are_errors() {
        let api = service();
        let good = MessageSignature::from_hex(MAIL_SIGNATURE)
            .unwrap()
            .to_bytes();

        assert_eq!(
            api.recover_address_from_typed_message(MAIL_JSON, &good[..64]),
            Err(SigningError::InvalidSignatureLength(64))
        );

        let mut marker_one = good;
        marker_one[64] = 1;
        assert_eq!(
            api.recover_address_from_typed_message(MAIL_JSON, &marker_one),
            Err(SigningError::InvalidRecoveryMarker(1))
        );

        let mut zero_s = good;
        zero_s[32..64].fill(0);
        assert!(api
            .recover_address_from_typed_message(MAIL_JSON, &zero_s)
            .is_err());
    }

    // =========================================================================
    // Hasher port
    // =========================================================================

    /// Hasher that digests only the primary type name.
    struct PrimaryTypeHasher;

    impl TypedDataHasher for PrimaryTypeHasher {
        fn hash_typed_data(&self, message: &TypedMessage) -> Result<Digest, SigningError> {
            Ok(eth_message_signing::keccak256(message.primary_type().as_bytes()))
        }
    }

    #[test]
    fn test_service_uses_injected_hasher() {
        let api = MessageSigningService::new(PrimaryTypeHasher);
        let expected = eth_message_signing::keccak256(b"Mail");
        assert_eq!(api.hash_typed_message(MAIL_JSON).unwrap(), expected);

        let key = fixture_key();
        let signature = api.sign_typed_message(MAIL_JSON, &key).unwrap();
        let signer =
            recover_typed_message_signer(&PrimaryTypeHasher, MAIL_JSON, &signature.to_bytes())
                .unwrap();
        assert_eq!(signer, key.address());

        // The production hasher disagrees, so the signer differs
        let production =
            recover_typed_message_signer(&Eip712Hasher, MAIL_JSON, &signature.to_bytes());
        assert_ne!(production.ok(), Some(key.address()));
    }
}
