//! # Typed Message Codec (EIP-712)
//!
//! Signing and signer recovery for structured data. The domain-separator and
//! struct hashing is delegated to a [`TypedDataHasher`]; this module owns the
//! schema gate in front of it and the curve operations behind it.
//!
//! Every failure here is fail-loud: a malformed document is never signed and
//! a malformed signature never degrades to "no signer".

use super::entities::{Address, Digest, MessageSignature, PrivateKey};
use super::errors::SigningError;
use super::signature::{recover_from_signature, sign_digest};
use crate::ports::outbound::TypedDataHasher;
use serde_json::{Map, Value};
use tracing::warn;

/// Top-level fields every typed-data document must carry, with the JSON
/// type each must have.
const REQUIRED_FIELDS: [(&str, JsonKind); 4] = [
    ("types", JsonKind::Object),
    ("primaryType", JsonKind::String),
    ("domain", JsonKind::Object),
    ("message", JsonKind::Object),
];

#[derive(Debug, Clone, Copy)]
enum JsonKind {
    Object,
    String,
}

impl JsonKind {
    fn matches(self, value: &Value) -> bool {
        match self {
            JsonKind::Object => value.is_object(),
            JsonKind::String => value.is_string(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            JsonKind::Object => "an object",
            JsonKind::String => "a string",
        }
    }
}

/// A typed-data document that passed the schema gate.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedMessage {
    document: Map<String, Value>,
}

impl TypedMessage {
    /// Parse and validate a JSON typed-data document.
    ///
    /// # Errors
    /// `SigningError::MalformedInput` if the JSON does not parse, is not an
    /// object, or lacks any of `types`, `domain`, `primaryType`, `message`.
    pub fn from_json(json: &str) -> Result<Self, SigningError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| SigningError::MalformedInput(format!("invalid JSON: {}", e)))?;
        Self::from_value(value)
    }

    /// Validate an already-parsed document.
    pub fn from_value(value: Value) -> Result<Self, SigningError> {
        let Value::Object(document) = value else {
            return Err(SigningError::MalformedInput(
                "typed data must be a JSON object".to_string(),
            ));
        };

        for (field, kind) in REQUIRED_FIELDS {
            match document.get(field) {
                None => {
                    return Err(SigningError::MalformedInput(format!(
                        "missing `{}` field",
                        field
                    )))
                }
                Some(v) if !kind.matches(v) => {
                    return Err(SigningError::MalformedInput(format!(
                        "`{}` must be {}",
                        field,
                        kind.name()
                    )))
                }
                Some(_) => {}
            }
        }

        Ok(Self { document })
    }

    /// The `primaryType` name.
    pub fn primary_type(&self) -> &str {
        self.document
            .get("primaryType")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// The full validated document.
    pub fn document(&self) -> &Map<String, Value> {
        &self.document
    }

    /// The validated document as a JSON value.
    pub fn to_value(&self) -> Value {
        Value::Object(self.document.clone())
    }
}

/// Compute the EIP-712 signing digest of a JSON document.
pub fn hash_typed_message<H>(hasher: &H, json: &str) -> Result<Digest, SigningError>
where
    H: TypedDataHasher + ?Sized,
{
    let message = parse_logged(json)?;
    hasher.hash_typed_data(&message)
}

/// Sign a JSON typed-data document.
///
/// # Errors
/// - `SigningError::MalformedInput` on unparseable or schema-invalid JSON,
///   or when the hasher rejects the document
/// - `SigningError::InvalidKey` is raised earlier, when building the [`PrivateKey`]
pub fn sign_typed_message<H>(
    hasher: &H,
    json: &str,
    private_key: &PrivateKey,
) -> Result<MessageSignature, SigningError>
where
    H: TypedDataHasher + ?Sized,
{
    let digest = hash_typed_message(hasher, json)?;
    sign_digest(&digest, private_key)
}

/// Recover the signer of a typed-data document.
///
/// # Errors
/// Any malformed document or signature, or a failed recovery.
pub fn recover_typed_message_signer<H>(
    hasher: &H,
    json: &str,
    signature: &[u8],
) -> Result<Address, SigningError>
where
    H: TypedDataHasher + ?Sized,
{
    let parsed = MessageSignature::from_bytes(signature)?;
    parsed.recovery_id()?;

    let digest = hash_typed_message(hasher, json)?;
    let public_key = recover_from_signature(&digest, &parsed)?;

    Ok(public_key.address())
}

/// Recover the signer of a typed-data document as a checksummed address.
pub fn recover_address_from_typed_message<H>(
    hasher: &H,
    json: &str,
    signature: &[u8],
) -> Result<String, SigningError>
where
    H: TypedDataHasher + ?Sized,
{
    recover_typed_message_signer(hasher, json, signature).map(|address| address.to_checksum())
}

fn parse_logged(json: &str) -> Result<TypedMessage, SigningError> {
    TypedMessage::from_json(json).inspect_err(|err| {
        warn!(error = %err, json_len = json.len(), "typed message rejected");
    })
}

// =============================================================================
// TEST HELPERS
// =============================================================================
