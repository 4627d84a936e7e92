//! Command execution against a [`MessageSigningApi`].

use std::fs;

use anyhow::{Context, Result};
use eth_message_signing::domain::entities::decode_hex;
use eth_message_signing::{Address, MessageSigningApi, PrivateKey};
use tracing::debug;

use crate::cli::{Command, KeyArg, MessageArg, MessageEncoding, TypedDataArg};

/// Result of a successful command run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A line to print on stdout
    Output(String),
    /// Best-effort recovery found no signer
    NoSigner,
}

/// Run one command.
///
/// Fail-loud errors come back as `Err`; a best-effort recovery miss is
/// `Ok(Outcome::NoSigner)`.
pub fn execute<A>(api: &A, command: &Command, bare_hex: bool) -> Result<Outcome>
where
    A: MessageSigningApi + ?Sized,
{
    match command {
        Command::HashPersonal { message } => {
            let message = message_bytes(message)?;
            let digest = api.hash_personal_message(&message);
            Ok(Outcome::Output(render_hex(&digest, bare_hex)))
        }

        Command::SignPersonal { message, key } => {
            let message = message_bytes(message)?;
            let key = private_key(key)?;
            let signature = api
                .sign_personal_message(&message, &key)
                .context("signing personal message")?;
            Ok(Outcome::Output(render_hex(&signature.to_bytes(), bare_hex)))
        }

        Command::RecoverPersonal {
            message,
            signature,
            public_key,
        } => {
            let message = message_bytes(message)?;
            let signature = decode_hex(signature).context("decoding signature")?;

            let line = if *public_key {
                api.recover_public_key_from_personal_message(&message, &signature)
                    .map(|key| render_hex(&key.bytes, bare_hex))
            } else {
                api.recover_address_from_personal_message(&message, &signature)
                    .map(|address| address.to_checksum())
            };

            Ok(line.map_or_else(
                || {
                    debug!("no signer recovered");
                    Outcome::NoSigner
                },
                Outcome::Output,
            ))
        }

        Command::HashTyped { typed } => {
            let json = typed_json(typed)?;
            let digest = api
                .hash_typed_message(&json)
                .context("hashing typed message")?;
            Ok(Outcome::Output(render_hex(&digest, bare_hex)))
        }

        Command::SignTyped { typed, key } => {
            let json = typed_json(typed)?;
            let key = private_key(key)?;
            let signature = api
                .sign_typed_message(&json, &key)
                .context("signing typed message")?;
            Ok(Outcome::Output(render_hex(&signature.to_bytes(), bare_hex)))
        }

        Command::RecoverTyped { typed, signature } => {
            let json = typed_json(typed)?;
            let signature = decode_hex(signature).context("decoding signature")?;
            let address = api
                .recover_address_from_typed_message(&json, &signature)
                .context("recovering typed message signer")?;
            Ok(Outcome::Output(address))
        }

        Command::Checksum { address } => {
            let address = Address::from_hex(address).context("parsing address")?;
            Ok(Outcome::Output(address.to_checksum()))
        }
    }
}

fn render_hex(bytes: &[u8], bare: bool) -> String {
    if bare {
        hex::encode(bytes)
    } else {
        format!("0x{}", hex::encode(bytes))
    }
}

fn message_bytes(arg: &MessageArg) -> Result<Vec<u8>> {
    match arg.encoding {
        MessageEncoding::Utf8 => Ok(arg.message.as_bytes().to_vec()),
        MessageEncoding::Hex => decode_hex(&arg.message).context("decoding hex message"),
    }
}

fn private_key(arg: &KeyArg) -> Result<PrivateKey> {
    PrivateKey::from_hex(&arg.key).context("parsing private key")
}

fn typed_json(arg: &TypedDataArg) -> Result<String> {
    match (&arg.json, &arg.file) {
        (Some(json), _) => Ok(json.clone()),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("reading typed data from {}", path.display())),
        (None, None) => anyhow::bail!("typed data requires --json or --file"),
    }
}
