//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// eth-sig: sign Ethereum personal and EIP-712 messages and recover signers
#[derive(Parser, Debug)]
#[command(name = "eth-sig", version)]
#[command(about = "Sign Ethereum personal and EIP-712 messages and recover their signers")]
pub struct Cli {
    /// Print hex without the 0x prefix (addresses keep their EIP-55 form)
    #[arg(long, global = true)]
    pub bare_hex: bool,

    /// Emit JSON log lines on stderr (also ETH_SIG_JSON_LOGS=true)
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// How a personal message argument is interpreted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum MessageEncoding {
    /// The argument's UTF-8 bytes
    #[default]
    Utf8,
    /// Hex-decoded bytes (optional 0x)
    Hex,
}

/// A personal message argument.
#[derive(Args, Debug, Clone)]
pub struct MessageArg {
    /// Message to hash, sign or recover
    pub message: String,

    /// Message encoding
    #[arg(long, value_enum, default_value_t = MessageEncoding::Utf8)]
    pub encoding: MessageEncoding,
}

/// Where a typed-data JSON document comes from.
#[derive(Args, Debug, Clone)]
pub struct TypedDataArg {
    /// Typed-data JSON document
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    pub json: Option<String>,

    /// File holding the typed-data JSON document
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Private key argument, taken from the environment when not given.
#[derive(Args, Debug, Clone)]
pub struct KeyArg {
    /// 32-byte secp256k1 private key, hex
    #[arg(long, env = "ETH_SIG_PRIVATE_KEY", hide_env_values = true)]
    pub key: String,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the personal-message digest
    HashPersonal {
        #[command(flatten)]
        message: MessageArg,
    },

    /// Sign a personal message
    SignPersonal {
        #[command(flatten)]
        message: MessageArg,

        #[command(flatten)]
        key: KeyArg,
    },

    /// Recover the signer of a personal message (exit 1 if none)
    RecoverPersonal {
        #[command(flatten)]
        message: MessageArg,

        /// 65-byte signature, hex
        #[arg(long)]
        signature: String,

        /// Print the uncompressed public key instead of the address
        #[arg(long)]
        public_key: bool,
    },

    /// Print the EIP-712 digest of a typed-data document
    HashTyped {
        #[command(flatten)]
        typed: TypedDataArg,
    },

    /// Sign an EIP-712 typed-data document
    SignTyped {
        #[command(flatten)]
        typed: TypedDataArg,

        #[command(flatten)]
        key: KeyArg,
    },

    /// Recover the checksummed signer of a typed-data document
    RecoverTyped {
        #[command(flatten)]
        typed: TypedDataArg,

        /// 65-byte signature, hex
        #[arg(long)]
        signature: String,
    },

    /// Print the EIP-55 checksummed form of an address
    Checksum {
        /// 20-byte address, hex
        address: String,
    },
}
