//! eth-sig: sign Ethereum personal and EIP-712 messages and recover signers.
//!
//! Exit codes: 0 on success, 1 when best-effort recovery finds no signer,
//! 2 on any fail-loud error.

use std::process::ExitCode;

use clap::Parser;
use eth_message_signing::MessageSigningService;
use signing_telemetry::{init_tracing, TelemetryConfig};

use eth_sig::{execute, Cli, Outcome};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = TelemetryConfig::from_env();
    if cli.json_logs {
        config = config.with_json_logs(true);
    }
    if cli.verbose {
        config = config.with_log_level("debug");
    }
    if let Err(e) = init_tracing(&config) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let service = MessageSigningService::eip712();

    match execute(&service, &cli.command, cli.bare_hex) {
        Ok(Outcome::Output(line)) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Ok(Outcome::NoSigner) => ExitCode::from(1),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(2)
        }
    }
}
