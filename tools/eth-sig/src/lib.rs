//! eth-sig: command-line front end for `eth-message-signing`.
//!
//! Argument parsing lives in [`cli`], command execution in [`commands`] so
//! both can be driven from tests without spawning a process.

pub mod cli;
pub mod commands;

pub use cli::{Cli, Command, MessageEncoding};
pub use commands::{execute, Outcome};
