use crate::prelude::*;
use clap::{Parser, Subcommand};

pub const BINARY_NAME: &str = "disperse";

/// Plan batch transfers through the Disperse contract.
///
/// Reads a recipient list (one `address amount` per line, separated by
/// spaces, commas or tabs) and prints the exact contract call a wallet would
/// have to sign. Nothing is sent to the network.
#[derive(Debug, Parser)]
#[command(name = BINARY_NAME, author, version, about, long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Encode the disperse call for a recipient list and print it as JSON.
    Plan(PlanArgs),

    /// Check a recipient list and show which addresses are valid.
    Validate(ValidateArgs),
}
