use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// File with one `address amount` pair per line, `-` reads stdin.
    #[arg(long, short)]
    pub recipients: PathBuf,
}
