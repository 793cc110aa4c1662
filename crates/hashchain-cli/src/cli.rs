use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "hashchain",
    about = "Build and verify hash chains for one-way authentication",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build a chain from a seed and print it, one digest per line
    Create(CreateArgs),
    /// Check that a candidate digest is the preimage of a trusted tip
    Verify(VerifyArgs),
    /// List the supported digest algorithms
    Algorithms,
}

#[derive(Args)]
pub struct CreateArgs {
    /// Digest algorithm (see `hashchain algorithms`)
    pub algorithm: String,

    /// Number of links in the chain (at least 1)
    pub length: usize,

    /// Seed the chain is derived from
    pub seed: String,

    /// Print only the tip instead of the full chain
    #[arg(long)]
    pub tip_only: bool,
}

#[derive(Args)]
pub struct VerifyArgs {
    /// Digest algorithm the chain was built under
    pub algorithm: String,

    /// Candidate digest, base64
    pub candidate: String,

    /// Trusted tip digest, base64
    pub tip: String,
}
