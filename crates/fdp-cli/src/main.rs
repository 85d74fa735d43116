//! # fdp CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Farewell delivery-proof toolchain.
///
/// Assembles per-recipient zero-knowledge delivery proofs, packages them
/// into versioned envelopes, and validates envelope files before they are
/// handed to a submission pipeline.
#[derive(Parser, Debug)]
#[command(name = "fdp", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Assemble a single recipient's proof record.
    Prove(fdp_cli::prove::ProveArgs),
    /// Build and persist a multi-recipient delivery-proof envelope.
    Build(fdp_cli::build::BuildArgs),
    /// Validate a delivery-proof envelope file.
    Validate(fdp_cli::validate::ValidateArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Prove(args) => fdp_cli::prove::run(args),
        Commands::Build(args) => fdp_cli::build::run(args),
        Commands::Validate(args) => fdp_cli::validate::run(args),
    }
}
