//! # Validate Subcommand
//!
//! Loads a delivery-proof envelope file and runs the structural
//! validator, reporting the verdict. Exits non-zero on rejection so the
//! command composes into submission pipelines.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use fdp_envelope::validate_envelope;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the envelope JSON file.
    #[arg(long)]
    pub file: PathBuf,
}

/// Validate an envelope file and report the verdict.
pub fn run(args: ValidateArgs) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("cannot read {}", args.file.display()))?;
    let candidate: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", args.file.display()))?;

    match validate_envelope(&candidate) {
        Ok(()) => {
            println!("{}: valid", args.file.display());
            Ok(())
        }
        Err(rejection) => {
            anyhow::bail!("{}: rejected: {rejection}", args.file.display())
        }
    }
}
