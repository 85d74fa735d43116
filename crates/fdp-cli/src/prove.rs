//! # Prove Subcommand
//!
//! Assembles one recipient's proof record from a message file, a
//! recipient address, and a content hash, and writes it to the proof
//! store as pretty-printed JSON.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use fdp_prover::{MockBackend, ProofAssembler};
use fdp_store::ProofStore;

/// Arguments for the prove subcommand.
#[derive(Args, Debug)]
pub struct ProveArgs {
    /// Path to the raw message (EML) file the proof binds to.
    #[arg(long)]
    pub content: PathBuf,

    /// Recipient address; canonicalized (trimmed, lowercased) before
    /// fingerprinting.
    #[arg(long)]
    pub recipient: String,

    /// 0x-prefixed content hash from the upstream hashing step; passed
    /// through to publicSignals[2] unchanged.
    #[arg(long)]
    pub content_hash: String,

    /// Output directory for the proof file.
    #[arg(long, default_value = "proofs")]
    pub out_dir: PathBuf,

    /// Output filename.
    #[arg(long, default_value = "proof.json")]
    pub out: String,
}

/// Assemble and persist one proof record.
pub fn run(args: ProveArgs) -> anyhow::Result<()> {
    let content = std::fs::read(&args.content)
        .with_context(|| format!("cannot read content file {}", args.content.display()))?;

    let assembler = ProofAssembler::new(MockBackend::default());
    let proof = assembler
        .assemble(&content, &args.recipient, &args.content_hash)
        .context("proof assembly failed")?;

    let store = ProofStore::new(&args.out_dir);
    let path = store.save(&args.out, &proof).context("cannot store proof")?;

    tracing::info!(path = %path.display(), recipient = %args.recipient, "proof stored");
    println!("{}", path.display());
    Ok(())
}
