//! # Build Subcommand
//!
//! Assembles one proof per recipient, builds the delivery-proof envelope,
//! validates it, and persists it. Recipient indices are assigned in the
//! order the addresses are given on the command line.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use fdp_envelope::{build_envelope, validate_envelope, RecipientEntry};
use fdp_prover::{MockBackend, ProofAssembler};
use fdp_store::ProofStore;

/// Arguments for the build subcommand.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Identity of the envelope's owning principal.
    #[arg(long)]
    pub owner: String,

    /// Which message/claim this envelope proves delivery of.
    #[arg(long)]
    pub message_index: u64,

    /// Path to the raw message (EML) file the proofs bind to.
    #[arg(long)]
    pub content: PathBuf,

    /// 0x-prefixed content hash shared by all recipients of this message.
    #[arg(long)]
    pub content_hash: String,

    /// Recipient address; repeat for multiple recipients.
    #[arg(long = "recipient", required = true)]
    pub recipients: Vec<String>,

    /// Output directory for the envelope file.
    #[arg(long, default_value = "proofs")]
    pub out_dir: PathBuf,

    /// Output filename.
    #[arg(long, default_value = "delivery-proof.json")]
    pub out: String,
}

/// Build, validate, and persist a delivery-proof envelope.
pub fn run(args: BuildArgs) -> anyhow::Result<()> {
    let content = std::fs::read(&args.content)
        .with_context(|| format!("cannot read content file {}", args.content.display()))?;

    let assembler = ProofAssembler::new(MockBackend::default());
    let entries = args
        .recipients
        .iter()
        .enumerate()
        .map(|(i, email)| {
            let proof = assembler
                .assemble(&content, email, &args.content_hash)
                .with_context(|| format!("proof assembly failed for {email}"))?;
            Ok(RecipientEntry {
                recipient_index: i as u32,
                proof,
                email: email.clone(),
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let envelope = build_envelope(&args.owner, args.message_index, entries);

    // Validate before persisting; a rejected envelope is a bug here.
    let as_value = serde_json::to_value(&envelope).context("cannot serialize envelope")?;
    validate_envelope(&as_value)
        .map_err(|e| anyhow::anyhow!("built envelope failed validation: {e}"))?;

    let store = ProofStore::new(&args.out_dir);
    let path = store
        .save(&args.out, &envelope)
        .context("cannot store envelope")?;

    tracing::info!(
        path = %path.display(),
        recipients = envelope.recipients.len(),
        "delivery proof stored"
    );
    println!("{}", path.display());
    Ok(())
}
