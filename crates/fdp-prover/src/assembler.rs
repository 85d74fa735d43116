//! # Proof Assembler
//!
//! Builds one canonical `ProofRecord` per recipient from raw message
//! material, the recipient's address, and a caller-supplied content hash.
//!
//! ## Signal Layout
//!
//! - `publicSignals[0]` — recipient-identity fingerprint, derived here
//!   from the canonicalized (trimmed, lowercased) address.
//! - `publicSignals[1]` — signer/DKIM-key fingerprint, supplied by the
//!   backend; recipient-independent.
//! - `publicSignals[2]` — the caller's content hash, verbatim. This
//!   assembler never re-derives or reformats it.
//!
//! The assembler is total over its address input: any string, including
//! the empty string, canonicalizes and hashes deterministically.
//! Address-shape validation belongs to the caller's ingestion layer.

use fdp_core::{FieldElement, Fingerprint};

use crate::backend::{ProofBackend, ProofError};
use crate::record::ProofRecord;

/// Assembles per-recipient proof records through a proving backend.
#[derive(Debug, Clone)]
pub struct ProofAssembler<B> {
    backend: B,
}

impl<B: ProofBackend> ProofAssembler<B> {
    /// Create an assembler over the given proving backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Assemble one recipient's proof record.
    ///
    /// # Arguments
    ///
    /// * `content` — Raw message material the proof binds to.
    /// * `recipient_email` — The recipient address; canonicalized before
    ///   fingerprinting, any string accepted.
    /// * `content_hash` — `0x`-prefixed content fingerprint from the
    ///   upstream hashing step; passed through to `publicSignals[2]`
    ///   unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ProofError`] only if the backend fails to produce points;
    /// assembly itself has no failure modes.
    pub fn assemble(
        &self,
        content: &[u8],
        recipient_email: &str,
        content_hash: &str,
    ) -> Result<ProofRecord, ProofError> {
        let public_signals = vec![
            Fingerprint::of_recipient(recipient_email).into(),
            self.backend.signer_fingerprint().into(),
            FieldElement::from(content_hash),
        ];
        let points = self.backend.prove(content, &public_signals)?;
        Ok(ProofRecord::new(points, public_signals))
    }
}
