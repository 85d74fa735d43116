//! # Proof Backend Trait
//!
//! Defines the seam between proof assembly and the external proving
//! system. The assembler hands a backend the message material and the
//! finished public-signal layout; the backend returns the `{pA, pB, pC}`
//! point triple, which is placed into the record verbatim.
//!
//! The trait requires `Send + Sync` — proofs for independent recipients
//! may be assembled concurrently without coordination.

use thiserror::Error;

use fdp_core::{FieldElement, Fingerprint};

use crate::record::ProofPoints;

/// Error during proof generation.
///
/// Returned by [`ProofBackend::prove`] when the proving system cannot
/// produce points for the given inputs.
#[derive(Error, Debug)]
pub enum ProofError {
    /// The witness material is invalid or missing.
    #[error("witness error: {0}")]
    WitnessError(String),
    /// Internal prover error.
    #[error("prover error: {0}")]
    ProverError(String),
}

/// Abstract interface to a zero-knowledge proving system.
///
/// Implementations own all cryptographic meaning: point encodings, the
/// curve, the circuit. This toolchain only requires that the returned
/// points have the fixed `{pA, pB, pC}` shape, which [`ProofPoints`]
/// guarantees at the type level.
pub trait ProofBackend: Send + Sync {
    /// Produce the proof point triple for one recipient.
    ///
    /// # Arguments
    ///
    /// * `message` — Raw message material (e.g., normalized EML bytes)
    ///   the proof binds to.
    /// * `public_signals` — The finished signal layout the proof commits to.
    ///
    /// # Errors
    ///
    /// Returns [`ProofError`] if the proving system cannot produce points.
    fn prove(
        &self,
        message: &[u8],
        public_signals: &[FieldElement],
    ) -> Result<ProofPoints, ProofError>;

    /// The fingerprint of the signing-key material this backend proves
    /// against (e.g., the DKIM public key).
    ///
    /// Deterministic for fixed key material and independent of any
    /// recipient — it becomes `publicSignals[1]` in every record this
    /// backend contributes to.
    fn signer_fingerprint(&self) -> Fingerprint;
}
