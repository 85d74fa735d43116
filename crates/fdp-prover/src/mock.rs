//! # Mock Proof Backend
//!
//! A deterministic, transparent stand-in for a real proving system.
//! Proof points are SHA-256 digests of domain-tagged input material —
//! they provide no zero-knowledge guarantees but have the exact wire
//! shape of real points, so every downstream component (builder,
//! validator, store, submission client) exercises the true contract.
//!
//! ## Security Notice
//!
//! This backend provides NO zero-knowledge privacy and NO soundness.
//! It is for development and testing only.

use sha2::{Digest, Sha256};

use fdp_core::{FieldElement, Fingerprint};

use crate::backend::{ProofBackend, ProofError};
use crate::record::ProofPoints;

/// Default signing-key material for development builds.
const DEV_SIGNING_KEY: &[u8] = b"fdp-dev-dkim-key";

/// Deterministic mock proving backend.
///
/// Identical inputs always produce identical points, so tests can assert
/// on stability, and distinct inputs produce distinct points with
/// overwhelming probability.
#[derive(Debug, Clone)]
pub struct MockBackend {
    /// The signing-key material whose fingerprint becomes `publicSignals[1]`.
    signing_key: Vec<u8>,
}

impl MockBackend {
    /// Create a mock backend with explicit signing-key material.
    pub fn new(signing_key: impl Into<Vec<u8>>) -> Self {
        Self {
            signing_key: signing_key.into(),
        }
    }

    /// Derive one mock field element from tagged input material.
    fn element(&self, tag: &str, message: &[u8], public_signals: &[FieldElement]) -> FieldElement {
        let mut hasher = Sha256::new();
        hasher.update(tag.as_bytes());
        hasher.update([0u8]);
        hasher.update(message);
        for signal in public_signals {
            hasher.update([0u8]);
            hasher.update(signal.as_str().as_bytes());
        }
        let digest = hasher.finalize();
        let mut hex = String::with_capacity(66);
        hex.push_str("0x");
        for b in digest {
            hex.push_str(&format!("{b:02x}"));
        }
        FieldElement::new(hex)
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new(DEV_SIGNING_KEY)
    }
}

impl ProofBackend for MockBackend {
    fn prove(
        &self,
        message: &[u8],
        public_signals: &[FieldElement],
    ) -> Result<ProofPoints, ProofError> {
        let e = |tag| self.element(tag, message, public_signals);
        Ok(ProofPoints {
            p_a: [e("pA.0"), e("pA.1")],
            p_b: [[e("pB.0.0"), e("pB.0.1")], [e("pB.1.0"), e("pB.1.1")]],
            p_c: [e("pC.0"), e("pC.1")],
        })
    }

    fn signer_fingerprint(&self) -> Fingerprint {
        Fingerprint::of_key_material(&self.signing_key)
    }
}
