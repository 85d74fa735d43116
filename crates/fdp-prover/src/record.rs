//! # Proof Record — The Per-Recipient Wire Shape
//!
//! Defines `ProofRecord`, the `{pA, pB, pC, publicSignals}` bundle one
//! proving run emits for one recipient, and `ProofPoints`, the point
//! triple a backend returns before public signals are attached.
//!
//! ## Shape Invariant
//!
//! `pA` and `pC` are exactly two elements; `pB` is exactly 2×2. These
//! lengths are encoded in the Rust types, so a record built through this
//! crate is shape-correct by construction. `publicSignals` stays a `Vec`
//! because trailing signals beyond the first three are permitted and
//! passed through unchanged — its minimum length is a validator concern.

use serde::{Deserialize, Serialize};

use fdp_core::FieldElement;

/// The `{pA, pB, pC}` point triple produced by a proving backend.
///
/// Point encodings are opaque — this crate places them into records
/// verbatim without interpreting their cryptographic meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofPoints {
    /// First proof point — ordered pair of field elements.
    #[serde(rename = "pA")]
    pub p_a: [FieldElement; 2],
    /// Second proof point — 2×2 matrix of field elements.
    #[serde(rename = "pB")]
    pub p_b: [[FieldElement; 2]; 2],
    /// Third proof point — ordered pair of field elements.
    #[serde(rename = "pC")]
    pub p_c: [FieldElement; 2],
}

/// One recipient's delivery proof in canonical wire shape.
///
/// Immutable once assembled. Public-signal layout by convention:
/// index 0 = recipient-identity fingerprint, index 1 = signer/DKIM-key
/// fingerprint, index 2 = content fingerprint; additional trailing
/// signals are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofRecord {
    /// First proof point.
    #[serde(rename = "pA")]
    pub p_a: [FieldElement; 2],
    /// Second proof point (2×2 matrix).
    #[serde(rename = "pB")]
    pub p_b: [[FieldElement; 2]; 2],
    /// Third proof point.
    #[serde(rename = "pC")]
    pub p_c: [FieldElement; 2],
    /// Ordered public signals; at least 3 by convention.
    #[serde(rename = "publicSignals")]
    pub public_signals: Vec<FieldElement>,
}

impl ProofRecord {
    /// Combine backend proof points with an assembled signal layout.
    pub fn new(points: ProofPoints, public_signals: Vec<FieldElement>) -> Self {
        Self {
            p_a: points.p_a,
            p_b: points.p_b,
            p_c: points.p_c,
            public_signals,
        }
    }
}
