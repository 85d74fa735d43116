//! # Structural Envelope Validation
//!
//! Decides whether a candidate value — freshly built or deserialized from
//! an untrusted source — has the exact delivery-proof envelope shape, and
//! on rejection names the first offending field.
//!
//! ## Trust Boundary
//!
//! Validation is shape-only: field presence, array lengths, and the type
//! discriminator. It never checks pairing equations or circuit
//! satisfiability — rejection here neither implies nor excludes
//! mathematical validity, and acceptance only means downstream consumers
//! can index into the envelope without re-parsing arbitrary JSON.
//!
//! ## Fail-Fast Ordering
//!
//! Checks run in a fixed order and the first failure determines the
//! diagnostic. Ordering matters only for diagnostic determinism; the
//! accept/reject decision is the same regardless. Every field access is
//! an explicit presence-and-shape check — nothing about the input is
//! trusted, and no input can cause a panic.

use serde_json::Value;
use thiserror::Error;

use crate::envelope::DELIVERY_PROOF_TYPE;

/// Structural rejection of a candidate envelope.
///
/// One variant per offending field, in check order. The `Display`
/// rendering names the field exactly as it appears on the wire.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralRejection {
    /// The candidate is not a JSON object at all.
    #[error("delivery proof is not a JSON object")]
    NotAnObject,

    /// The `type` discriminator is missing or not the expected constant.
    #[error("missing or invalid field: type (expected \"{DELIVERY_PROOF_TYPE}\")")]
    EnvelopeType,

    /// The `owner` field is missing.
    #[error("missing field: owner")]
    Owner,

    /// The `messageIndex` field is missing.
    #[error("missing field: messageIndex")]
    MessageIndex,

    /// The `recipients` field is missing, not an array, or empty.
    #[error("recipients must be a non-empty array")]
    Recipients,

    /// A recipient entry is missing its `recipientIndex`.
    #[error("recipient {position}: missing field: recipientIndex")]
    RecipientIndex {
        /// Position of the offending entry in the `recipients` array.
        position: usize,
    },

    /// A recipient entry is missing its `proof`, or `proof` is not an object.
    #[error("recipient {position}: missing or invalid field: proof")]
    Proof {
        /// Position of the offending entry in the `recipients` array.
        position: usize,
    },

    /// A proof's `publicSignals` is missing, not an array, or shorter than 3.
    #[error("recipient {position}: publicSignals must be an array of at least 3 elements")]
    PublicSignals {
        /// Position of the offending entry in the `recipients` array.
        position: usize,
    },

    /// A proof's `pA` is missing or not an array of exactly 2 elements.
    #[error("recipient {position}: pA must be an array of exactly 2 elements")]
    PointA {
        /// Position of the offending entry in the `recipients` array.
        position: usize,
    },

    /// A proof's `pB` is missing or not a 2x2 array.
    #[error("recipient {position}: pB must be a 2x2 array")]
    PointB {
        /// Position of the offending entry in the `recipients` array.
        position: usize,
    },

    /// A proof's `pC` is missing or not an array of exactly 2 elements.
    #[error("recipient {position}: pC must be an array of exactly 2 elements")]
    PointC {
        /// Position of the offending entry in the `recipients` array.
        position: usize,
    },
}

/// Validate a candidate delivery-proof envelope.
///
/// Runs the ordered structural checklist over an untrusted JSON value.
/// `Ok(())` means every shape invariant holds; `Err` carries the first
/// offending field. The input is never mutated, and the informational
/// `email` and `metadata` fields are never consulted.
pub fn validate_envelope(candidate: &Value) -> Result<(), StructuralRejection> {
    let envelope = candidate
        .as_object()
        .ok_or(StructuralRejection::NotAnObject)?;

    match envelope.get("type").and_then(Value::as_str) {
        Some(DELIVERY_PROOF_TYPE) => {}
        _ => return Err(StructuralRejection::EnvelopeType),
    }

    if !envelope.contains_key("owner") {
        return Err(StructuralRejection::Owner);
    }

    if !envelope.contains_key("messageIndex") {
        return Err(StructuralRejection::MessageIndex);
    }

    let recipients = envelope
        .get("recipients")
        .and_then(Value::as_array)
        .filter(|r| !r.is_empty())
        .ok_or(StructuralRejection::Recipients)?;

    for (position, entry) in recipients.iter().enumerate() {
        validate_recipient(position, entry)?;
    }

    Ok(())
}

/// Validate one recipient entry at the given array position.
fn validate_recipient(position: usize, entry: &Value) -> Result<(), StructuralRejection> {
    if entry.get("recipientIndex").is_none() {
        return Err(StructuralRejection::RecipientIndex { position });
    }

    let proof = entry
        .get("proof")
        .and_then(Value::as_object)
        .ok_or(StructuralRejection::Proof { position })?;

    match proof.get("publicSignals").and_then(Value::as_array) {
        Some(signals) if signals.len() >= 3 => {}
        _ => return Err(StructuralRejection::PublicSignals { position }),
    }

    if !is_pair(proof.get("pA")) {
        return Err(StructuralRejection::PointA { position });
    }

    let pb_ok = proof
        .get("pB")
        .and_then(Value::as_array)
        .is_some_and(|rows| rows.len() == 2 && rows.iter().all(|row| is_pair(Some(row))));
    if !pb_ok {
        return Err(StructuralRejection::PointB { position });
    }

    if !is_pair(proof.get("pC")) {
        return Err(StructuralRejection::PointC { position });
    }

    Ok(())
}

/// True if the value is present and an array of exactly two elements.
fn is_pair(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_array)
        .is_some_and(|a| a.len() == 2)
}
