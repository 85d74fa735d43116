//! # Envelope Types and Builder
//!
//! Defines the delivery-proof envelope wire shape and the pure builder
//! that assembles one from caller-supplied parts.
//!
//! ## Construction vs. Validation
//!
//! The builder accepts everything it is given: it does not re-order,
//! re-index, or deduplicate recipient entries, and it accepts an empty
//! list. Emptiness and shape problems are the validator's job — keeping
//! construction total lets callers build envelopes incrementally and run
//! a single validation pass at the end.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use fdp_core::Timestamp;
use fdp_prover::ProofRecord;

/// The envelope format discriminator.
pub const DELIVERY_PROOF_TYPE: &str = "farewell-delivery-proof";

/// The envelope format version this crate produces.
pub const DELIVERY_PROOF_VERSION: u32 = 1;

/// One recipient's proof, bound to its envelope position and source address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipientEntry {
    /// Caller-assigned ordinal position within the envelope. Not re-derived
    /// or checked against array position; callers own index consistency.
    #[serde(rename = "recipientIndex")]
    pub recipient_index: u32,
    /// The recipient's proof record.
    pub proof: ProofRecord,
    /// The original (pre-normalization) address, carried for human
    /// auditability only. Never consulted by the validator.
    pub email: String,
}

/// The versioned, typed delivery-proof envelope.
///
/// Immutable once built; may be serialized, stored, transmitted, and
/// independently re-validated any number of times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryProofEnvelope {
    /// Format discriminator — always [`DELIVERY_PROOF_TYPE`].
    #[serde(rename = "type")]
    pub envelope_type: String,
    /// Format version — always [`DELIVERY_PROOF_VERSION`].
    pub version: u32,
    /// Identity of the issuing/owning principal. Opaque to this crate.
    pub owner: String,
    /// Which message/claim this envelope proves delivery of.
    #[serde(rename = "messageIndex")]
    pub message_index: u64,
    /// Ordered per-recipient proof entries.
    pub recipients: Vec<RecipientEntry>,
    /// Open auxiliary mapping attached at build time; informational only.
    pub metadata: BTreeMap<String, Value>,
}

/// Build a delivery-proof envelope from caller-supplied parts.
///
/// Pure: stamps the fixed `type`/`version` constants, carries `owner` and
/// `message_index` verbatim, and attaches build-time metadata
/// (`createdAt`, `generator`). The recipient list is taken as given.
pub fn build_envelope(
    owner: impl Into<String>,
    message_index: u64,
    recipients: Vec<RecipientEntry>,
) -> DeliveryProofEnvelope {
    let mut metadata = BTreeMap::new();
    metadata.insert(
        "createdAt".to_owned(),
        Value::String(Timestamp::now().to_iso8601()),
    );
    metadata.insert(
        "generator".to_owned(),
        Value::String(format!("fdp/{}", env!("CARGO_PKG_VERSION"))),
    );

    DeliveryProofEnvelope {
        envelope_type: DELIVERY_PROOF_TYPE.to_owned(),
        version: DELIVERY_PROOF_VERSION,
        owner: owner.into(),
        message_index,
        recipients,
        metadata,
    }
}
