//! # fdp-envelope — The Delivery-Proof Envelope
//!
//! The versioned, typed container that carries one or more per-recipient
//! proof records to a smart-contract submission pipeline, plus the
//! structural validator that decides whether any candidate envelope can
//! be trusted without re-parsing arbitrary JSON.
//!
//! ## Architecture
//!
//! - **Envelope** (`envelope.rs`): `RecipientEntry`, `DeliveryProofEnvelope`,
//!   and the pure `build_envelope` constructor. Construction is total —
//!   even an empty recipient list builds, so callers can assemble
//!   incrementally and validate once at the end.
//!
//! - **Validation** (`validate.rs`): `validate_envelope` runs the ordered
//!   fail-fast checklist over untrusted `serde_json::Value` input and
//!   returns a `StructuralRejection` naming the first offending field.
//!   Shape only — cryptographic validity is the proving system's business.
//!
//! ## Crate Policy
//!
//! - Pure value transformations; no I/O, no shared state.
//! - The validator never panics on any input.

pub mod envelope;
pub mod validate;

pub use envelope::{
    build_envelope, DeliveryProofEnvelope, RecipientEntry, DELIVERY_PROOF_TYPE,
    DELIVERY_PROOF_VERSION,
};
pub use validate::{validate_envelope, StructuralRejection};
