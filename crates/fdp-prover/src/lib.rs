//! # fdp-prover — Per-Recipient Proof Assembly
//!
//! Produces one canonical `ProofRecord` per recipient from raw message
//! material, a recipient address, and a caller-supplied content hash.
//!
//! ## Architecture
//!
//! - **Record** (`record.rs`): The `{pA, pB, pC, publicSignals}` wire shape.
//!   Point arrays are fixed-length at the type level; a freshly assembled
//!   record cannot have the wrong shape.
//!
//! - **Backend** (`backend.rs`): The `ProofBackend` trait is the seam to the
//!   external proving system. This crate never interprets proof points —
//!   it places whatever the backend returns verbatim into the record.
//!
//! - **Mock** (`mock.rs`): `MockBackend` provides deterministic,
//!   transparent proof points for development and testing. No
//!   zero-knowledge guarantees, shape-faithful output.
//!
//! - **Assembler** (`assembler.rs`): `ProofAssembler` wires fingerprint
//!   derivation and the backend together into the public-signal layout the
//!   delivery-proof envelope expects.
//!
//! ## Crate Policy
//!
//! - Depends on `fdp-core` internally.
//! - All operations are pure, synchronous transformations.
//! - No `unsafe`, no `panic!()`/`.unwrap()` outside tests.

pub mod assembler;
pub mod backend;
pub mod mock;
pub mod record;

pub use assembler::ProofAssembler;
pub use backend::{ProofBackend, ProofError};
pub use mock::MockBackend;
pub use record::{ProofPoints, ProofRecord};
