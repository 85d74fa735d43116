//! # fdp-core — Foundational Types for the Delivery-Proof Toolchain
//!
//! This crate is the bedrock of the Farewell delivery-proof toolchain. It
//! defines the value types every other crate in the workspace depends on;
//! it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `FieldElement` and
//!    `Fingerprint` are newtypes, not bare strings. A field element can
//!    never be confused with an arbitrary string at an API boundary.
//!
//! 2. **Field elements are opaque.** This toolchain never interprets a
//!    field element numerically — its algebraic meaning belongs to the
//!    external proving system. Keeping the encoding opaque prevents this
//!    core from silently depending on a specific curve or field modulus.
//!
//! 3. **One fingerprint derivation path.** All identity fingerprints are
//!    SHA-256 digests produced through `Fingerprint`'s named constructors.
//!    Recipient canonicalization (trim + lowercase) happens inside the
//!    constructor, so callers cannot skip it.
//!
//! 4. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `fdp-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod field;
pub mod fingerprint;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::FdpError;
pub use field::FieldElement;
pub use fingerprint::Fingerprint;
pub use temporal::Timestamp;
