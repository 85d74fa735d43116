//! # Error Types — Shared Error Hierarchy
//!
//! Top-level error type for the delivery-proof toolchain. Component-level
//! errors (prover failures, structural rejections, store errors) live in
//! their own crates; this enum covers the concerns shared across them.

use thiserror::Error;

/// Top-level error type for the delivery-proof toolchain.
#[derive(Error, Debug)]
pub enum FdpError {
    /// Timestamp parsing or normalization failed.
    #[error("temporal error: {0}")]
    Temporal(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
