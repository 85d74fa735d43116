//! # Field Elements — Opaque Proof-System Encodings
//!
//! Defines `FieldElement`, the string encoding of a proof-system field
//! element as it appears in `pA`/`pB`/`pC` and `publicSignals`.
//!
//! ## Opacity Invariant
//!
//! A `FieldElement` is never interpreted numerically by this toolchain.
//! Whether it is hexadecimal (`0x...`) or a decimal numeric string is a
//! convention of the external proving system; this core only carries the
//! bytes through unchanged. Any arithmetic or curve-level meaning lives
//! entirely on the proving side.

use serde::{Deserialize, Serialize};

/// An opaque field-element encoding.
///
/// Wraps the string form a proving system emits for one field element.
/// Serializes transparently, so a `FieldElement` appears on the wire as
/// a bare JSON string — exactly the shape smart-contract submission
/// clients expect.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldElement(String);

impl FieldElement {
    /// Wrap an encoded field element.
    pub fn new(encoding: impl Into<String>) -> Self {
        Self(encoding.into())
    }

    /// Access the encoded form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for FieldElement {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for FieldElement {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl std::fmt::Display for FieldElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
