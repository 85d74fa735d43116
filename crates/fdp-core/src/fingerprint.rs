//! # Identity Fingerprints — Canonical SHA-256 Digests
//!
//! Defines `Fingerprint`, the 256-bit digest used to canonically represent
//! a variable-length identity (a recipient address, a signing key) inside
//! a proof's public signals.
//!
//! ## Canonicalization Invariant
//!
//! Recipient addresses are canonicalized *inside* the constructor:
//! surrounding whitespace is stripped and the address is lowercased before
//! hashing. Two addresses differing only in case or whitespace therefore
//! always produce the same fingerprint, and callers cannot bypass the
//! normalization step.
//!
//! ## Wire Encoding
//!
//! On the wire a fingerprint renders as `0x` followed by exactly 64
//! lowercase hex characters — total length 66 — matching the public-signal
//! encoding the delivery-proof circuit expects.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::field::FieldElement;

/// A 256-bit identity fingerprint.
///
/// Produced exclusively through the named constructors so that every
/// fingerprint in the system went through the same canonicalization and
/// hashing pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Fingerprint a recipient address.
    ///
    /// Canonicalizes first: trims surrounding whitespace, lowercases, then
    /// hashes with SHA-256. Total over every string, including the empty
    /// string — address-shape validation is an upstream concern, not this
    /// function's.
    pub fn of_recipient(email: &str) -> Self {
        let canonical = email.trim().to_lowercase();
        Self(sha256(canonical.as_bytes()))
    }

    /// Fingerprint signing-key material (e.g., a DKIM public key).
    ///
    /// Deterministic for fixed key bytes and independent of any recipient.
    pub fn of_key_material(key: &[u8]) -> Self {
        Self(sha256(key))
    }

    /// Construct from a raw 32-byte digest.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render as `0x` + 64 lowercase hex characters (length 66).
    pub fn to_hex_prefixed(&self) -> String {
        let mut s = String::with_capacity(66);
        s.push_str("0x");
        for b in self.0 {
            s.push_str(&format!("{b:02x}"));
        }
        s
    }
}

impl From<Fingerprint> for FieldElement {
    fn from(fp: Fingerprint) -> Self {
        FieldElement::new(fp.to_hex_prefixed())
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex_prefixed())
    }
}

fn sha256(data: &[u8]) -> [u8; 32] {
    let hash = Sha256::digest(data);
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipient_fingerprint_deterministic() {
        let a = Fingerprint::of_recipient("alice@test.com");
        let b = Fingerprint::of_recipient("alice@test.com");
        assert_eq!(a, b);
    }

    #[test]
    fn test_recipient_fingerprint_normalizes_case_and_whitespace() {
        let canonical = Fingerprint::of_recipient("test@example.com");
        assert_eq!(Fingerprint::of_recipient("Test@Example.COM  "), canonical);
        assert_eq!(Fingerprint::of_recipient("  test@EXAMPLE.com"), canonical);
        assert_eq!(Fingerprint::of_recipient("\ttest@example.com\n"), canonical);
    }

    #[test]
    fn test_distinct_recipients_distinct_fingerprints() {
        let a = Fingerprint::of_recipient("user1@test.com");
        let b = Fingerprint::of_recipient("user2@test.com");
        assert_ne!(a, b);
    }

    #[test]
    fn test_hex_prefixed_shape() {
        let hex = Fingerprint::of_recipient("alice@test.com").to_hex_prefixed();
        assert_eq!(hex.len(), 66);
        assert!(hex.starts_with("0x"));
        assert!(hex[2..]
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_empty_string_fingerprints() {
        // Empty input is legal and hashes deterministically.
        let fp = Fingerprint::of_recipient("");
        assert_eq!(fp.to_hex_prefixed().len(), 66);
        // Whitespace-only input canonicalizes to the same empty string.
        assert_eq!(Fingerprint::of_recipient("   "), fp);
    }

    #[test]
    fn test_known_sha256_vector() {
        // SHA256("test@example.com") — verified against
        // Python hashlib.sha256(b"test@example.com").hexdigest()
        let fp = Fingerprint::of_recipient("test@example.com");
        assert_eq!(
            fp.to_hex_prefixed(),
            "0x973dfe463ec85785f5f95af5ba3906eedb2d931c24e69824a89ea65dba4e813b"
        );
    }

    #[test]
    fn test_key_material_fingerprint_independent_of_recipient() {
        let key = b"-----BEGIN PUBLIC KEY----- dkim";
        let a = Fingerprint::of_key_material(key);
        let b = Fingerprint::of_key_material(key);
        assert_eq!(a, b);
        assert_ne!(a, Fingerprint::of_key_material(b"other key"));
    }

    #[test]
    fn test_field_element_conversion() {
        let fp = Fingerprint::of_recipient("alice@test.com");
        let fe: FieldElement = fp.into();
        assert_eq!(fe.as_str(), fp.to_hex_prefixed());
    }

    #[test]
    fn test_display_matches_hex() {
        let fp = Fingerprint::of_recipient("a@b.com");
        assert_eq!(format!("{fp}"), fp.to_hex_prefixed());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Fingerprinting never panics and always yields the 0x + 64 hex shape.
        #[test]
        fn fingerprint_shape_holds_for_any_input(s in ".{0,200}") {
            let hex = Fingerprint::of_recipient(&s).to_hex_prefixed();
            prop_assert_eq!(hex.len(), 66);
            prop_assert!(hex.starts_with("0x"));
            prop_assert!(hex[2..].chars().all(|c| c.is_ascii_hexdigit()
                && !c.is_ascii_uppercase()));
        }

        /// Case and surrounding whitespace never change the fingerprint.
        #[test]
        fn fingerprint_invariant_under_canonicalization(
            s in "[a-zA-Z0-9@.]{1,60}",
            pad_left in " {0,5}",
            pad_right in " {0,5}",
        ) {
            let decorated = format!("{pad_left}{}{pad_right}", s.to_uppercase());
            prop_assert_eq!(
                Fingerprint::of_recipient(&decorated),
                Fingerprint::of_recipient(&s.to_lowercase())
            );
        }

        /// Distinct canonical inputs yield distinct fingerprints over a sample.
        #[test]
        fn distinct_canonical_inputs_distinct_fingerprints(
            a in "[a-z0-9]{1,30}@[a-z]{1,10}\\.com",
            b in "[a-z0-9]{1,30}@[a-z]{1,10}\\.com",
        ) {
            prop_assume!(a != b);
            prop_assert_ne!(
                Fingerprint::of_recipient(&a),
                Fingerprint::of_recipient(&b)
            );
        }
    }
}
