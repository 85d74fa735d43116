//! # fdp-store — Proof Persistence
//!
//! Writes envelopes and proof records to durable storage as
//! pretty-printed (human-diffable) JSON, creating intermediate
//! directories as needed, and reads them back for re-validation.
//!
//! ## Durability Contract
//!
//! Writes go to a temporary sibling file first, then rename into place.
//! A crash mid-write leaves either the old file or no file — never a
//! truncated proof. The store makes no promise beyond that; the shape of
//! what it persists is the envelope crate's contract, and reloaded values
//! must be re-validated by the caller before they are trusted.
//!
//! ## Crate Policy
//!
//! - Accepts any `Serialize` value; performs no validation of its own.
//! - No `unsafe`, no `panic!()`/`.unwrap()` outside tests.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Error during proof persistence.
#[derive(Error, Debug)]
pub enum StoreError {
    /// JSON serialization or parsing failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A filesystem-backed proof store.
///
/// Proofs are stored under a single root directory, named by the caller.
#[derive(Debug, Clone)]
pub struct ProofStore {
    /// Root directory for stored proofs (e.g., `proofs/`).
    root: PathBuf,
}

impl ProofStore {
    /// Create a proof store rooted at the given directory.
    ///
    /// The directory is created lazily on first save, not here.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory of this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Compute the filesystem path for a stored proof by filename.
    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    /// Serialize a value as pretty-printed JSON and write it under the
    /// store root, creating intermediate directories as needed.
    ///
    /// The write is atomic: content goes to a temporary sibling first and
    /// is renamed into place.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or any filesystem
    /// operation fails.
    pub fn save(&self, filename: &str, value: &impl Serialize) -> Result<PathBuf, StoreError> {
        std::fs::create_dir_all(&self.root)?;

        let path = self.path_for(filename);
        let mut bytes = serde_json::to_vec_pretty(value)?;
        bytes.push(b'\n');

        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, &bytes)?;
        std::fs::rename(&tmp_path, &path)?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "stored proof");
        Ok(path)
    }

    /// Read a stored proof back as a parsed JSON value.
    ///
    /// Parsing only — structural validation of reloaded envelopes is the
    /// caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be read or is not valid JSON.
    pub fn load(&self, filename: &str) -> Result<Value, StoreError> {
        let content = std::fs::read_to_string(self.path_for(filename))?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_proof() -> Value {
        json!({
            "pA": ["0x1", "0x2"],
            "pB": [["0x3", "0x4"], ["0x5", "0x6"]],
            "pC": ["0x7", "0x8"],
            "publicSignals": ["0xa", "0xb", "0xc"],
        })
    }

    #[test]
    fn test_save_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProofStore::new(dir.path());
        let path = store.save("test_proof.json", &sample_proof()).unwrap();
        assert!(path.ends_with("test_proof.json"));
        assert!(path.exists());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProofStore::new(dir.path());
        store.save("test_proof.json", &sample_proof()).unwrap();
        let loaded = store.load("test_proof.json").unwrap();
        assert_eq!(loaded, sample_proof());
    }

    #[test]
    fn test_save_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProofStore::new(dir.path().join("new").join("proofs_dir"));
        let path = store.save("test.json", &json!({"test": "data"})).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_saved_json_is_pretty_printed() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProofStore::new(dir.path());
        let path = store.save("formatted.json", &sample_proof()).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains('\n'));
        assert!(content.contains("  \"pA\""));
    }

    #[test]
    fn test_save_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProofStore::new(dir.path());
        store.save("p.json", &json!({"v": 1})).unwrap();
        store.save("p.json", &json!({"v": 2})).unwrap();
        assert_eq!(store.load("p.json").unwrap(), json!({"v": 2}));
    }

    #[test]
    fn test_no_temporary_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProofStore::new(dir.path());
        store.save("p.json", &sample_proof()).unwrap();
        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProofStore::new(dir.path());
        assert!(matches!(
            store.load("absent.json").unwrap_err(),
            StoreError::Io(_)
        ));
    }

    #[test]
    fn test_load_invalid_json_errors() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProofStore::new(dir.path());
        std::fs::write(store.path_for("bad.json"), "not json").unwrap();
        assert!(matches!(
            store.load("bad.json").unwrap_err(),
            StoreError::Serialization(_)
        ));
    }
}
