//! End-to-end delivery-proof workflow: assemble per-recipient proofs,
//! build the envelope, validate, persist, reload, and re-validate.

use fdp_envelope::{build_envelope, validate_envelope, RecipientEntry};
use fdp_prover::{MockBackend, ProofAssembler};
use fdp_store::ProofStore;

const SAMPLE_EML: &[u8] =
    b"From: sender@farewell.test\r\nTo: recipient@test.com\r\nSubject: Farewell\r\n\r\nGoodbye.";

#[test]
fn single_proof_save_reload_preserves_points() {
    let assembler = ProofAssembler::new(MockBackend::default());
    let content_hash = format!("0x{}", "ab".repeat(32));
    let proof = assembler
        .assemble(SAMPLE_EML, "recipient@test.com", &content_hash)
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let store = ProofStore::new(dir.path());
    store.save("integration_test.json", &proof).unwrap();

    let loaded = store.load("integration_test.json").unwrap();
    assert_eq!(loaded["publicSignals"][2], content_hash.as_str());
    assert_eq!(loaded, serde_json::to_value(&proof).unwrap());
}

#[test]
fn delivery_proof_build_validate_save_reload() {
    let assembler = ProofAssembler::new(MockBackend::default());
    let recipients = ["alice@test.com", "bob@test.com"];
    let content_hash = format!("0x{}", "cd".repeat(32));

    let entries: Vec<RecipientEntry> = recipients
        .iter()
        .enumerate()
        .map(|(i, email)| RecipientEntry {
            recipient_index: i as u32,
            proof: assembler.assemble(SAMPLE_EML, email, &content_hash).unwrap(),
            email: (*email).to_owned(),
        })
        .collect();

    let envelope = build_envelope("0xDEAD", 5, entries);

    // Freshly built envelopes validate.
    let as_value = serde_json::to_value(&envelope).unwrap();
    validate_envelope(&as_value).unwrap();

    // Persist and reload.
    let dir = tempfile::tempdir().unwrap();
    let store = ProofStore::new(dir.path());
    store.save("delivery-proof.json", &envelope).unwrap();
    let loaded = store.load("delivery-proof.json").unwrap();

    // The reloaded value validates independently and preserves everything.
    validate_envelope(&loaded).unwrap();
    assert_eq!(loaded["type"], "farewell-delivery-proof");
    assert_eq!(loaded["version"], 1);
    assert_eq!(loaded["owner"], "0xDEAD");
    assert_eq!(loaded["messageIndex"], 5);

    let loaded_recipients = loaded["recipients"].as_array().unwrap();
    assert_eq!(loaded_recipients.len(), 2);
    for (i, entry) in loaded_recipients.iter().enumerate() {
        assert_eq!(entry["recipientIndex"], i as u64);
        assert_eq!(entry["proof"]["publicSignals"][2], content_hash.as_str());
    }

    // Distinct recipients carry distinct identity fingerprints.
    assert_ne!(
        loaded_recipients[0]["proof"]["publicSignals"][0],
        loaded_recipients[1]["proof"]["publicSignals"][0]
    );
}
