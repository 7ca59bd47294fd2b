// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use ark_std::rand::{rngs::StdRng, SeedableRng};
use ccl_circuit::{EligibilityCircuit, WitnessError};
use ccl_groth16::ProvingKey;
use ccl_sdk::adapters::{InMemoryLedger, InMemoryProfiles};
use ccl_sdk::context::crypto_rng;
use ccl_sdk::ports::PortError;
use ccl_sdk::{
    AbortSignal, ArtifactError, ArtifactPaths, BorrowerStats, EligibilityError,
    EligibilityRequest, EligibilityService, LenderStats, ProofContext, ProofEnvelope, ProofTask,
    Thresholds, VerifierContext,
};
use ccl_types::Decimal;

const SCENARIO_SCORE_PREFIX: &str = "5224.402985074626865671";

fn keys() -> &'static (EligibilityCircuit, ProvingKey) {
    static KEYS: OnceLock<(EligibilityCircuit, ProvingKey)> = OnceLock::new();
    KEYS.get_or_init(|| {
        let circuit = EligibilityCircuit::compile();
        let (pk, _) = ccl_groth16::setup(&circuit, &mut StdRng::seed_from_u64(2026)).unwrap();
        (circuit, pk)
    })
}

fn context() -> Arc<ProofContext> {
    static CTX: OnceLock<Arc<ProofContext>> = OnceLock::new();
    CTX.get_or_init(|| {
        let (circuit, pk) = keys().clone();
        Arc::new(ProofContext::new(circuit, pk).unwrap())
    })
    .clone()
}

fn thresholds() -> Thresholds {
    Thresholds {
        min_credit_score: 70u64.into(),
        max_offset: 10_000u64.into(),
    }
}

fn borrower() -> BorrowerStats {
    BorrowerStats {
        times_repaid: 3u64.into(),
        offset: 9_000u64.into(),
        credit_score: 85u64.into(),
        times_lent: 1u64.into(),
        total_returned: 500u64.into(),
        request_amount: 200u64.into(),
    }
}

fn lender() -> LenderStats {
    LenderStats {
        balance: 10_000u64.into(),
        times_lent: 7u64.into(),
    }
}

fn scenario() -> EligibilityRequest {
    EligibilityRequest::new(thresholds(), borrower(), lender())
}

fn low_credit() -> EligibilityRequest {
    let mut request = scenario();
    request.borrower.credit_score = 50u64.into();
    request
}

#[test]
fn test_scenario_proves_and_verifies() {
    let ctx = context();
    let proof = ctx.prove(&scenario(), &mut StdRng::seed_from_u64(1)).unwrap();
    assert!(ctx.verify(&proof).unwrap());
    assert!(proof.score().to_string().starts_with(SCENARIO_SCORE_PREFIX));
    assert_eq!(proof.public_signals.min_credit_score(), Some(Decimal::from(70u64)));
    assert_eq!(proof.public_signals.max_offset(), Some(Decimal::from(10_000u64)));
}

#[test]
fn test_low_credit_score_yields_no_proof() {
    let ctx = context();
    let err = ctx.prove(&low_credit(), &mut StdRng::seed_from_u64(2)).unwrap_err();
    assert!(matches!(
        err,
        EligibilityError::Witness(WitnessError::BelowMinimumCreditScore)
    ));
    assert!(!err.is_deployment_defect());
}

#[test]
fn test_fractional_input_is_codec_error() {
    let ctx = context();
    let mut request = scenario();
    request.borrower.request_amount = "200.5".parse().unwrap();
    let err = ctx.prove(&request, &mut StdRng::seed_from_u64(3)).unwrap_err();
    assert!(matches!(err, EligibilityError::Codec(_)));
}

#[test]
fn test_artifacts_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let paths = ArtifactPaths::in_dir(dir.path());
    let (circuit, pk) = keys();
    paths.save_all(circuit, pk).unwrap();
    assert!(paths.all_exist());

    let loaded = ProofContext::load(&paths).unwrap();
    assert_eq!(loaded.proving_key(), pk);

    let proof = context().prove(&scenario(), &mut StdRng::seed_from_u64(4)).unwrap();
    let verifier = VerifierContext::load(&paths).unwrap();
    assert!(verifier.verify(&proof).unwrap());
    assert!(loaded.verify(&proof).unwrap());
}

#[test]
fn test_artifacts_from_other_circuit_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let paths = ArtifactPaths::in_dir(dir.path());
    let (circuit, pk) = keys();
    paths.save_all(circuit, pk).unwrap();

    let mut bytes = std::fs::read(&paths.verification_key).unwrap();
    bytes[20] ^= 0x01;
    std::fs::write(&paths.verification_key, &bytes).unwrap();
    assert!(matches!(
        VerifierContext::load(&paths),
        Err(ArtifactError::CircuitMismatch)
    ));

    let mut bytes = std::fs::read(&paths.proving_key).unwrap();
    bytes[8] = bytes[8].wrapping_add(1);
    std::fs::write(&paths.proving_key, &bytes).unwrap();
    assert!(matches!(
        ProofContext::load(&paths),
        Err(ArtifactError::LayoutMismatch { .. })
    ));
}

#[test]
fn test_missing_artifacts_reported() {
    let dir = tempfile::tempdir().unwrap();
    let paths = ArtifactPaths::in_dir(dir.path());
    assert!(!paths.all_exist());
    assert!(matches!(
        ProofContext::load(&paths),
        Err(ArtifactError::Missing(path)) if path == paths.circuit
    ));
}

#[test]
fn test_keys_from_different_setups_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let paths = ArtifactPaths::in_dir(dir.path());
    let (circuit, pk) = keys();
    paths.save_all(circuit, pk).unwrap();

    let (_, other_vk) = ccl_groth16::setup(circuit, &mut StdRng::seed_from_u64(77)).unwrap();
    ccl_sdk::artifacts::save(
        &paths.verification_key,
        ccl_sdk::ArtifactKind::VerificationKey,
        circuit,
        &other_vk,
    )
    .unwrap();
    assert!(matches!(
        ProofContext::load(&paths),
        Err(ArtifactError::KeyMismatch)
    ));
}

#[test]
fn test_envelope_json_roundtrip() {
    let ctx = context();
    let proof = ctx.prove(&scenario(), &mut StdRng::seed_from_u64(5)).unwrap();
    let json = ProofEnvelope::new(&proof, ctx.circuit()).to_json().unwrap();
    assert!(json.contains("\"publicSignals\""));
    assert!(json.contains(SCENARIO_SCORE_PREFIX));

    let decoded = ProofEnvelope::from_json(&json)
        .unwrap()
        .decode(ctx.circuit())
        .unwrap();
    assert_eq!(decoded, proof);
    assert!(ctx.verify(&decoded).unwrap());
}

#[test]
fn test_envelope_for_other_circuit_rejected() {
    let ctx = context();
    let proof = ctx.prove(&scenario(), &mut StdRng::seed_from_u64(6)).unwrap();
    let mut envelope = ProofEnvelope::new(&proof, ctx.circuit());
    envelope.circuit_digest = format!("0x{}", "00".repeat(32));
    assert!(matches!(
        envelope.decode(ctx.circuit()),
        Err(EligibilityError::Artifact(ArtifactError::CircuitMismatch))
    ));
}

#[test]
fn test_malformed_envelope_is_not_a_defect() {
    let err = ProofEnvelope::from_json("{\"layoutVersion\": 1,").unwrap_err();
    assert!(matches!(err, EligibilityError::MalformedProof(_)));
    assert!(!err.is_deployment_defect());

    let ctx = context();
    let proof = ctx.prove(&scenario(), &mut StdRng::seed_from_u64(8)).unwrap();
    let mut envelope = ProofEnvelope::new(&proof, ctx.circuit());
    envelope.calldata.a[0] = "0xzz".to_string();
    let err = envelope.decode(ctx.circuit()).unwrap_err();
    assert!(matches!(err, EligibilityError::MalformedProof(_)));
    assert!(!err.is_deployment_defect());
}

#[test]
fn test_os_seeded_proofs_differ() {
    let ctx = context();
    let first = ctx.prove(&scenario(), &mut crypto_rng().unwrap()).unwrap();
    let second = ctx.prove(&scenario(), &mut crypto_rng().unwrap()).unwrap();
    assert_ne!(first.proof, second.proof);
    assert!(ctx.verify(&first).unwrap());
    assert!(ctx.verify(&second).unwrap());
}

#[test]
fn test_inflated_score_does_not_verify() {
    let ctx = context();
    let proof = ctx.prove(&scenario(), &mut StdRng::seed_from_u64(7)).unwrap();
    let mut envelope = ProofEnvelope::new(&proof, ctx.circuit());
    envelope.score = "999999".to_string();
    envelope.calldata.public_signals[0] = format!("0x{:064x}", 1u64 << 60);
    let forged = envelope.decode(ctx.circuit()).unwrap();
    assert!(!ctx.verify(&forged).unwrap());
}

#[tokio::test]
async fn test_task_completes() {
    let proof = ProofTask::spawn(context(), scenario())
        .wait(Duration::from_secs(600))
        .await
        .unwrap();
    assert!(context().verify(&proof).unwrap());
}

#[tokio::test]
async fn test_task_cancelled_before_start() {
    let signal = AbortSignal::new();
    signal.raise();
    let task = ProofTask::spawn_with_signal(context(), scenario(), signal);
    let result = task.join().await;
    assert!(matches!(result, Err(EligibilityError::Cancelled)));
}

#[tokio::test]
async fn test_task_timeout_raises_abort() {
    let task = ProofTask::spawn(context(), scenario());
    let signal = task.signal().clone();
    let result = task.wait(Duration::from_millis(1)).await;
    assert!(matches!(result, Err(EligibilityError::TimedOut(_))));
    assert!(signal.is_raised());
}

#[tokio::test]
async fn test_dropped_wait_raises_abort() {
    let task = ProofTask::spawn(context(), scenario());
    let signal = task.signal().clone();
    let outer = tokio::time::timeout(Duration::from_millis(1), task.wait(Duration::from_secs(600))).await;
    assert!(outer.is_err());
    assert!(signal.is_raised());
}

#[tokio::test]
async fn test_dropped_task_raises_abort() {
    let task = ProofTask::spawn(context(), scenario());
    let signal = task.signal().clone();
    drop(task);
    assert!(signal.is_raised());
}

async fn service() -> EligibilityService<InMemoryProfiles, InMemoryLedger> {
    let profiles = InMemoryProfiles::new(thresholds());
    profiles.insert_borrower("acme", borrower()).await;
    profiles.insert_lender("greenbank", lender()).await;
    let mut weak = borrower();
    weak.credit_score = 50u64.into();
    profiles.insert_borrower("fragile", weak).await;

    let ledger = InMemoryLedger::new();
    ledger.open_request(1).await;
    ledger.open_request(2).await;
    EligibilityService::new(context(), profiles, ledger, Duration::from_secs(600))
}

#[tokio::test]
async fn test_service_attaches_verified_proof() {
    let service = service().await;
    let proof = service.request_borrow(1, "acme", "greenbank").await.unwrap();
    assert_eq!(service.ledger().get(1).await, Some(proof.clone()));
    assert!(proof.score().to_string().starts_with(SCENARIO_SCORE_PREFIX));
}

#[tokio::test]
async fn test_service_ineligible_borrower_attaches_nothing() {
    let service = service().await;
    let err = service.request_borrow(2, "fragile", "greenbank").await.unwrap_err();
    assert!(matches!(
        err,
        EligibilityError::Witness(WitnessError::BelowMinimumCreditScore)
    ));
    assert!(service.ledger().get(2).await.is_none());
}

#[tokio::test]
async fn test_service_unknown_request_and_organisation() {
    let service = service().await;
    let err = service.request_borrow(99, "acme", "greenbank").await.unwrap_err();
    assert!(matches!(
        err,
        EligibilityError::Port(PortError::UnknownRequest(99))
    ));

    let err = service.request_borrow(1, "ghost", "greenbank").await.unwrap_err();
    assert!(matches!(
        err,
        EligibilityError::Port(PortError::UnknownOrganisation(_))
    ));
    assert!(service.ledger().get(1).await.is_none());
}
