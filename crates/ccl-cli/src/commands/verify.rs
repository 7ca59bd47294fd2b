// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use ccl_sdk::{ProofEnvelope, SdkConfig, VerifierContext};

use crate::output;

pub fn run(config: &SdkConfig, proof_path: &Path) -> Result<ExitCode> {
    let data = std::fs::read_to_string(proof_path)
        .with_context(|| format!("cannot read proof at {}", proof_path.display()))?;
    let envelope = ProofEnvelope::from_json(&data)?;

    let verifier = VerifierContext::load(&config.artifact_paths()).map_err(|e| {
        output::fail_with_hint(&e.to_string(), "the verification key must come from the same setup as the proof")
    })?;
    let proof = envelope.decode(verifier.circuit())?;
    let accepted = verifier.verify(&proof)?;

    if output::is_json() {
        output::json_output(serde_json::json!({
            "valid": accepted,
            "score": accepted.then(|| proof.score().to_string()),
        }));
    } else if accepted {
        output::success("proof valid");
        output::label("score", &proof.score().to_string());
        if let Some(min) = proof.public_signals.min_credit_score() {
            output::label("min_credit_score", &min.to_string());
        }
        if let Some(max) = proof.public_signals.max_offset() {
            output::label("max_offset", &max.to_string());
        }
    } else {
        output::error_msg("proof rejected");
    }

    Ok(if accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
