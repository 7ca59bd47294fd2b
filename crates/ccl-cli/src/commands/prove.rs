// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use ccl_sdk::{
    EligibilityError, EligibilityRequest, ProofContext, ProofEnvelope, ProofTask, SdkConfig,
};

use crate::output;

pub async fn run(config: &SdkConfig, request_path: &Path, out: Option<&Path>) -> Result<()> {
    let data = std::fs::read_to_string(request_path)
        .with_context(|| format!("cannot read request at {}", request_path.display()))?;
    let request: EligibilityRequest =
        serde_json::from_str(&data).context("invalid request JSON")?;

    let pb = output::spinner("loading artifacts...");
    let ctx = match ProofContext::load(&config.artifact_paths()) {
        Ok(ctx) => Arc::new(ctx),
        Err(e) => {
            pb.finish_and_clear();
            return Err(output::fail_with_hint(
                &e.to_string(),
                "run `ccl setup` or point `artifacts_dir` at the deployment's artifacts",
            ));
        }
    };

    pb.set_message("generating proof...");
    let result = ProofTask::spawn(ctx.clone(), request)
        .wait(config.prove_timeout())
        .await;
    pb.finish_and_clear();

    let proof = match result {
        Ok(proof) => proof,
        Err(e @ (EligibilityError::Witness(_) | EligibilityError::Codec(_))) => {
            if output::is_json() {
                output::json_output(serde_json::json!({
                    "eligible": false,
                    "reason": e.to_string(),
                }));
            }
            return Err(e.into());
        }
        Err(e @ EligibilityError::TimedOut(_)) => {
            return Err(output::fail_with_hint(
                &e.to_string(),
                "raise it with `ccl config set prove_timeout_secs <N>`",
            ));
        }
        Err(e) => {
            e.report();
            return Err(e.into());
        }
    };

    let envelope = ProofEnvelope::new(&proof, ctx.circuit());
    let json = envelope.to_json()?;
    match out {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("cannot write proof to {}", path.display()))?;
            if output::is_json() {
                output::json_output(serde_json::json!({
                    "eligible": true,
                    "score": envelope.score,
                    "proof_path": path.display().to_string(),
                }));
            } else {
                output::success(&format!("proof written to {}", path.display()));
                output::label("score", &envelope.score);
            }
        }
        None => {
            output::label("score", &envelope.score);
            println!("{json}");
        }
    }
    Ok(())
}
