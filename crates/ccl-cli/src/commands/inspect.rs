// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use ccl_circuit::RangeCheck;
use ccl_sdk::{EligibilityCircuit, SdkConfig, VerifierContext};
use colored::Colorize;

use crate::output;

pub fn run(config: &SdkConfig) -> Result<()> {
    let circuit = EligibilityCircuit::compile();
    let paths = config.artifact_paths();

    // Only the verification key is loaded; the proving key is large.
    let artifacts = paths.all_exist().then(|| {
        paths
            .check_circuit(&circuit)
            .and_then(|_| VerifierContext::load(&paths).map(|_| ()))
            .map_err(|e| e.to_string())
    });

    let digest = output::hex_digest(&circuit.digest());
    if output::is_json() {
        let checks: Vec<_> = RangeCheck::ALL
            .iter()
            .map(|c| serde_json::json!({ "name": c.label(), "bits": c.bits(), "first_wire": c.offset() }))
            .collect();
        output::json_output(serde_json::json!({
            "layout_version": circuit.layout_version(),
            "circuit_digest": digest,
            "constraints": circuit.constraint_count(),
            "wires": circuit.witness_size(),
            "public_signals": circuit.public_signal_count(),
            "range_checks": checks,
            "artifacts_dir": config.artifacts_dir.display().to_string(),
            "artifacts_found": artifacts.is_some(),
            "artifacts_ok": matches!(artifacts, Some(Ok(()))),
            "artifacts_error": artifacts.as_ref().and_then(|r| r.as_ref().err()),
        }));
        return Ok(());
    }

    output::label("layout_version", &circuit.layout_version().to_string());
    output::label("circuit_digest", &digest);
    output::label("constraints", &circuit.constraint_count().to_string());
    output::label("wires", &circuit.witness_size().to_string());
    output::label("public_signals", "score, minCreditScore, maxOffset");
    for check in RangeCheck::ALL {
        output::info(&format!("  {:<16} {:>3} bits", check.label(), check.bits()));
    }
    output::label("artifacts_dir", &config.artifacts_dir.display().to_string());
    match artifacts {
        Some(Ok(())) => output::label("artifacts", &"ok".green().to_string()),
        Some(Err(e)) => output::label("artifacts", &e.red().to_string()),
        None => {
            output::label("artifacts", &"not found".red().to_string());
            output::info("run `ccl setup` to generate development keys");
        }
    }
    Ok(())
}
