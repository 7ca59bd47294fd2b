// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use ark_std::rand::{rngs::StdRng, SeedableRng};
use ccl_sdk::context::crypto_rng;
use ccl_sdk::{EligibilityCircuit, SdkConfig};

use crate::output;

pub fn run(config: &SdkConfig, seed: Option<u64>, force: bool) -> Result<()> {
    let paths = config.artifact_paths();
    if paths.all_exist() && !force {
        return Err(output::fail_with_hint(
            &format!("artifacts already exist in {}", config.artifacts_dir.display()),
            "pass --force to overwrite them",
        ));
    }

    output::warn("development setup: keys come from a single-party ceremony in this process");
    output::warn("production deployments must load artifacts from a multi-party ceremony");
    if seed.is_some() {
        output::warn("--seed makes the toxic waste reproducible; never use these keys with real value");
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => crypto_rng()?,
    };

    let pb = output::spinner("compiling circuit and generating keys...");
    let circuit = EligibilityCircuit::compile();
    let (pk, _) = ccl_groth16::setup(&circuit, &mut rng).context("setup failed")?;
    pb.set_message("writing artifacts...");
    paths
        .save_all(&circuit, &pk)
        .with_context(|| format!("cannot write artifacts to {}", config.artifacts_dir.display()))?;
    pb.finish_and_clear();

    let digest = output::hex_digest(&circuit.digest());
    if output::is_json() {
        output::json_output(serde_json::json!({
            "artifacts_dir": config.artifacts_dir.display().to_string(),
            "layout_version": circuit.layout_version(),
            "circuit_digest": digest,
            "constraints": circuit.constraint_count(),
            "deterministic": seed.is_some(),
        }));
    } else {
        output::success(&format!("artifacts written to {}", config.artifacts_dir.display()));
        output::label("circuit_digest", &digest);
        output::label("constraints", &circuit.constraint_count().to_string());
    }
    Ok(())
}
