// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Immutable proving and verification state, built once per process.

use std::sync::atomic::AtomicBool;

use ark_std::rand::{CryptoRng, RngCore};
use rand::rngs::{OsRng, StdRng};
use rand::SeedableRng;
use ccl_circuit::{EligibilityCircuit, Witness, WitnessGenerator};
use ccl_groth16::{PreparedVerificationKey, ProvingKey, VerificationKey};
use ccl_types::EligibilityRequest;

use crate::artifacts::{ArtifactError, ArtifactPaths};
use crate::error::{EligibilityError, EligibilityResult};
use crate::proof::EligibilityProof;

/// Blinding randomness for proofs, seeded from the operating system.
pub fn crypto_rng() -> EligibilityResult<StdRng> {
    StdRng::from_rng(OsRng).map_err(|e| EligibilityError::Entropy(e.to_string()))
}

/// Circuit, proving key and prepared verification key. Shared read-only
/// between concurrent proof tasks behind an `Arc`.
pub struct ProofContext {
    circuit: EligibilityCircuit,
    proving_key: ProvingKey,
    verifier: VerifierContext,
}

impl ProofContext {
    /// Build from a proving key; the verification key is taken from it.
    pub fn new(circuit: EligibilityCircuit, proving_key: ProvingKey) -> Result<Self, ArtifactError> {
        let vk = proving_key.verification_key().clone();
        Self::with_verification_key(circuit, proving_key, vk)
    }

    pub fn with_verification_key(
        circuit: EligibilityCircuit,
        proving_key: ProvingKey,
        vk: VerificationKey,
    ) -> Result<Self, ArtifactError> {
        if proving_key.verification_key() != &vk {
            return Err(ArtifactError::KeyMismatch);
        }
        if proving_key.num_wires() != circuit.witness_size()
            || vk.num_public() != circuit.public_signal_count()
        {
            return Err(ArtifactError::CircuitMismatch);
        }
        Ok(Self {
            verifier: VerifierContext {
                pvk: vk.prepare(),
                circuit: circuit.clone(),
            },
            circuit,
            proving_key,
        })
    }

    /// Compile the circuit and load all three artifacts, failing on any
    /// mismatch before a request is ever served.
    pub fn load(paths: &ArtifactPaths) -> Result<Self, ArtifactError> {
        let circuit = EligibilityCircuit::compile();
        paths.check_circuit(&circuit)?;
        let (pk, vk) = paths.load_keys(&circuit)?;
        tracing::info!(
            layout = circuit.layout_version(),
            digest = %hex::encode(circuit.digest()),
            "loaded eligibility artifacts"
        );
        Self::with_verification_key(circuit, pk, vk)
    }

    pub fn circuit(&self) -> &EligibilityCircuit {
        &self.circuit
    }

    pub fn proving_key(&self) -> &ProvingKey {
        &self.proving_key
    }

    pub fn verifier(&self) -> &VerifierContext {
        &self.verifier
    }

    pub fn generate_witness(&self, request: &EligibilityRequest) -> EligibilityResult<Witness> {
        Ok(WitnessGenerator::generate(request, &self.circuit)?)
    }

    pub fn prove<R: RngCore + CryptoRng>(
        &self,
        request: &EligibilityRequest,
        rng: &mut R,
    ) -> EligibilityResult<EligibilityProof> {
        self.prove_with_abort(request, rng, &AtomicBool::new(false))
    }

    /// Witness generation then proving, honouring `abort` between phases.
    pub fn prove_with_abort<R: RngCore + CryptoRng>(
        &self,
        request: &EligibilityRequest,
        rng: &mut R,
        abort: &AtomicBool,
    ) -> EligibilityResult<EligibilityProof> {
        let witness = self.generate_witness(request)?;
        tracing::debug!("witness generated");
        let proof =
            ccl_groth16::prove_with_abort(&self.circuit, &self.proving_key, &witness, rng, abort)?;
        let eligibility = EligibilityProof::new(proof, witness.public_signals());
        tracing::info!(score = %eligibility.score(), "eligibility proof generated");
        Ok(eligibility)
    }

    pub fn verify(&self, proof: &EligibilityProof) -> EligibilityResult<bool> {
        self.verifier.verify(proof)
    }
}

/// Verification-only state for services that never prove.
#[derive(Clone)]
pub struct VerifierContext {
    circuit: EligibilityCircuit,
    pvk: PreparedVerificationKey,
}

impl VerifierContext {
    pub fn new(circuit: EligibilityCircuit, vk: VerificationKey) -> Result<Self, ArtifactError> {
        if vk.num_public() != circuit.public_signal_count() {
            return Err(ArtifactError::CircuitMismatch);
        }
        Ok(Self {
            circuit,
            pvk: vk.prepare(),
        })
    }

    pub fn load(paths: &ArtifactPaths) -> Result<Self, ArtifactError> {
        let circuit = EligibilityCircuit::compile();
        let vk = paths.load_verification_key(&circuit)?;
        Self::new(circuit, vk)
    }

    pub fn circuit(&self) -> &EligibilityCircuit {
        &self.circuit
    }

    pub fn verification_key(&self) -> &VerificationKey {
        self.pvk.vk()
    }

    pub fn verify(&self, proof: &EligibilityProof) -> EligibilityResult<bool> {
        let accepted =
            ccl_groth16::verify(&proof.proof, proof.public_signals.as_slice(), &self.pvk)?;
        tracing::info!(accepted, "eligibility proof verified");
        Ok(accepted)
    }
}
