// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! JSON envelope for eligibility proofs.
//!
//! The proof and public signals travel as [`SolidityCalldata`], so the same
//! file can be replayed against an on-chain verifier. The envelope also pins
//! the circuit layout and digest, and carries the descaled score for humans.
//!
//! ```json
//! {
//!   "layoutVersion": 1,
//!   "circuitDigest": "0x…",
//!   "score": "5224.402985074626865671641791044776119402985",
//!   "calldata": { "a": [..], "b": [[..], [..]], "c": [..], "publicSignals": [..] }
//! }
//! ```

use ccl_circuit::{EligibilityCircuit, PublicSignals};
use ccl_groth16::SolidityCalldata;
use serde::{Deserialize, Serialize};

use crate::artifacts::ArtifactError;
use crate::error::{EligibilityError, EligibilityResult};
use crate::proof::EligibilityProof;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofEnvelope {
    pub layout_version: u16,
    pub circuit_digest: String,
    pub score: String,
    pub calldata: SolidityCalldata,
}

impl ProofEnvelope {
    pub fn new(proof: &EligibilityProof, circuit: &EligibilityCircuit) -> Self {
        Self {
            layout_version: circuit.layout_version(),
            circuit_digest: format!("0x{}", hex::encode(circuit.digest())),
            score: proof.score().to_string(),
            calldata: proof.to_calldata(),
        }
    }

    /// Decode the proof, refusing envelopes produced for another circuit.
    /// The `score` field is informational; the verifier only trusts the
    /// public signals inside the calldata.
    pub fn decode(&self, circuit: &EligibilityCircuit) -> EligibilityResult<EligibilityProof> {
        if self.layout_version != circuit.layout_version() {
            return Err(ArtifactError::LayoutMismatch {
                expected: circuit.layout_version(),
                found: self.layout_version,
            }
            .into());
        }
        let digest = self.circuit_digest.strip_prefix("0x").unwrap_or(&self.circuit_digest);
        if !digest.eq_ignore_ascii_case(&hex::encode(circuit.digest())) {
            return Err(ArtifactError::CircuitMismatch.into());
        }
        let (proof, signals) = self
            .calldata
            .decode()
            .map_err(|e| EligibilityError::MalformedProof(e.to_string()))?;
        Ok(EligibilityProof::new(proof, PublicSignals::new(signals)))
    }

    pub fn to_json(&self) -> EligibilityResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ArtifactError::Serialization(e.to_string()).into())
    }

    /// Parse an envelope received from a borrower. Bad input is the
    /// sender's problem, not the deployment's.
    pub fn from_json(json: &str) -> EligibilityResult<Self> {
        serde_json::from_str(json).map_err(|e| EligibilityError::MalformedProof(e.to_string()))
    }
}
