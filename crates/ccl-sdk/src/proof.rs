// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use ccl_circuit::PublicSignals;
use ccl_groth16::{Proof, SolidityCalldata};
use ccl_types::Decimal;

/// A Groth16 proof together with the public signals it was produced for:
/// `[score, min_credit_score, max_offset]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EligibilityProof {
    pub proof: Proof,
    pub public_signals: PublicSignals,
}

impl EligibilityProof {
    pub fn new(proof: Proof, public_signals: PublicSignals) -> Self {
        Self {
            proof,
            public_signals,
        }
    }

    /// Score as a decimal, descaled by `10^40`.
    pub fn score(&self) -> Decimal {
        self.public_signals.score().unwrap_or_else(Decimal::zero)
    }

    pub fn to_calldata(&self) -> SolidityCalldata {
        self.proof.to_calldata(self.public_signals.as_slice())
    }
}
