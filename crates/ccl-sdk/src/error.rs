// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Typed errors for eligibility proving and verification.
//!
//! Two families matter to callers. Input problems (`Codec`, `Witness`,
//! `MalformedProof`) are
//! the borrower's outcome and are expected. Everything from the proof system
//! or the artifacts is a deployment defect that an operator has to fix.

use std::time::Duration;

use ccl_circuit::WitnessError;
use ccl_groth16::{ProvingError, VerifierError};
use ccl_types::CodecError;

use crate::artifacts::ArtifactError;
use crate::config::ConfigError;
use crate::ports::PortError;

#[derive(Debug, thiserror::Error)]
pub enum EligibilityError {
    #[error("invalid input: {0}")]
    Codec(#[from] CodecError),

    #[error("not eligible: {0}")]
    Witness(WitnessError),

    #[error("proving: {0}")]
    Proving(ProvingError),

    #[error("verification: {0}")]
    Verifier(#[from] VerifierError),

    #[error("artifacts: {0}")]
    Artifact(#[from] ArtifactError),

    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("collaborator: {0}")]
    Port(#[from] PortError),

    #[error("proof generation timed out after {0:?}")]
    TimedOut(Duration),

    #[error("proof generation cancelled")]
    Cancelled,

    #[error("malformed proof: {0}")]
    MalformedProof(String),

    #[error("cannot seed randomness: {0}")]
    Entropy(String),

    #[error("proving task panicked: {0}")]
    TaskFailed(String),

    #[error("generated proof failed self-verification")]
    SelfCheckFailed,
}

impl From<WitnessError> for EligibilityError {
    fn from(err: WitnessError) -> Self {
        match err {
            WitnessError::Encoding { source, .. } => Self::Codec(source),
            other => Self::Witness(other),
        }
    }
}

impl From<ProvingError> for EligibilityError {
    fn from(err: ProvingError) -> Self {
        match err {
            ProvingError::Aborted => Self::Cancelled,
            other => Self::Proving(other),
        }
    }
}

impl EligibilityError {
    /// True when the failure points at the deployment (keys, circuit,
    /// artifacts, config) rather than at the request being proven.
    pub fn is_deployment_defect(&self) -> bool {
        match self {
            Self::Codec(_)
            | Self::MalformedProof(_)
            | Self::Port(_)
            | Self::TimedOut(_)
            | Self::Cancelled => false,
            Self::Witness(WitnessError::Unsatisfied { .. }) => true,
            Self::Witness(_) => false,
            Self::Proving(_)
            | Self::Verifier(_)
            | Self::Artifact(_)
            | Self::Config(_)
            | Self::Entropy(_)
            | Self::TaskFailed(_)
            | Self::SelfCheckFailed => true,
        }
    }

    /// Log at a level matching the classification.
    pub fn report(&self) {
        if self.is_deployment_defect() {
            tracing::error!(error = %self, "eligibility pipeline defect");
        } else if matches!(self, Self::Port(_) | Self::TimedOut(_) | Self::Cancelled) {
            tracing::warn!(error = %self, "eligibility request not completed");
        } else {
            tracing::info!(outcome = %self, "eligibility request rejected");
        }
    }
}

pub type EligibilityResult<T> = Result<T, EligibilityError>;
