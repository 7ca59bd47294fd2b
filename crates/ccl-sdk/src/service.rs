// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Borrow-request handling: snapshot, prove, self-check, attach.

use std::sync::Arc;
use std::time::Duration;

use crate::context::ProofContext;
use crate::error::{EligibilityError, EligibilityResult};
use crate::ports::{LedgerSink, ProfileSource};
use crate::proof::EligibilityProof;
use crate::task::ProofTask;

pub struct EligibilityService<P, L> {
    context: Arc<ProofContext>,
    profiles: P,
    ledger: L,
    prove_timeout: Duration,
}

impl<P: ProfileSource, L: LedgerSink> EligibilityService<P, L> {
    pub fn new(context: Arc<ProofContext>, profiles: P, ledger: L, prove_timeout: Duration) -> Self {
        Self {
            context,
            profiles,
            ledger,
            prove_timeout,
        }
    }

    pub fn context(&self) -> &Arc<ProofContext> {
        &self.context
    }

    pub fn profiles(&self) -> &P {
        &self.profiles
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Prove that `borrower` may borrow from `lender` and attach the proof to
    /// `request_id`. Nothing reaches the ledger unless the proof verifies
    /// under this deployment's own key.
    #[tracing::instrument(skip(self))]
    pub async fn request_borrow(
        &self,
        request_id: u64,
        borrower: &str,
        lender: &str,
    ) -> EligibilityResult<EligibilityProof> {
        let outcome = self.run(request_id, borrower, lender).await;
        if let Err(err) = &outcome {
            err.report();
        }
        outcome
    }

    async fn run(
        &self,
        request_id: u64,
        borrower: &str,
        lender: &str,
    ) -> EligibilityResult<EligibilityProof> {
        let request = self.profiles.snapshot(borrower, lender).await?;
        tracing::debug!("profile snapshot taken");

        let proof = ProofTask::spawn(self.context.clone(), request)
            .wait(self.prove_timeout)
            .await?;

        if !self.context.verify(&proof)? {
            return Err(EligibilityError::SelfCheckFailed);
        }

        self.ledger.attach_proof(request_id, &proof).await?;
        tracing::info!(score = %proof.score(), "proof attached to borrow request");
        Ok(proof)
    }
}
