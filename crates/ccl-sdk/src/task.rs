// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Proof generation off the async executor.
//!
//! Proving is CPU bound, so it runs on tokio's blocking pool. The task polls
//! an [`AbortSignal`] between prover phases; [`ProofTask::wait`] raises it
//! when the deadline passes, so a timed-out proof stops consuming CPU at the
//! next checkpoint instead of running to completion. Dropping an unfinished
//! [`ProofTask`], or a pending `join`/`wait` future, raises it too.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use ccl_types::EligibilityRequest;
use tokio::task::JoinHandle;

use crate::context::{crypto_rng, ProofContext};
use crate::error::{EligibilityError, EligibilityResult};
use crate::proof::EligibilityProof;

/// Shared cancellation flag.
#[derive(Clone, Debug, Default)]
pub struct AbortSignal(Arc<AtomicBool>);

impl AbortSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn flag(&self) -> &AtomicBool {
        &self.0
    }
}

pub struct ProofTask {
    abort: AbortSignal,
    handle: JoinHandle<EligibilityResult<EligibilityProof>>,
}

impl ProofTask {
    /// Must be called from within a tokio runtime.
    pub fn spawn(ctx: Arc<ProofContext>, request: EligibilityRequest) -> Self {
        Self::spawn_with_signal(ctx, request, AbortSignal::new())
    }

    pub fn spawn_with_signal(
        ctx: Arc<ProofContext>,
        request: EligibilityRequest,
        abort: AbortSignal,
    ) -> Self {
        let signal = abort.clone();
        let handle = tokio::task::spawn_blocking(move || {
            let mut rng = crypto_rng()?;
            ctx.prove_with_abort(&request, &mut rng, signal.flag())
        });
        Self { abort, handle }
    }

    pub fn signal(&self) -> &AbortSignal {
        &self.abort
    }

    /// Ask the prover to stop at its next checkpoint.
    pub fn cancel(&self) {
        self.abort.raise();
    }

    /// Wait without a deadline.
    pub async fn join(mut self) -> EligibilityResult<EligibilityProof> {
        match (&mut self.handle).await {
            Ok(result) => result,
            Err(e) => Err(EligibilityError::TaskFailed(e.to_string())),
        }
    }

    /// Wait at most `limit`. On timeout the task is cancelled and
    /// [`EligibilityError::TimedOut`] is returned.
    pub async fn wait(mut self, limit: Duration) -> EligibilityResult<EligibilityProof> {
        match tokio::time::timeout(limit, &mut self.handle).await {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => Err(EligibilityError::TaskFailed(e.to_string())),
            Err(_) => {
                self.abort.raise();
                tracing::warn!(?limit, "proof generation timed out, cancelling");
                Err(EligibilityError::TimedOut(limit))
            }
        }
    }
}

impl Drop for ProofTask {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            self.abort.raise();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_is_shared_between_clones() {
        let signal = AbortSignal::new();
        let other = signal.clone();
        assert!(!other.is_raised());
        signal.raise();
        assert!(other.is_raised());
        assert!(other.flag().load(Ordering::Relaxed));
    }
}
