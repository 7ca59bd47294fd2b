// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Collaborator boundaries of the eligibility service.
//!
//! Profile storage and the lending ledger live outside this crate. The
//! service only reads a snapshot of the two organisations involved and hands
//! the finished proof to the ledger.
//!
//! Implementations:
//! - [`InMemoryProfiles`](crate::adapters::InMemoryProfiles), [`InMemoryLedger`](crate::adapters::InMemoryLedger)

use std::future::Future;

use ccl_types::EligibilityRequest;

use crate::proof::EligibilityProof;

/// Read-only view of thresholds and organisation statistics.
pub trait ProfileSource: Send + Sync {
    /// Current thresholds, borrower stats and lender stats assembled into a
    /// request. The borrower's `request_amount` is the amount being asked for.
    fn snapshot(
        &self,
        borrower: &str,
        lender: &str,
    ) -> impl Future<Output = Result<EligibilityRequest, PortError>> + Send;
}

/// Receives verified proofs for pending borrow requests.
pub trait LedgerSink: Send + Sync {
    fn attach_proof(
        &self,
        request_id: u64,
        proof: &EligibilityProof,
    ) -> impl Future<Output = Result<(), PortError>> + Send;
}

#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("unknown organisation: {0}")]
    UnknownOrganisation(String),

    #[error("unknown borrow request: {0}")]
    UnknownRequest(u64),

    #[error("backend: {0}")]
    Backend(String),
}
