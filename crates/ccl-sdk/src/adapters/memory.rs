// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! In-memory ports for tests and local demos.

use std::collections::HashMap;

use ccl_types::{BorrowerStats, EligibilityRequest, LenderStats, Thresholds};
use tokio::sync::Mutex;

use crate::ports::{LedgerSink, PortError, ProfileSource};
use crate::proof::EligibilityProof;

/// Thresholds plus per-organisation statistics.
pub struct InMemoryProfiles {
    thresholds: Thresholds,
    borrowers: Mutex<HashMap<String, BorrowerStats>>,
    lenders: Mutex<HashMap<String, LenderStats>>,
}

impl InMemoryProfiles {
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            borrowers: Mutex::new(HashMap::new()),
            lenders: Mutex::new(HashMap::new()),
        }
    }

    pub async fn insert_borrower(&self, name: impl Into<String>, stats: BorrowerStats) {
        self.borrowers.lock().await.insert(name.into(), stats);
    }

    pub async fn insert_lender(&self, name: impl Into<String>, stats: LenderStats) {
        self.lenders.lock().await.insert(name.into(), stats);
    }
}

impl ProfileSource for InMemoryProfiles {
    async fn snapshot(&self, borrower: &str, lender: &str) -> Result<EligibilityRequest, PortError> {
        let borrower_stats = self
            .borrowers
            .lock()
            .await
            .get(borrower)
            .cloned()
            .ok_or_else(|| PortError::UnknownOrganisation(borrower.to_string()))?;
        let lender_stats = self
            .lenders
            .lock()
            .await
            .get(lender)
            .cloned()
            .ok_or_else(|| PortError::UnknownOrganisation(lender.to_string()))?;
        Ok(EligibilityRequest::new(
            self.thresholds.clone(),
            borrower_stats,
            lender_stats,
        ))
    }
}

/// Records attached proofs. Only request ids opened with
/// [`InMemoryLedger::open_request`] accept a proof.
pub struct InMemoryLedger {
    proofs: Mutex<HashMap<u64, Option<EligibilityProof>>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            proofs: Mutex::new(HashMap::new()),
        }
    }

    pub async fn open_request(&self, request_id: u64) {
        self.proofs.lock().await.entry(request_id).or_insert(None);
    }

    pub async fn get(&self, request_id: u64) -> Option<EligibilityProof> {
        self.proofs.lock().await.get(&request_id).cloned().flatten()
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerSink for InMemoryLedger {
    async fn attach_proof(&self, request_id: u64, proof: &EligibilityProof) -> Result<(), PortError> {
        let mut proofs = self.proofs.lock().await;
        let slot = proofs
            .get_mut(&request_id)
            .ok_or(PortError::UnknownRequest(request_id))?;
        *slot = Some(proof.clone());
        Ok(())
    }
}
