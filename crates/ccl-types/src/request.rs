// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Inputs to one eligibility proof.
//!
//! Thresholds become public signals. Borrower and lender statistics stay
//! private to the prover. Field names follow the ledger's camelCase JSON.

use serde::{Deserialize, Serialize};

use crate::codec::Decimal;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thresholds {
    pub min_credit_score: Decimal,
    pub max_offset: Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowerStats {
    pub times_repaid: Decimal,
    /// Carbon debt already carried.
    pub offset: Decimal,
    pub credit_score: Decimal,
    pub times_lent: Decimal,
    pub total_returned: Decimal,
    pub request_amount: Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LenderStats {
    pub balance: Decimal,
    pub times_lent: Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityRequest {
    pub thresholds: Thresholds,
    pub borrower: BorrowerStats,
    pub lender: LenderStats,
}

impl EligibilityRequest {
    pub fn new(thresholds: Thresholds, borrower: BorrowerStats, lender: LenderStats) -> Self {
        Self {
            thresholds,
            borrower,
            lender,
        }
    }
}
