// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Constraint compilation for the eligibility statement.
//!
//! With `S = 10^40`:
//!
//! ```text
//! first_time  = [times_lent == 0]
//! reputation  = credit_score * (times_repaid + 1 + first_time) + total_returned
//! numerator   = reputation * (lender_balance + 1)
//! denominator = (request_amount + 1) * (lender_times_lent + 1)
//! score * denominator = S * numerator - remainder,   0 <= remainder < denominator
//! ```
//!
//! so `score = floor(S * numerator / denominator)`. Eligibility itself is a
//! set of range checks: `credit_score >= min_credit_score`,
//! `offset + request_amount <= max_offset` and
//! `lender_balance >= request_amount`. Every input is also range checked so
//! that no product can wrap the field.

use ark_bn254::Fr;
use ccl_types::Scale;
use num_bigint::BigUint;

use crate::gadgets;
use crate::layout::*;
use crate::r1cs::{LinearCombination as Lc, R1cs};
use crate::synthesizer::EligibilitySynthesizer;
use crate::witness::Witness;

/// Compiled eligibility circuit. Construction is deterministic: two calls to
/// [`EligibilityCircuit::compile`] yield identical constraint systems and digests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EligibilityCircuit {
    r1cs: R1cs,
    digest: [u8; 32],
}

impl EligibilityCircuit {
    pub fn compile() -> Self {
        let mut cs = R1cs::new(NUM_PUBLIC, WITNESS_SIZE);
        let scale = Fr::from(Scale::SCORE.factor());

        gadgets::enforce_is_zero(&mut cs, TIMES_LENT, TIMES_LENT_INV, FIRST_TIME);
        cs.enforce(
            CREDIT_SCORE,
            Lc::wire(TIMES_REPAID) + ONE + FIRST_TIME,
            Lc::wire(REPUTATION) - TOTAL_RETURNED,
        );
        cs.enforce(REPUTATION, Lc::wire(LENDER_BALANCE) + ONE, NUMERATOR);
        cs.enforce(
            Lc::wire(REQUEST_AMOUNT) + ONE,
            Lc::wire(LENDER_TIMES_LENT) + ONE,
            DENOMINATOR,
        );
        cs.enforce(SCORE, DENOMINATOR, Lc::wire(NUMERATOR) * scale - REMAINDER);

        for check in RangeCheck::ALL {
            gadgets::enforce_range_bits(&mut cs, range_source(check), check);
        }
        debug_assert_eq!(cs.num_constraints(), NUM_CONSTRAINTS);

        let digest = cs.digest(LAYOUT_VERSION);
        tracing::debug!(
            constraints = cs.num_constraints(),
            wires = cs.num_wires(),
            "compiled eligibility circuit"
        );
        Self { r1cs: cs, digest }
    }

    pub fn r1cs(&self) -> &R1cs {
        &self.r1cs
    }

    pub fn constraint_count(&self) -> usize {
        self.r1cs.num_constraints()
    }

    pub fn public_signal_count(&self) -> usize {
        self.r1cs.num_public()
    }

    /// Total wires including the constant one.
    pub fn witness_size(&self) -> usize {
        self.r1cs.num_wires()
    }

    pub fn layout_version(&self) -> u16 {
        LAYOUT_VERSION
    }

    /// SHA-256 binding artifacts to this exact constraint system.
    pub fn digest(&self) -> [u8; 32] {
        self.digest
    }

    pub fn is_satisfied(&self, witness: &Witness) -> bool {
        self.r1cs.is_satisfied(witness.values())
    }

    pub fn first_unsatisfied(&self, witness: &Witness) -> Option<usize> {
        self.r1cs.first_unsatisfied(witness.values())
    }

    /// `ark-relations` view of this circuit, with or without an assignment.
    pub fn synthesizer<'a>(&'a self, witness: Option<&'a Witness>) -> EligibilitySynthesizer<'a> {
        EligibilitySynthesizer::new(&self.r1cs, witness.map(Witness::values))
    }
}

impl Default for EligibilityCircuit {
    fn default() -> Self {
        Self::compile()
    }
}

/// Quantity each range check decomposes.
fn range_source(check: RangeCheck) -> Lc {
    match check {
        RangeCheck::TimesRepaid => Lc::wire(TIMES_REPAID),
        RangeCheck::Offset => Lc::wire(OFFSET),
        RangeCheck::CreditScore => Lc::wire(CREDIT_SCORE),
        RangeCheck::TimesLent => Lc::wire(TIMES_LENT),
        RangeCheck::TotalReturned => Lc::wire(TOTAL_RETURNED),
        RangeCheck::RequestAmount => Lc::wire(REQUEST_AMOUNT),
        RangeCheck::LenderBalance => Lc::wire(LENDER_BALANCE),
        RangeCheck::LenderTimesLent => Lc::wire(LENDER_TIMES_LENT),
        RangeCheck::MinCreditScore => Lc::wire(MIN_CREDIT_SCORE),
        RangeCheck::MaxOffset => Lc::wire(MAX_OFFSET),
        RangeCheck::CreditMargin => Lc::wire(CREDIT_SCORE) - MIN_CREDIT_SCORE,
        RangeCheck::OffsetHeadroom => Lc::wire(MAX_OFFSET) - OFFSET - REQUEST_AMOUNT,
        RangeCheck::BalanceCoverage => Lc::wire(LENDER_BALANCE) - REQUEST_AMOUNT,
        RangeCheck::Remainder => Lc::wire(REMAINDER),
        RangeCheck::RemainderSlack => Lc::wire(DENOMINATOR) - ONE - REMAINDER,
        RangeCheck::Score => Lc::wire(SCORE),
    }
}

/// Integer inputs to the score, already range checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreInputs {
    pub credit_score: u64,
    pub times_repaid: u64,
    pub times_lent: u64,
    pub total_returned: u64,
    pub request_amount: u64,
    pub lender_balance: u64,
    pub lender_times_lent: u64,
}

/// Native evaluation of the score relation, one field per intermediate wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub first_time: bool,
    pub reputation: u128,
    pub numerator: u128,
    pub denominator: u128,
    pub score: BigUint,
    pub remainder: BigUint,
}

impl ScoreBreakdown {
    pub fn compute(inputs: &ScoreInputs) -> Self {
        let first_time = inputs.times_lent == 0;
        let weight = inputs.times_repaid as u128 + 1 + first_time as u128;
        let reputation = inputs.credit_score as u128 * weight + inputs.total_returned as u128;
        let numerator = reputation * (inputs.lender_balance as u128 + 1);
        let denominator =
            (inputs.request_amount as u128 + 1) * (inputs.lender_times_lent as u128 + 1);

        let scaled = Scale::SCORE.factor() * BigUint::from(numerator);
        let denom = BigUint::from(denominator);
        Self {
            first_time,
            reputation,
            numerator,
            denominator,
            score: &scaled / &denom,
            remainder: &scaled % &denom,
        }
    }
}
