// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Witness generation.
//!
//! Inputs are decoded at unit scale, checked against the circuit's bit widths
//! and eligibility rules, then every intermediate and bit wire is filled in.
//! A witness is only returned once it satisfies every constraint, so a
//! successful [`WitnessGenerator::generate`] always leads to a provable
//! statement.

use std::ops::Index;

use ark_bn254::Fr;
use ark_ff::{One, Zero};
use ccl_types::{decode, encode, CodecError, Decimal, EligibilityRequest, Scale};
use num_bigint::BigUint;

use crate::eligibility::{EligibilityCircuit, ScoreBreakdown, ScoreInputs};
use crate::gadgets;
use crate::layout::*;

#[derive(Debug, thiserror::Error)]
pub enum WitnessError {
    #[error("{field}: {source}")]
    Encoding {
        field: &'static str,
        #[source]
        source: CodecError,
    },
    #[error("{field} does not fit in {bits} bits")]
    OutOfRange { field: &'static str, bits: usize },
    #[error("credit score is below the required minimum")]
    BelowMinimumCreditScore,
    #[error("offset after this loan would exceed the allowed maximum")]
    OffsetExceedsMaximum,
    #[error("lender balance does not cover the requested amount")]
    InsufficientLenderBalance,
    #[error("witness violates constraint {constraint}")]
    Unsatisfied { constraint: usize },
}

/// Full wire assignment, constant wire first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Witness(Vec<Fr>);

impl Witness {
    /// Wraps a raw assignment without checking it.
    pub fn from_values(values: Vec<Fr>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[Fr] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Wires `1..=NUM_PUBLIC`.
    pub fn public_signals(&self) -> PublicSignals {
        let end = (NUM_PUBLIC + 1).min(self.0.len());
        PublicSignals(self.0.get(1..end).unwrap_or_default().to_vec())
    }

    pub fn into_inner(self) -> Vec<Fr> {
        self.0
    }
}

impl Index<usize> for Witness {
    type Output = Fr;

    fn index(&self, wire: usize) -> &Fr {
        &self.0[wire]
    }
}

/// Public signals in layout order: `[score, min_credit_score, max_offset]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicSignals(Vec<Fr>);

impl PublicSignals {
    pub fn new(values: Vec<Fr>) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[Fr] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Score as a decimal at `10^40` scale, if present.
    pub fn score(&self) -> Option<Decimal> {
        self.0.first().map(|fe| decode(fe, Scale::SCORE))
    }

    pub fn min_credit_score(&self) -> Option<Decimal> {
        self.0.get(MIN_CREDIT_SCORE - 1).map(|fe| decode(fe, Scale::UNIT))
    }

    pub fn max_offset(&self) -> Option<Decimal> {
        self.0.get(MAX_OFFSET - 1).map(|fe| decode(fe, Scale::UNIT))
    }

    pub fn into_inner(self) -> Vec<Fr> {
        self.0
    }
}

impl AsRef<[Fr]> for PublicSignals {
    fn as_ref(&self) -> &[Fr] {
        &self.0
    }
}

/// Bounded integer view of a request.
struct Inputs {
    times_repaid: u64,
    offset: u64,
    credit_score: u64,
    times_lent: u64,
    total_returned: u64,
    request_amount: u64,
    lender_balance: u64,
    lender_times_lent: u64,
    min_credit_score: u64,
    max_offset: u64,
}

impl Inputs {
    fn from_request(req: &EligibilityRequest) -> Result<Self, WitnessError> {
        let b = &req.borrower;
        let l = &req.lender;
        let t = &req.thresholds;
        Ok(Self {
            times_repaid: bounded(&b.times_repaid, RangeCheck::TimesRepaid)?,
            offset: bounded(&b.offset, RangeCheck::Offset)?,
            credit_score: bounded(&b.credit_score, RangeCheck::CreditScore)?,
            times_lent: bounded(&b.times_lent, RangeCheck::TimesLent)?,
            total_returned: bounded(&b.total_returned, RangeCheck::TotalReturned)?,
            request_amount: bounded(&b.request_amount, RangeCheck::RequestAmount)?,
            lender_balance: bounded(&l.balance, RangeCheck::LenderBalance)?,
            lender_times_lent: bounded(&l.times_lent, RangeCheck::LenderTimesLent)?,
            min_credit_score: bounded(&t.min_credit_score, RangeCheck::MinCreditScore)?,
            max_offset: bounded(&t.max_offset, RangeCheck::MaxOffset)?,
        })
    }

    fn check_eligibility(&self) -> Result<(), WitnessError> {
        if self.credit_score < self.min_credit_score {
            return Err(WitnessError::BelowMinimumCreditScore);
        }
        if self.offset + self.request_amount > self.max_offset {
            return Err(WitnessError::OffsetExceedsMaximum);
        }
        if self.lender_balance < self.request_amount {
            return Err(WitnessError::InsufficientLenderBalance);
        }
        Ok(())
    }

    fn score_inputs(&self) -> ScoreInputs {
        ScoreInputs {
            credit_score: self.credit_score,
            times_repaid: self.times_repaid,
            times_lent: self.times_lent,
            total_returned: self.total_returned,
            request_amount: self.request_amount,
            lender_balance: self.lender_balance,
            lender_times_lent: self.lender_times_lent,
        }
    }
}

/// Decode at unit scale and enforce the check's bit width.
fn bounded(value: &Decimal, check: RangeCheck) -> Result<u64, WitnessError> {
    let field = check.label();
    let fe = encode(value, Scale::UNIT).map_err(|source| WitnessError::Encoding { field, source })?;
    let integer: BigUint = fe.into();
    let out_of_range = WitnessError::OutOfRange {
        field,
        bits: check.bits(),
    };
    if integer.bits() > check.bits() as u64 {
        return Err(out_of_range);
    }
    u64::try_from(integer).map_err(|_| out_of_range)
}

pub struct WitnessGenerator;

impl WitnessGenerator {
    pub fn generate(
        request: &EligibilityRequest,
        circuit: &EligibilityCircuit,
    ) -> Result<Witness, WitnessError> {
        let inputs = Inputs::from_request(request)?;
        inputs.check_eligibility()?;
        let breakdown = ScoreBreakdown::compute(&inputs.score_inputs());

        let mut w = vec![Fr::zero(); WITNESS_SIZE];
        w[ONE] = Fr::one();
        w[SCORE] = Fr::from(breakdown.score.clone());
        w[MIN_CREDIT_SCORE] = Fr::from(inputs.min_credit_score);
        w[MAX_OFFSET] = Fr::from(inputs.max_offset);
        w[TIMES_REPAID] = Fr::from(inputs.times_repaid);
        w[OFFSET] = Fr::from(inputs.offset);
        w[CREDIT_SCORE] = Fr::from(inputs.credit_score);
        w[TIMES_LENT] = Fr::from(inputs.times_lent);
        w[TOTAL_RETURNED] = Fr::from(inputs.total_returned);
        w[REQUEST_AMOUNT] = Fr::from(inputs.request_amount);
        w[LENDER_BALANCE] = Fr::from(inputs.lender_balance);
        w[LENDER_TIMES_LENT] = Fr::from(inputs.lender_times_lent);

        (w[TIMES_LENT_INV], w[FIRST_TIME]) = gadgets::assign_is_zero(w[TIMES_LENT]);
        w[REPUTATION] = Fr::from(breakdown.reputation);
        w[NUMERATOR] = Fr::from(breakdown.numerator);
        w[DENOMINATOR] = Fr::from(breakdown.denominator);
        w[REMAINDER] = Fr::from(breakdown.remainder.clone());

        for check in RangeCheck::ALL {
            let value = range_value(check, &inputs, &breakdown);
            if !gadgets::assign_range_bits(&mut w, &value, check) {
                return Err(WitnessError::OutOfRange {
                    field: check.label(),
                    bits: check.bits(),
                });
            }
        }

        let witness = Witness(w);
        if let Some(constraint) = circuit.first_unsatisfied(&witness) {
            return Err(WitnessError::Unsatisfied { constraint });
        }
        tracing::debug!(
            first_time = breakdown.first_time,
            "generated eligibility witness"
        );
        Ok(witness)
    }
}

/// Native value of each range-checked quantity; eligibility checks have
/// already ruled out negative differences.
fn range_value(check: RangeCheck, i: &Inputs, b: &ScoreBreakdown) -> BigUint {
    let n = match check {
        RangeCheck::TimesRepaid => i.times_repaid as u128,
        RangeCheck::Offset => i.offset as u128,
        RangeCheck::CreditScore => i.credit_score as u128,
        RangeCheck::TimesLent => i.times_lent as u128,
        RangeCheck::TotalReturned => i.total_returned as u128,
        RangeCheck::RequestAmount => i.request_amount as u128,
        RangeCheck::LenderBalance => i.lender_balance as u128,
        RangeCheck::LenderTimesLent => i.lender_times_lent as u128,
        RangeCheck::MinCreditScore => i.min_credit_score as u128,
        RangeCheck::MaxOffset => i.max_offset as u128,
        RangeCheck::CreditMargin => (i.credit_score - i.min_credit_score) as u128,
        RangeCheck::OffsetHeadroom => (i.max_offset - i.offset - i.request_amount) as u128,
        RangeCheck::BalanceCoverage => (i.lender_balance - i.request_amount) as u128,
        RangeCheck::Remainder => return b.remainder.clone(),
        RangeCheck::RemainderSlack => {
            return BigUint::from(b.denominator - 1) - &b.remainder;
        }
        RangeCheck::Score => return b.score.clone(),
    };
    BigUint::from(n)
}
