// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Wire layout of the eligibility circuit.
//!
//! Public signal order is part of the proof format: `[score, min_credit_score,
//! max_offset]`. Any change here must bump [`LAYOUT_VERSION`], which is mixed
//! into the circuit digest carried by every artifact.

use std::ops::Range;

pub const LAYOUT_VERSION: u16 = 1;

pub const ONE: usize = 0;

// public
pub const SCORE: usize = 1;
pub const MIN_CREDIT_SCORE: usize = 2;
pub const MAX_OFFSET: usize = 3;

pub const NUM_PUBLIC: usize = 3;

// private inputs
pub const TIMES_REPAID: usize = 4;
pub const OFFSET: usize = 5;
pub const CREDIT_SCORE: usize = 6;
pub const TIMES_LENT: usize = 7;
pub const TOTAL_RETURNED: usize = 8;
pub const REQUEST_AMOUNT: usize = 9;
pub const LENDER_BALANCE: usize = 10;
pub const LENDER_TIMES_LENT: usize = 11;

// intermediates
pub const TIMES_LENT_INV: usize = 12;
pub const FIRST_TIME: usize = 13;
pub const REPUTATION: usize = 14;
pub const NUMERATOR: usize = 15;
pub const DENOMINATOR: usize = 16;
pub const REMAINDER: usize = 17;

pub const FIRST_BIT: usize = 18;

pub const COUNT_BITS: usize = 16;
pub const CREDIT_BITS: usize = 16;
pub const AMOUNT_BITS: usize = 32;
/// Covers every denominator `(request + 1) * (lender_times_lent + 1)`.
pub const REMAINDER_BITS: usize = 48;
/// Covers `10^40 * numerator` for the largest admissible numerator.
pub const SCORE_BITS: usize = 199;

/// One bit decomposition per entry, laid out consecutively from [`FIRST_BIT`]
/// in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RangeCheck {
    TimesRepaid,
    Offset,
    CreditScore,
    TimesLent,
    TotalReturned,
    RequestAmount,
    LenderBalance,
    LenderTimesLent,
    MinCreditScore,
    MaxOffset,
    /// `credit_score - min_credit_score`
    CreditMargin,
    /// `max_offset - offset - request_amount`
    OffsetHeadroom,
    /// `lender_balance - request_amount`
    BalanceCoverage,
    Remainder,
    /// `denominator - 1 - remainder`
    RemainderSlack,
    Score,
}

impl RangeCheck {
    pub const ALL: [RangeCheck; 16] = [
        RangeCheck::TimesRepaid,
        RangeCheck::Offset,
        RangeCheck::CreditScore,
        RangeCheck::TimesLent,
        RangeCheck::TotalReturned,
        RangeCheck::RequestAmount,
        RangeCheck::LenderBalance,
        RangeCheck::LenderTimesLent,
        RangeCheck::MinCreditScore,
        RangeCheck::MaxOffset,
        RangeCheck::CreditMargin,
        RangeCheck::OffsetHeadroom,
        RangeCheck::BalanceCoverage,
        RangeCheck::Remainder,
        RangeCheck::RemainderSlack,
        RangeCheck::Score,
    ];

    pub const fn bits(self) -> usize {
        match self {
            RangeCheck::TimesRepaid
            | RangeCheck::TimesLent
            | RangeCheck::LenderTimesLent => COUNT_BITS,
            RangeCheck::CreditScore | RangeCheck::MinCreditScore | RangeCheck::CreditMargin => {
                CREDIT_BITS
            }
            RangeCheck::Offset
            | RangeCheck::TotalReturned
            | RangeCheck::RequestAmount
            | RangeCheck::LenderBalance
            | RangeCheck::MaxOffset
            | RangeCheck::OffsetHeadroom
            | RangeCheck::BalanceCoverage => AMOUNT_BITS,
            RangeCheck::Remainder | RangeCheck::RemainderSlack => REMAINDER_BITS,
            RangeCheck::Score => SCORE_BITS,
        }
    }

    /// First bit wire of this check.
    pub const fn offset(self) -> usize {
        let mut offset = FIRST_BIT;
        let mut i = 0;
        while i < Self::ALL.len() {
            if Self::ALL[i] as usize == self as usize {
                break;
            }
            offset += Self::ALL[i].bits();
            i += 1;
        }
        offset
    }

    pub const fn wires(self) -> Range<usize> {
        self.offset()..self.offset() + self.bits()
    }

    /// Name used in error messages.
    pub const fn label(self) -> &'static str {
        match self {
            RangeCheck::TimesRepaid => "timesRepaid",
            RangeCheck::Offset => "offset",
            RangeCheck::CreditScore => "creditScore",
            RangeCheck::TimesLent => "timesLent",
            RangeCheck::TotalReturned => "totalReturned",
            RangeCheck::RequestAmount => "requestAmount",
            RangeCheck::LenderBalance => "lenderBalance",
            RangeCheck::LenderTimesLent => "lenderTimesLent",
            RangeCheck::MinCreditScore => "minCreditScore",
            RangeCheck::MaxOffset => "maxOffset",
            RangeCheck::CreditMargin => "credit margin",
            RangeCheck::OffsetHeadroom => "offset headroom",
            RangeCheck::BalanceCoverage => "balance coverage",
            RangeCheck::Remainder => "remainder",
            RangeCheck::RemainderSlack => "remainder slack",
            RangeCheck::Score => "score",
        }
    }
}

pub const NUM_BITS: usize = {
    let mut total = 0;
    let mut i = 0;
    while i < RangeCheck::ALL.len() {
        total += RangeCheck::ALL[i].bits();
        i += 1;
    }
    total
};

pub const WITNESS_SIZE: usize = FIRST_BIT + NUM_BITS;

/// Score, division and selector constraints emitted before the range checks.
pub const CORE_CONSTRAINTS: usize = 6;

/// One booleanity constraint per bit plus one packing constraint per check.
pub const NUM_CONSTRAINTS: usize = CORE_CONSTRAINTS + NUM_BITS + RangeCheck::ALL.len();
