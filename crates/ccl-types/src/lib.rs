// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Shared types for carbon-credit lending eligibility proofs.
//!
//! | Module      | Purpose                                                   |
//! |-------------|-----------------------------------------------------------|
//! | [`field`]   | BN254 scalar/base field helpers, strict big-endian hex    |
//! | [`codec`]   | Exact decimal <-> field element conversion (10^k scaling) |
//! | [`request`] | Borrower, lender and threshold inputs to a proof          |

pub mod codec;
pub mod field;
pub mod request;

pub use codec::{decode, encode, CodecError, Decimal, Scale, SCORE_SCALE_EXP};
pub use field::{fr_to_hex, hex_to_fr, FieldElement, FieldError};
pub use request::{BorrowerStats, EligibilityRequest, LenderStats, Thresholds};
