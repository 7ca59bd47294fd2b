// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Eligibility circuit for carbon-credit borrowing.
//!
//! The circuit proves that a borrower's private statistics meet public
//! lending thresholds and exposes a public eligibility score, scaled by
//! `10^40`, that is bound to those statistics.
//!
//! | Module          | Purpose                                              |
//! |-----------------|------------------------------------------------------|
//! | [`r1cs`]        | Linear combinations, constraints, constraint system  |
//! | [`layout`]      | Fixed wire positions and range-check table           |
//! | [`eligibility`] | Constraint compilation and native score reference    |
//! | [`witness`]     | Witness generation from an [`EligibilityRequest`]    |
//! | [`synthesizer`] | Replay into `ark-relations` for cross-checking       |
//!
//! [`EligibilityRequest`]: ccl_types::EligibilityRequest

mod gadgets;

pub mod eligibility;
pub mod layout;
pub mod r1cs;
pub mod synthesizer;
pub mod witness;

pub use eligibility::{EligibilityCircuit, ScoreBreakdown};
pub use layout::{RangeCheck, LAYOUT_VERSION};
pub use r1cs::{Constraint, LinearCombination, R1cs, Term};
pub use synthesizer::EligibilitySynthesizer;
pub use witness::{PublicSignals, Witness, WitnessError, WitnessGenerator};
