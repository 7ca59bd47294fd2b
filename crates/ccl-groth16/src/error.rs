// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProvingError {
    #[error("witness has {actual} wires, circuit expects {expected}")]
    WitnessShape { expected: usize, actual: usize },
    #[error("proving key does not match the circuit: {0}")]
    KeyShape(String),
    #[error("witness violates constraint {0}")]
    Unsatisfied(usize),
    #[error("no evaluation domain of size {0}")]
    Domain(usize),
    #[error("setup drew a degenerate toxic parameter")]
    DegenerateSetup,
    #[error("proving aborted")]
    Aborted,
}

/// Structural rejections. A well-formed proof that simply fails the pairing
/// check is `Ok(false)`, not an error.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum VerifierError {
    #[error("expected {expected} public signals, got {actual}")]
    PublicSignalCount { expected: usize, actual: usize },
    #[error("verification key has no input commitments")]
    EmptyKey,
    #[error("proof encoding is {actual} bytes, expected {expected}")]
    Length { expected: usize, actual: usize },
    #[error("{0} is not a valid hex field element")]
    Hex(&'static str),
    #[error("{0} is not below the field modulus")]
    NonCanonical(&'static str),
    #[error("{0} is not on the curve")]
    NotOnCurve(&'static str),
    #[error("{0} is not in the prime-order subgroup")]
    NotInSubgroup(&'static str),
}
