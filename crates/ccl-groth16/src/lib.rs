// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Groth16 over BN254 for the eligibility circuit.
//!
//! Keys and proofs follow the libsnark/`ark-groth16` construction, so proofs
//! verify under `ark_groth16::Groth16::verify` and under an EVM pairing
//! precompile verifier fed with [`SolidityCalldata`].
//!
//! | Module       | Purpose                                                 |
//! |--------------|---------------------------------------------------------|
//! | [`setup`]    | Development ceremony (single-party, toxic waste in RAM) |
//! | [`qap`]      | R1CS to QAP reduction and quotient polynomial           |
//! | [`prover`]   | Randomized proof generation with abort checkpoints      |
//! | [`verifier`] | Pairing check with point validation                     |
//! | [`proof`]    | Proof type, 256-byte EVM encoding, calldata             |
//! | [`interop`]  | Conversions to and from `ark-groth16` types             |

pub mod error;
pub mod interop;
pub mod keys;
pub mod proof;
pub mod prover;
pub mod qap;
pub mod setup;
pub mod verifier;

pub use error::{ProvingError, VerifierError};
pub use keys::{PreparedVerificationKey, ProvingKey, VerificationKey};
pub use proof::{Proof, SolidityCalldata, PROOF_BYTES};
pub use prover::{prove, prove_with_abort};
pub use setup::setup;
pub use verifier::{verify, verify_calldata};
