// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Groth16 verifier over BN254.
//!
//! Algorithm:
//! 1. `L = IC[0] + MSM(IC[1..], public_signals)`
//! 2. `e(A, B) * e(-alpha, beta) * e(-L, gamma) * e(-C, delta) == 1`

use ark_bn254::{Bn254, Fr, G1Projective};
use ark_ec::pairing::Pairing;
use ark_ec::{AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::One;

use crate::error::VerifierError;
use crate::keys::PreparedVerificationKey;
use crate::proof::{Proof, SolidityCalldata};

type G2Prepared = <Bn254 as Pairing>::G2Prepared;

/// `Ok(true)` iff the proof is valid for these public signals. Structural
/// problems (signal count, points off the curve or outside the subgroup) are
/// errors; a well-formed proof that fails the pairing check is `Ok(false)`.
pub fn verify(
    proof: &Proof,
    public_signals: &[Fr],
    pvk: &PreparedVerificationKey,
) -> Result<bool, VerifierError> {
    let vk = pvk.vk();
    let (ic0, ic_rest) = vk.ic.split_first().ok_or(VerifierError::EmptyKey)?;
    if public_signals.len() != ic_rest.len() {
        return Err(VerifierError::PublicSignalCount {
            expected: ic_rest.len(),
            actual: public_signals.len(),
        });
    }
    proof.validate()?;

    let msm = G1Projective::msm(ic_rest, public_signals).map_err(|_| {
        VerifierError::PublicSignalCount {
            expected: ic_rest.len(),
            actual: public_signals.len(),
        }
    })?;
    let l = ic0.into_group() + msm;

    let g1 = [
        proof.a,
        pvk.neg_alpha_g1,
        (-l).into_affine(),
        -proof.c,
    ];
    let g2: [G2Prepared; 4] = [
        G2Prepared::from(proof.b),
        pvk.beta_g2.clone(),
        pvk.gamma_g2.clone(),
        pvk.delta_g2.clone(),
    ];
    let result = Bn254::multi_pairing(g1, g2);
    let accepted = result.0.is_one();
    tracing::debug!(accepted, "groth16 pairing check");
    Ok(accepted)
}

/// Decode EVM calldata strictly, then [`verify`].
pub fn verify_calldata(
    calldata: &SolidityCalldata,
    pvk: &PreparedVerificationKey,
) -> Result<bool, VerifierError> {
    let (proof, signals) = calldata.decode()?;
    verify(&proof, &signals, pvk)
}
