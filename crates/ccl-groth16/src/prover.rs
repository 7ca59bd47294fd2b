// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::sync::atomic::{AtomicBool, Ordering};

use ark_bn254::{Fr, G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::{AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::UniformRand;
use ark_poly::EvaluationDomain;
use ark_std::rand::{CryptoRng, RngCore};
use ccl_circuit::{EligibilityCircuit, Witness};

use crate::error::ProvingError;
use crate::keys::ProvingKey;
use crate::proof::Proof;
use crate::qap;

fn checkpoint(abort: &AtomicBool) -> Result<(), ProvingError> {
    if abort.load(Ordering::Relaxed) {
        return Err(ProvingError::Aborted);
    }
    Ok(())
}

fn msm_g1(bases: &[G1Affine], scalars: &[Fr], what: &str) -> Result<G1Projective, ProvingError> {
    G1Projective::msm(bases, scalars)
        .map_err(|len| ProvingError::KeyShape(format!("{what} has {len} mismatched entries")))
}

fn msm_g2(bases: &[G2Affine], scalars: &[Fr], what: &str) -> Result<G2Projective, ProvingError> {
    G2Projective::msm(bases, scalars)
        .map_err(|len| ProvingError::KeyShape(format!("{what} has {len} mismatched entries")))
}

fn check_shape(
    circuit: &EligibilityCircuit,
    pk: &ProvingKey,
    witness: &Witness,
    domain_size: usize,
) -> Result<(), ProvingError> {
    let wires = circuit.witness_size();
    let instance = circuit.public_signal_count() + 1;
    if witness.len() != wires {
        return Err(ProvingError::WitnessShape {
            expected: wires,
            actual: witness.len(),
        });
    }
    let mismatch = |what: &str, have: usize, want: usize| {
        (have != want).then(|| ProvingError::KeyShape(format!("{what}: {have} entries, expected {want}")))
    };
    let problems = [
        mismatch("a_query", pk.a_query.len(), wires),
        mismatch("b_g1_query", pk.b_g1_query.len(), wires),
        mismatch("b_g2_query", pk.b_g2_query.len(), wires),
        mismatch("l_query", pk.l_query.len(), wires - instance),
        mismatch("ic", pk.vk.ic.len(), instance),
        mismatch("h_query", pk.h_query.len(), domain_size - 1),
    ];
    match problems.into_iter().flatten().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Produce a zero-knowledge proof that `witness` satisfies `circuit`.
///
/// Fresh blinding factors are drawn from `rng`, so two proofs of the same
/// witness differ.
pub fn prove<R: RngCore + CryptoRng>(
    circuit: &EligibilityCircuit,
    pk: &ProvingKey,
    witness: &Witness,
    rng: &mut R,
) -> Result<Proof, ProvingError> {
    prove_with_abort(circuit, pk, witness, rng, &AtomicBool::new(false))
}

/// [`prove`], polling `abort` between phases and returning
/// [`ProvingError::Aborted`] once it is set.
pub fn prove_with_abort<R: RngCore + CryptoRng>(
    circuit: &EligibilityCircuit,
    pk: &ProvingKey,
    witness: &Witness,
    rng: &mut R,
    abort: &AtomicBool,
) -> Result<Proof, ProvingError> {
    checkpoint(abort)?;
    let r1cs = circuit.r1cs();
    let domain = qap::domain_for(r1cs)?;
    check_shape(circuit, pk, witness, domain.size())?;
    if let Some(constraint) = circuit.first_unsatisfied(witness) {
        return Err(ProvingError::Unsatisfied(constraint));
    }

    let w = witness.values();
    let h = qap::witness_map(r1cs, &domain, w)?;
    checkpoint(abort)?;

    let r = Fr::rand(rng);
    let s = Fr::rand(rng);

    let a_acc = msm_g1(&pk.a_query, w, "a_query")?;
    let b_g1_acc = msm_g1(&pk.b_g1_query, w, "b_g1_query")?;
    checkpoint(abort)?;
    let b_g2_acc = msm_g2(&pk.b_g2_query, w, "b_g2_query")?;
    checkpoint(abort)?;
    let h_acc = msm_g1(&pk.h_query, &h[..pk.h_query.len()], "h_query")?;
    let l_acc = msm_g1(&pk.l_query, &w[r1cs.num_instance()..], "l_query")?;
    checkpoint(abort)?;

    let a = pk.vk.alpha_g1.into_group() + a_acc + pk.delta_g1 * r;
    let b = pk.vk.beta_g2.into_group() + b_g2_acc + pk.vk.delta_g2 * s;
    let b_g1 = pk.beta_g1.into_group() + b_g1_acc + pk.delta_g1 * s;
    let c = h_acc + l_acc + a * s + b_g1 * r - pk.delta_g1 * (r * s);

    tracing::debug!(constraints = r1cs.num_constraints(), "proof generated");
    Ok(Proof {
        a: a.into_affine(),
        b: b.into_affine(),
        c: c.into_affine(),
    })
}
