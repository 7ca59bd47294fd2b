// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Circuit-specific key generation.
//!
//! This is a single-party ceremony: whoever runs it learns the toxic
//! parameters and can forge proofs. It is meant for development and tests;
//! production keys must come from a multi-party ceremony and be loaded as
//! artifacts.

use ark_bn254::{Fr, G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{Field, UniformRand, Zero};
use ark_poly::EvaluationDomain;
use ark_std::rand::{CryptoRng, RngCore};
use ccl_circuit::EligibilityCircuit;

use crate::error::ProvingError;
use crate::keys::{ProvingKey, VerificationKey};
use crate::qap;

fn nonzero<R: RngCore>(rng: &mut R) -> Fr {
    loop {
        let x = Fr::rand(rng);
        if !x.is_zero() {
            return x;
        }
    }
}

fn g1_batch(scalars: &[Fr]) -> Vec<G1Affine> {
    let g = G1Affine::generator();
    let points: Vec<G1Projective> = scalars.iter().map(|s| g * s).collect();
    G1Projective::normalize_batch(&points)
}

fn g2_batch(scalars: &[Fr]) -> Vec<G2Affine> {
    let g = G2Affine::generator();
    let points: Vec<G2Projective> = scalars.iter().map(|s| g * s).collect();
    G2Projective::normalize_batch(&points)
}

/// Generate a proving/verification key pair for `circuit`.
pub fn setup<R: RngCore + CryptoRng>(
    circuit: &EligibilityCircuit,
    rng: &mut R,
) -> Result<(ProvingKey, VerificationKey), ProvingError> {
    let r1cs = circuit.r1cs();
    let domain = qap::domain_for(r1cs)?;

    // tau must avoid the domain so Z(tau) is invertible
    let tau = loop {
        let t = Fr::rand(rng);
        if !domain.evaluate_vanishing_polynomial(t).is_zero() {
            break t;
        }
    };
    let alpha = nonzero(rng);
    let beta = nonzero(rng);
    let gamma = nonzero(rng);
    let delta = nonzero(rng);
    let gamma_inv = gamma.inverse().ok_or(ProvingError::DegenerateSetup)?;
    let delta_inv = delta.inverse().ok_or(ProvingError::DegenerateSetup)?;

    let eval = qap::evaluate_at(r1cs, &domain, tau);
    let num_instance = r1cs.num_instance();

    // beta * u_i(tau) + alpha * v_i(tau) + w_i(tau)
    let combined: Vec<Fr> = (0..r1cs.num_wires())
        .map(|i| beta * eval.a[i] + alpha * eval.b[i] + eval.c[i])
        .collect();
    let ic_scalars: Vec<Fr> = combined[..num_instance]
        .iter()
        .map(|x| *x * gamma_inv)
        .collect();
    let l_scalars: Vec<Fr> = combined[num_instance..]
        .iter()
        .map(|x| *x * delta_inv)
        .collect();

    let zt_delta = eval.zt * delta_inv;
    let mut h_scalars = Vec::with_capacity(domain.size() - 1);
    let mut power = zt_delta;
    for _ in 0..domain.size() - 1 {
        h_scalars.push(power);
        power *= tau;
    }

    let g1 = G1Affine::generator();
    let g2 = G2Affine::generator();
    let vk = VerificationKey {
        alpha_g1: (g1 * alpha).into_affine(),
        beta_g2: (g2 * beta).into_affine(),
        gamma_g2: (g2 * gamma).into_affine(),
        delta_g2: (g2 * delta).into_affine(),
        ic: g1_batch(&ic_scalars),
    };
    let pk = ProvingKey {
        vk: vk.clone(),
        beta_g1: (g1 * beta).into_affine(),
        delta_g1: (g1 * delta).into_affine(),
        a_query: g1_batch(&eval.a),
        b_g1_query: g1_batch(&eval.b),
        b_g2_query: g2_batch(&eval.b),
        h_query: g1_batch(&h_scalars),
        l_query: g1_batch(&l_scalars),
    };

    tracing::info!(
        constraints = r1cs.num_constraints(),
        domain = domain.size(),
        "generated development keys"
    );
    Ok((pk, vk))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_std::rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_key_shapes() {
        let circuit = EligibilityCircuit::compile();
        let (pk, vk) = setup(&circuit, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(vk.ic.len(), circuit.public_signal_count() + 1);
        assert_eq!(pk.a_query.len(), circuit.witness_size());
        assert_eq!(pk.b_g2_query.len(), circuit.witness_size());
        assert_eq!(
            pk.l_query.len(),
            circuit.witness_size() - circuit.public_signal_count() - 1
        );
        assert_eq!(pk.h_query.len(), 1023);
        assert_eq!(pk.vk, vk);
    }

    #[test]
    fn test_seeded_setup_is_reproducible() {
        let circuit = EligibilityCircuit::compile();
        let (_, a) = setup(&circuit, &mut StdRng::seed_from_u64(9)).unwrap();
        let (_, b) = setup(&circuit, &mut StdRng::seed_from_u64(9)).unwrap();
        let (_, c) = setup(&circuit, &mut StdRng::seed_from_u64(10)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
