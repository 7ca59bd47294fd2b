// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! R1CS to QAP reduction.
//!
//! The evaluation domain has one point per constraint plus one per instance
//! wire. The extra rows `a_{m+i} = w_i` pin the public inputs so that their
//! `u_i` polynomials are linearly independent, which keeps a proof from being
//! reinterpreted under different public signals.

use ark_bn254::Fr;
use ark_ff::{FftField, Field, Zero};
use ark_poly::{EvaluationDomain, Radix2EvaluationDomain};
use ccl_circuit::R1cs;

use crate::error::ProvingError;

pub type Domain = Radix2EvaluationDomain<Fr>;

pub fn domain_for(r1cs: &R1cs) -> Result<Domain, ProvingError> {
    let size = r1cs.num_constraints() + r1cs.num_instance();
    Domain::new(size).ok_or(ProvingError::Domain(size))
}

/// `u_i(tau)`, `v_i(tau)`, `w_i(tau)` for every wire `i`.
pub struct QapEvaluation {
    pub a: Vec<Fr>,
    pub b: Vec<Fr>,
    pub c: Vec<Fr>,
    /// `Z(tau) = tau^n - 1`
    pub zt: Fr,
}

pub fn evaluate_at(r1cs: &R1cs, domain: &Domain, tau: Fr) -> QapEvaluation {
    let lagrange = domain.evaluate_all_lagrange_coefficients(tau);
    let num_constraints = r1cs.num_constraints();
    let mut a = vec![Fr::zero(); r1cs.num_wires()];
    let mut b = vec![Fr::zero(); r1cs.num_wires()];
    let mut c = vec![Fr::zero(); r1cs.num_wires()];

    a[..r1cs.num_instance()]
        .copy_from_slice(&lagrange[num_constraints..num_constraints + r1cs.num_instance()]);

    for (row, constraint) in r1cs.constraints().iter().enumerate() {
        let l = lagrange[row];
        for t in constraint.a.terms() {
            a[t.wire as usize] += l * t.coeff;
        }
        for t in constraint.b.terms() {
            b[t.wire as usize] += l * t.coeff;
        }
        for t in constraint.c.terms() {
            c[t.wire as usize] += l * t.coeff;
        }
    }

    QapEvaluation {
        a,
        b,
        c,
        zt: domain.evaluate_vanishing_polynomial(tau),
    }
}

/// Coefficients of `h(X) = (A(X) * B(X) - C(X)) / Z(X)` for a satisfying
/// assignment, computed over the coset `g * H` where `Z` is constant.
pub fn witness_map(r1cs: &R1cs, domain: &Domain, assignment: &[Fr]) -> Result<Vec<Fr>, ProvingError> {
    let size = domain.size();
    let num_constraints = r1cs.num_constraints();
    let num_instance = r1cs.num_instance();

    let mut a = vec![Fr::zero(); size];
    let mut b = vec![Fr::zero(); size];
    let mut c = vec![Fr::zero(); size];
    for (row, constraint) in r1cs.constraints().iter().enumerate() {
        a[row] = constraint.a.evaluate(assignment);
        b[row] = constraint.b.evaluate(assignment);
        c[row] = constraint.c.evaluate(assignment);
    }
    a[num_constraints..num_constraints + num_instance].copy_from_slice(&assignment[..num_instance]);

    let coset = domain
        .get_coset(Fr::GENERATOR)
        .ok_or(ProvingError::Domain(size))?;

    domain.ifft_in_place(&mut a);
    domain.ifft_in_place(&mut b);
    domain.ifft_in_place(&mut c);
    coset.fft_in_place(&mut a);
    coset.fft_in_place(&mut b);
    coset.fft_in_place(&mut c);

    let z_inv = domain
        .evaluate_vanishing_polynomial(Fr::GENERATOR)
        .inverse()
        .ok_or(ProvingError::Domain(size))?;

    let mut h: Vec<Fr> = a
        .iter()
        .zip(&b)
        .zip(&c)
        .map(|((a, b), c)| (*a * b - c) * z_inv)
        .collect();
    coset.ifft_in_place(&mut h);
    Ok(h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::UniformRand;
    use ark_poly::{univariate::DensePolynomial, DenseUVPolynomial, Polynomial};
    use ark_std::rand::{rngs::StdRng, SeedableRng};
    use ccl_circuit::{EligibilityCircuit, WitnessGenerator};
    use ccl_types::{BorrowerStats, EligibilityRequest, LenderStats, Thresholds};

    fn witness() -> (EligibilityCircuit, Vec<Fr>) {
        let circuit = EligibilityCircuit::compile();
        let req = EligibilityRequest::new(
            Thresholds {
                min_credit_score: 70u64.into(),
                max_offset: 10_000u64.into(),
            },
            BorrowerStats {
                times_repaid: 3u64.into(),
                offset: 9_000u64.into(),
                credit_score: 85u64.into(),
                times_lent: 1u64.into(),
                total_returned: 500u64.into(),
                request_amount: 200u64.into(),
            },
            LenderStats {
                balance: 10_000u64.into(),
                times_lent: 7u64.into(),
            },
        );
        let w = WitnessGenerator::generate(&req, &circuit).unwrap();
        (circuit, w.into_inner())
    }

    #[test]
    fn test_domain_size() {
        let circuit = EligibilityCircuit::compile();
        let domain = domain_for(circuit.r1cs()).unwrap();
        assert_eq!(domain.size(), 1024);
    }

    #[test]
    fn test_divisibility_at_random_point() {
        let (circuit, w) = witness();
        let r1cs = circuit.r1cs();
        let domain = domain_for(r1cs).unwrap();
        let h = witness_map(r1cs, &domain, &w).unwrap();
        // deg h <= n - 2
        assert!(h[domain.size() - 1].is_zero());

        let tau = Fr::rand(&mut StdRng::seed_from_u64(7));
        let eval = evaluate_at(r1cs, &domain, tau);
        let dot = |v: &[Fr]| v.iter().zip(&w).map(|(x, y)| *x * y).sum::<Fr>();
        let h_tau = DensePolynomial::from_coefficients_vec(h).evaluate(&tau);
        assert_eq!(dot(&eval.a) * dot(&eval.b) - dot(&eval.c), h_tau * eval.zt);
    }
}
