// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! End-to-end checks of the eligibility circuit against `ark-relations` and
//! `ark-groth16`.

use ark_bn254::{Bn254, Fr};
use ark_groth16::Groth16;
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystem};
use ark_snark::SNARK;
use ark_std::rand::{rngs::StdRng, SeedableRng};
use ccl_circuit::{EligibilityCircuit, WitnessGenerator};
use ccl_types::{
    decode, BorrowerStats, Decimal, EligibilityRequest, LenderStats, Scale, Thresholds,
};
use num_bigint::BigUint;

fn test_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn scenario() -> EligibilityRequest {
    EligibilityRequest::new(
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
    )
}

#[test]
fn test_scenario_score() {
    let circuit = EligibilityCircuit::compile();
    let witness = WitnessGenerator::generate(&scenario(), &circuit).unwrap();
    let signals = witness.public_signals();

    // reputation = 85 * (3 + 1) + 500, numerator = 840 * 10001, denominator = 201 * 8
    let scale = BigUint::from(10u32).pow(40);
    let expected = scale * BigUint::from(8_400_840u64) / BigUint::from(1_608u64);
    assert_eq!(signals.as_slice()[0], Fr::from(expected.clone()));

    let score = signals.score().unwrap();
    assert_eq!(score, Decimal::new(expected, 40));
    assert!(score.to_string().starts_with("5224.402985074626865671"));
    assert_eq!(decode(&signals.as_slice()[1], Scale::UNIT), Decimal::from(70u64));
    assert_eq!(decode(&signals.as_slice()[2], Scale::UNIT), Decimal::from(10_000u64));
}

#[test]
fn test_first_time_borrower() {
    let circuit = EligibilityCircuit::compile();
    let mut req = scenario();
    req.borrower.times_lent = 0u64.into();
    req.borrower.times_repaid = 0u64.into();
    req.borrower.total_returned = 0u64.into();

    let witness = WitnessGenerator::generate(&req, &circuit).unwrap();
    assert!(circuit.is_satisfied(&witness));

    // reputation = 85 * 2
    let scale = BigUint::from(10u32).pow(40);
    let expected = scale * BigUint::from(170u64 * 10_001) / BigUint::from(1_608u64);
    assert_eq!(witness.public_signals().as_slice()[0], Fr::from(expected));
}

#[test]
fn test_replay_is_satisfied_in_ark_relations() {
    let circuit = EligibilityCircuit::compile();
    let witness = WitnessGenerator::generate(&scenario(), &circuit).unwrap();

    let cs = ConstraintSystem::<Fr>::new_ref();
    circuit
        .synthesizer(Some(&witness))
        .generate_constraints(cs.clone())
        .unwrap();
    assert!(cs.is_satisfied().unwrap());
    assert_eq!(cs.num_constraints(), circuit.constraint_count());
}

#[test]
fn test_tampered_replay_is_unsatisfied() {
    let circuit = EligibilityCircuit::compile();
    let witness = WitnessGenerator::generate(&scenario(), &circuit).unwrap();
    let mut values = witness.into_inner();
    values[1] += Fr::from(1u64);
    let tampered = ccl_circuit::Witness::from_values(values);

    let cs = ConstraintSystem::<Fr>::new_ref();
    circuit
        .synthesizer(Some(&tampered))
        .generate_constraints(cs.clone())
        .unwrap();
    assert!(!cs.is_satisfied().unwrap());
}

#[test]
fn test_ark_groth16_accepts_circuit() {
    let mut rng = test_rng();
    let circuit = EligibilityCircuit::compile();
    let (pk, vk) = Groth16::<Bn254>::circuit_specific_setup(circuit.synthesizer(None), &mut rng)
        .unwrap();

    let witness = WitnessGenerator::generate(&scenario(), &circuit).unwrap();
    let proof = Groth16::<Bn254>::prove(&pk, circuit.synthesizer(Some(&witness)), &mut rng).unwrap();
    let signals = witness.public_signals();
    assert!(Groth16::<Bn254>::verify(&vk, signals.as_slice(), &proof).unwrap());

    let mut wrong = signals.into_inner();
    wrong[0] += Fr::from(1u64);
    assert!(!Groth16::<Bn254>::verify(&vk, &wrong, &proof).unwrap());
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn eligible_requests_always_satisfy(
            min_credit in 0u64..1_000,
            margin in 0u64..1_000,
            offset in 0u64..1_000_000,
            request in 0u64..1_000_000,
            headroom in 0u64..1_000_000,
            surplus in 0u64..1_000_000,
            times_repaid in 0u64..65_536,
            times_lent in 0u64..65_536,
            total_returned in 0u64..(1u64 << 32),
            lender_times_lent in 0u64..65_536,
        ) {
            let circuit = EligibilityCircuit::compile();
            let req = EligibilityRequest::new(
                Thresholds {
                    min_credit_score: min_credit.into(),
                    max_offset: (offset + request + headroom).into(),
                },
                BorrowerStats {
                    times_repaid: times_repaid.into(),
                    offset: offset.into(),
                    credit_score: (min_credit + margin).into(),
                    times_lent: times_lent.into(),
                    total_returned: total_returned.into(),
                    request_amount: request.into(),
                },
                LenderStats {
                    balance: (request + surplus).into(),
                    times_lent: lender_times_lent.into(),
                },
            );
            let witness = WitnessGenerator::generate(&req, &circuit).unwrap();
            prop_assert!(circuit.is_satisfied(&witness));

            let credit = (min_credit + margin) as u128;
            let weight = times_repaid as u128 + 1 + u128::from(times_lent == 0);
            let numerator = (credit * weight + total_returned as u128) * ((request + surplus) as u128 + 1);
            let denominator = (request as u128 + 1) * (lender_times_lent as u128 + 1);
            let expected = BigUint::from(10u32).pow(40) * BigUint::from(numerator) / BigUint::from(denominator);
            prop_assert_eq!(witness.public_signals().as_slice()[0], Fr::from(expected));
        }
    }
}
