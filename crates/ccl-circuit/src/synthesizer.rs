// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Replays an [`R1cs`] into an `ark-relations` constraint system.
//!
//! Wire `i` of the native system maps to instance variable `i` for
//! `i <= num_public` and to witness variable `i - num_public - 1` otherwise,
//! which is exactly the ordering `ark-groth16` uses for its query vectors.

use ark_bn254::Fr;
use ark_relations::lc;
use ark_relations::r1cs::{
    ConstraintSynthesizer, ConstraintSystemRef, LinearCombination as ArkLc, SynthesisError,
    Variable,
};

use crate::r1cs::{LinearCombination, R1cs};

pub struct EligibilitySynthesizer<'a> {
    r1cs: &'a R1cs,
    assignment: Option<&'a [Fr]>,
}

impl<'a> EligibilitySynthesizer<'a> {
    pub fn new(r1cs: &'a R1cs, assignment: Option<&'a [Fr]>) -> Self {
        Self { r1cs, assignment }
    }
}

fn to_ark(lc: &LinearCombination, vars: &[Variable]) -> ArkLc<Fr> {
    lc.terms()
        .iter()
        .fold(lc!(), |acc, t| acc + (t.coeff, vars[t.wire as usize]))
}

impl ConstraintSynthesizer<Fr> for EligibilitySynthesizer<'_> {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        if let Some(w) = self.assignment {
            if w.len() != self.r1cs.num_wires() {
                return Err(SynthesisError::Unsatisfiable);
            }
        }

        let mut vars = Vec::with_capacity(self.r1cs.num_wires());
        vars.push(Variable::One);
        for wire in 1..self.r1cs.num_wires() {
            let assignment = self.assignment;
            let value = move || {
                assignment
                    .map(|w| w[wire])
                    .ok_or(SynthesisError::AssignmentMissing)
            };
            let var = if wire <= self.r1cs.num_public() {
                cs.new_input_variable(value)?
            } else {
                cs.new_witness_variable(value)?
            };
            vars.push(var);
        }

        for c in self.r1cs.constraints() {
            cs.enforce_constraint(to_ark(&c.a, &vars), to_ark(&c.b, &vars), to_ark(&c.c, &vars))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_relations::r1cs::{ConstraintSystem, SynthesisMode};

    use crate::eligibility::EligibilityCircuit;

    #[test]
    fn test_replay_shape() {
        let circuit = EligibilityCircuit::compile();
        let cs = ConstraintSystem::<Fr>::new_ref();
        cs.set_mode(SynthesisMode::Setup);
        circuit
            .synthesizer(None)
            .generate_constraints(cs.clone())
            .unwrap();
        assert_eq!(cs.num_constraints(), circuit.constraint_count());
        assert_eq!(cs.num_instance_variables(), circuit.public_signal_count() + 1);
        assert_eq!(
            cs.num_witness_variables(),
            circuit.witness_size() - circuit.public_signal_count() - 1
        );
    }
}
