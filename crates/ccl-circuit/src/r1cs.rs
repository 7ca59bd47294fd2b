// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Rank-1 constraint system over the BN254 scalar field.
//!
//! Wire 0 is the constant one. Wires `1..=num_public` are public signals;
//! everything after is private. A constraint `(a, b, c)` holds for an
//! assignment `w` when `<a, w> * <b, w> = <c, w>`.

use std::ops::{Add, Mul, Neg, Sub};

use ark_bn254::Fr;
use ark_ff::{One, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use sha2::{Digest, Sha256};

#[derive(Clone, Copy, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Term {
    pub wire: u32,
    pub coeff: Fr,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct LinearCombination {
    terms: Vec<Term>,
}

impl LinearCombination {
    pub fn zero() -> Self {
        Self::default()
    }

    /// `1 * w[wire]`
    pub fn wire(wire: usize) -> Self {
        Self::zero().with(Fr::one(), wire)
    }

    /// `value * w[0]`
    pub fn constant(value: Fr) -> Self {
        Self::zero().with(value, 0)
    }

    pub fn with(mut self, coeff: Fr, wire: usize) -> Self {
        if !coeff.is_zero() {
            self.terms.push(Term {
                wire: wire as u32,
                coeff,
            });
        }
        self
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn evaluate(&self, assignment: &[Fr]) -> Fr {
        self.terms
            .iter()
            .map(|t| t.coeff * assignment[t.wire as usize])
            .sum()
    }

    /// Largest wire index referenced.
    pub fn max_wire(&self) -> Option<usize> {
        self.terms.iter().map(|t| t.wire as usize).max()
    }
}

impl From<usize> for LinearCombination {
    fn from(wire: usize) -> Self {
        Self::wire(wire)
    }
}

impl Add for LinearCombination {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self.terms.extend(rhs.terms);
        self
    }
}

impl Add<usize> for LinearCombination {
    type Output = Self;

    fn add(self, wire: usize) -> Self {
        self.with(Fr::one(), wire)
    }
}

impl Neg for LinearCombination {
    type Output = Self;

    fn neg(mut self) -> Self {
        for t in &mut self.terms {
            t.coeff = -t.coeff;
        }
        self
    }
}

impl Sub for LinearCombination {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Sub<usize> for LinearCombination {
    type Output = Self;

    fn sub(self, wire: usize) -> Self {
        self.with(-Fr::one(), wire)
    }
}

impl Mul<Fr> for LinearCombination {
    type Output = Self;

    fn mul(mut self, scalar: Fr) -> Self {
        if scalar.is_zero() {
            return Self::zero();
        }
        for t in &mut self.terms {
            t.coeff *= scalar;
        }
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Constraint {
    pub a: LinearCombination,
    pub b: LinearCombination,
    pub c: LinearCombination,
}

impl Constraint {
    pub fn is_satisfied(&self, assignment: &[Fr]) -> bool {
        self.a.evaluate(assignment) * self.b.evaluate(assignment) == self.c.evaluate(assignment)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct R1cs {
    num_public: u32,
    num_wires: u32,
    constraints: Vec<Constraint>,
}

impl R1cs {
    pub fn new(num_public: usize, num_wires: usize) -> Self {
        Self {
            num_public: num_public as u32,
            num_wires: num_wires as u32,
            constraints: Vec::new(),
        }
    }

    pub fn enforce(
        &mut self,
        a: impl Into<LinearCombination>,
        b: impl Into<LinearCombination>,
        c: impl Into<LinearCombination>,
    ) {
        self.constraints.push(Constraint {
            a: a.into(),
            b: b.into(),
            c: c.into(),
        });
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Public signals, excluding the constant wire.
    pub fn num_public(&self) -> usize {
        self.num_public as usize
    }

    /// Public signals plus the constant wire.
    pub fn num_instance(&self) -> usize {
        self.num_public() + 1
    }

    pub fn num_wires(&self) -> usize {
        self.num_wires as usize
    }

    /// Every referenced wire exists and the public prefix fits.
    pub fn is_well_formed(&self) -> bool {
        self.num_instance() <= self.num_wires()
            && self.constraints.iter().all(|c| {
                [&c.a, &c.b, &c.c]
                    .iter()
                    .all(|lc| lc.max_wire().map_or(true, |w| w < self.num_wires()))
            })
    }

    /// Index of the first constraint the assignment violates. A wrongly sized
    /// assignment or one whose constant wire is not 1 reports constraint 0.
    pub fn first_unsatisfied(&self, assignment: &[Fr]) -> Option<usize> {
        if assignment.len() != self.num_wires() || !assignment.first().is_some_and(|w| w.is_one()) {
            return Some(0);
        }
        self.constraints
            .iter()
            .position(|c| !c.is_satisfied(assignment))
    }

    pub fn is_satisfied(&self, assignment: &[Fr]) -> bool {
        self.first_unsatisfied(assignment).is_none()
    }

    /// SHA-256 over the layout version and the canonical compressed encoding.
    pub fn digest(&self, layout_version: u16) -> [u8; 32] {
        let mut bytes = Vec::with_capacity(self.compressed_size());
        // Vec<u8> writer is infallible
        let _ = self.serialize_compressed(&mut bytes);
        let mut hasher = Sha256::new();
        hasher.update(layout_version.to_be_bytes());
        hasher.update(&bytes);
        hasher.finalize().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // x * x = y, with y public
    fn square() -> R1cs {
        let mut cs = R1cs::new(1, 3);
        cs.enforce(2usize, 2usize, 1usize);
        cs
    }

    fn fr(n: u64) -> Fr {
        Fr::from(n)
    }

    #[test]
    fn test_square_satisfied() {
        let cs = square();
        assert!(cs.is_satisfied(&[fr(1), fr(9), fr(3)]));
        assert_eq!(cs.first_unsatisfied(&[fr(1), fr(10), fr(3)]), Some(0));
    }

    #[test]
    fn test_shape_checks() {
        let cs = square();
        assert!(!cs.is_satisfied(&[fr(1), fr(9)]));
        // constant wire must be one
        assert!(!cs.is_satisfied(&[fr(0), fr(0), fr(0)]));
        assert!(cs.is_well_formed());

        let mut bad = R1cs::new(1, 2);
        bad.enforce(2usize, 1usize, 1usize);
        assert!(!bad.is_well_formed());
    }

    #[test]
    fn test_linear_combination_ops() {
        let w = [fr(1), fr(5), fr(7)];
        let lc = LinearCombination::wire(1) + 2usize - LinearCombination::constant(fr(3));
        assert_eq!(lc.evaluate(&w), fr(9));
        assert_eq!((lc.clone() * fr(2)).evaluate(&w), fr(18));
        assert_eq!((-lc).evaluate(&w), -fr(9));
        assert!((LinearCombination::wire(1) * Fr::zero()).is_empty());
    }

    #[test]
    fn test_serialization_roundtrip_and_digest() {
        let cs = square();
        let mut bytes = Vec::new();
        cs.serialize_compressed(&mut bytes).unwrap();
        let back = R1cs::deserialize_compressed(&bytes[..]).unwrap();
        assert_eq!(back, cs);
        assert_eq!(back.digest(1), cs.digest(1));
        assert_ne!(cs.digest(1), cs.digest(2));

        let mut other = square();
        other.enforce(1usize, 0usize, 1usize);
        assert_ne!(other.digest(1), cs.digest(1));
    }
}
