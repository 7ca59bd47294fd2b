// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use ark_bn254::Fr;
use ark_ff::{AdditiveGroup, BigInteger, Field, One, PrimeField, Zero};
use num_bigint::BigUint;

use crate::layout::{RangeCheck, ONE};
use crate::r1cs::{LinearCombination, R1cs};

/// `b * (1 - b) = 0`
pub(crate) fn enforce_boolean(cs: &mut R1cs, wire: usize) {
    cs.enforce(
        wire,
        LinearCombination::wire(ONE) - LinearCombination::wire(wire),
        LinearCombination::zero(),
    );
}

/// Decompose `value` into the bit wires of `check` and constrain
/// `value = sum(b_i * 2^i)`.
pub(crate) fn enforce_range_bits(cs: &mut R1cs, value: LinearCombination, check: RangeCheck) {
    let mut packed = LinearCombination::zero();
    let mut coeff = Fr::one();
    for wire in check.wires() {
        enforce_boolean(cs, wire);
        packed = packed.with(coeff, wire);
        coeff.double_in_place();
    }
    cs.enforce(packed, ONE, value);
}

/// `flag = [x == 0]`, with `inv` the prover-supplied inverse of `x`.
///
/// `x * inv = 1 - flag` forces `flag = 0` for nonzero `x`, and `x * flag = 0`
/// forces `flag = 0` or `x = 0`; together `flag = 1` iff `x = 0`.
pub(crate) fn enforce_is_zero(cs: &mut R1cs, x: usize, inv: usize, flag: usize) {
    cs.enforce(x, inv, LinearCombination::wire(ONE) - LinearCombination::wire(flag));
    cs.enforce(x, flag, LinearCombination::zero());
}

/// Native side of [`enforce_range_bits`]. Returns `false`, leaving the bit
/// wires untouched, when `value` needs more bits than `check` allows.
pub(crate) fn assign_range_bits(assignment: &mut [Fr], value: &BigUint, check: RangeCheck) -> bool {
    if value.bits() > check.bits() as u64 {
        return false;
    }
    let repr = Fr::from(value.clone()).into_bigint();
    for (i, wire) in check.wires().enumerate() {
        assignment[wire] = if repr.get_bit(i) { Fr::one() } else { Fr::zero() };
    }
    true
}

/// Native side of [`enforce_is_zero`]: `(inv, flag)`.
pub(crate) fn assign_is_zero(x: Fr) -> (Fr, Fr) {
    match x.inverse() {
        Some(inv) => (inv, Fr::zero()),
        None => (Fr::zero(), Fr::one()),
    }
}
