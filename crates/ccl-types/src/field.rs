// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! BN254 field helpers.
//!
//! All external encodings are 32-byte big-endian integers. Decoding is strict:
//! values at or above the field modulus are rejected rather than reduced, so
//! every element has exactly one accepted encoding.

use ark_bn254::{Fq, Fr};
use ark_ff::{BigInt, BigInteger, PrimeField};

/// Scalar field element of BN254, the field every circuit wire lives in.
pub type FieldElement = Fr;

/// Width of a serialized field element.
pub const FIELD_BYTES: usize = 32;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("invalid hex: {0}")]
    InvalidHex(String),
    #[error("field element encoding is {0} bytes, at most 32 allowed")]
    TooLong(usize),
    #[error("value is not below the field modulus")]
    NonCanonical,
}

fn limbs_from_be(bytes: &[u8; FIELD_BYTES]) -> BigInt<4> {
    let mut limbs = [0u64; 4];
    // BE bytes -> LE limbs
    for (i, chunk) in bytes.rchunks(8).enumerate() {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(chunk);
        limbs[i] = u64::from_be_bytes(buf);
    }
    BigInt::new(limbs)
}

fn to_be<F: PrimeField>(value: &F) -> [u8; FIELD_BYTES] {
    let bytes = value.into_bigint().to_bytes_be();
    let mut out = [0u8; FIELD_BYTES];
    out[FIELD_BYTES - bytes.len()..].copy_from_slice(&bytes);
    out
}

pub fn fr_to_be_bytes(fr: &Fr) -> [u8; FIELD_BYTES] {
    to_be(fr)
}

/// Returns `None` when the integer is `>= r`.
pub fn fr_from_be_bytes(bytes: &[u8; FIELD_BYTES]) -> Option<Fr> {
    Fr::from_bigint(limbs_from_be(bytes))
}

pub fn fq_to_be_bytes(fq: &Fq) -> [u8; FIELD_BYTES] {
    to_be(fq)
}

/// Returns `None` when the integer is `>= q`.
pub fn fq_from_be_bytes(bytes: &[u8; FIELD_BYTES]) -> Option<Fq> {
    Fq::from_bigint(limbs_from_be(bytes))
}

fn parse_hex(s: &str) -> Result<[u8; FIELD_BYTES], FieldError> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    let s = if s.len() % 2 == 1 {
        format!("0{s}")
    } else {
        s.to_string()
    };
    let bytes = hex::decode(&s).map_err(|e| FieldError::InvalidHex(e.to_string()))?;
    if bytes.len() > FIELD_BYTES {
        return Err(FieldError::TooLong(bytes.len()));
    }
    // short input is left-padded with zeros
    let mut out = [0u8; FIELD_BYTES];
    out[FIELD_BYTES - bytes.len()..].copy_from_slice(&bytes);
    Ok(out)
}

/// `0x`-prefixed, 64 hex digits.
pub fn fr_to_hex(fr: &Fr) -> String {
    format!("0x{}", hex::encode(fr_to_be_bytes(fr)))
}

pub fn hex_to_fr(s: &str) -> Result<Fr, FieldError> {
    fr_from_be_bytes(&parse_hex(s)?).ok_or(FieldError::NonCanonical)
}

pub fn fq_to_hex(fq: &Fq) -> String {
    format!("0x{}", hex::encode(fq_to_be_bytes(fq)))
}

pub fn hex_to_fq(s: &str) -> Result<Fq, FieldError> {
    fq_from_be_bytes(&parse_hex(s)?).ok_or(FieldError::NonCanonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::UniformRand;
    use ark_std::rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn hex_roundtrip() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..8 {
            let val = Fr::rand(&mut rng);
            assert_eq!(hex_to_fr(&fr_to_hex(&val)).unwrap(), val);
        }
    }

    #[test]
    fn hex_is_fixed_width() {
        assert_eq!(fr_to_hex(&Fr::from(1u64)).len(), 66);
        assert_eq!(
            fr_to_hex(&Fr::from(0x1234u64)),
            "0x0000000000000000000000000000000000000000000000000000000000001234"
        );
    }

    #[test]
    fn hex_short_and_unprefixed_input() {
        assert_eq!(hex_to_fr("01").unwrap(), Fr::from(1u64));
        assert_eq!(hex_to_fr("0x1").unwrap(), Fr::from(1u64));
        assert_eq!(hex_to_fr("0x").unwrap(), Fr::from(0u64));
    }

    #[test]
    fn modulus_is_rejected() {
        let modulus = Fr::MODULUS.to_bytes_be();
        let hex = format!("0x{}", hex::encode(modulus));
        assert_eq!(hex_to_fr(&hex), Err(FieldError::NonCanonical));

        let q = Fq::MODULUS.to_bytes_be();
        assert_eq!(hex_to_fq(&hex::encode(q)), Err(FieldError::NonCanonical));
    }

    #[test]
    fn r_minus_one_is_accepted() {
        let max = -Fr::from(1u64);
        assert_eq!(hex_to_fr(&fr_to_hex(&max)).unwrap(), max);
    }

    #[test]
    fn oversized_and_garbage_input() {
        let long = format!("0x{}", "00".repeat(33));
        assert_eq!(hex_to_fr(&long), Err(FieldError::TooLong(33)));
        assert!(matches!(hex_to_fr("0xzz"), Err(FieldError::InvalidHex(_))));
    }
}
