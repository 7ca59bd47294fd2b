// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Proof type and its EVM encodings.
//!
//! The 256-byte form is `A.x | A.y | B.x.c1 | B.x.c0 | B.y.c1 | B.y.c0 | C.x | C.y`,
//! each a 32-byte big-endian base field element, matching the argument order
//! of the BN254 pairing precompile. The point at infinity is all zeros.

use ark_bn254::{Fq, Fq2, Fr, G1Affine, G2Affine};
use ark_ec::AffineRepr;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ccl_types::field::{fq_from_be_bytes, fq_to_be_bytes, fq_to_hex, fr_to_hex, hex_to_fq, hex_to_fr, FieldError};
use serde::{Deserialize, Serialize};

use crate::error::VerifierError;

pub const PROOF_BYTES: usize = 256;

#[derive(Clone, Copy, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Proof {
    pub a: G1Affine,
    pub b: G2Affine,
    pub c: G1Affine,
}

pub(crate) fn check_g1(p: &G1Affine, name: &'static str) -> Result<(), VerifierError> {
    if p.infinity {
        return Ok(());
    }
    if !p.is_on_curve() {
        return Err(VerifierError::NotOnCurve(name));
    }
    if !p.is_in_correct_subgroup_assuming_on_curve() {
        return Err(VerifierError::NotInSubgroup(name));
    }
    Ok(())
}

pub(crate) fn check_g2(p: &G2Affine, name: &'static str) -> Result<(), VerifierError> {
    if p.infinity {
        return Ok(());
    }
    if !p.is_on_curve() {
        return Err(VerifierError::NotOnCurve(name));
    }
    if !p.is_in_correct_subgroup_assuming_on_curve() {
        return Err(VerifierError::NotInSubgroup(name));
    }
    Ok(())
}

fn g1_coords(p: &G1Affine) -> [Fq; 2] {
    if p.infinity {
        [Fq::from(0u64); 2]
    } else {
        [p.x, p.y]
    }
}

/// `[[x.c1, x.c0], [y.c1, y.c0]]`
fn g2_coords(p: &G2Affine) -> [[Fq; 2]; 2] {
    if p.infinity {
        [[Fq::from(0u64); 2]; 2]
    } else {
        [[p.x.c1, p.x.c0], [p.y.c1, p.y.c0]]
    }
}

fn g1_from_coords(x: Fq, y: Fq, name: &'static str) -> Result<G1Affine, VerifierError> {
    if x == Fq::from(0u64) && y == Fq::from(0u64) {
        return Ok(G1Affine::zero());
    }
    let p = G1Affine::new_unchecked(x, y);
    check_g1(&p, name)?;
    Ok(p)
}

fn g2_from_coords(coords: [[Fq; 2]; 2], name: &'static str) -> Result<G2Affine, VerifierError> {
    let [[x1, x0], [y1, y0]] = coords;
    let x = Fq2::new(x0, x1);
    let y = Fq2::new(y0, y1);
    if x == Fq2::from(0u64) && y == Fq2::from(0u64) {
        return Ok(G2Affine::zero());
    }
    let p = G2Affine::new_unchecked(x, y);
    check_g2(&p, name)?;
    Ok(p)
}

impl Proof {
    /// Curve and subgroup membership of all three points.
    pub fn validate(&self) -> Result<(), VerifierError> {
        check_g1(&self.a, "A")?;
        check_g2(&self.b, "B")?;
        check_g1(&self.c, "C")
    }

    pub fn to_bytes(&self) -> [u8; PROOF_BYTES] {
        let [ax, ay] = g1_coords(&self.a);
        let [[bx1, bx0], [by1, by0]] = g2_coords(&self.b);
        let [cx, cy] = g1_coords(&self.c);

        let mut out = [0u8; PROOF_BYTES];
        for (chunk, fq) in out
            .chunks_exact_mut(32)
            .zip([ax, ay, bx1, bx0, by1, by0, cx, cy])
        {
            chunk.copy_from_slice(&fq_to_be_bytes(&fq));
        }
        out
    }

    /// Strict decoding: coordinates must be canonical and points must lie in
    /// the prime-order subgroups.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, VerifierError> {
        if bytes.len() != PROOF_BYTES {
            return Err(VerifierError::Length {
                expected: PROOF_BYTES,
                actual: bytes.len(),
            });
        }
        let mut coords = [Fq::from(0u64); 8];
        for (i, chunk) in bytes.chunks_exact(32).enumerate() {
            let mut buf = [0u8; 32];
            buf.copy_from_slice(chunk);
            coords[i] = fq_from_be_bytes(&buf).ok_or(VerifierError::NonCanonical(COORD_NAMES[i]))?;
        }
        let [ax, ay, bx1, bx0, by1, by0, cx, cy] = coords;
        Ok(Self {
            a: g1_from_coords(ax, ay, "A")?,
            b: g2_from_coords([[bx1, bx0], [by1, by0]], "B")?,
            c: g1_from_coords(cx, cy, "C")?,
        })
    }

    pub fn to_calldata(&self, public_signals: &[Fr]) -> SolidityCalldata {
        let hex2 = |[x, y]: [Fq; 2]| [fq_to_hex(&x), fq_to_hex(&y)];
        let [bx, by] = g2_coords(&self.b);
        SolidityCalldata {
            a: hex2(g1_coords(&self.a)),
            b: [hex2(bx), hex2(by)],
            c: hex2(g1_coords(&self.c)),
            public_signals: public_signals.iter().map(fr_to_hex).collect(),
        }
    }
}

const COORD_NAMES: [&str; 8] = ["A.x", "A.y", "B.x.c1", "B.x.c0", "B.y.c1", "B.y.c0", "C.x", "C.y"];

/// Arguments of a `verifyProof(a, b, c, input)` call, as `0x`-prefixed
/// 32-byte hex words.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolidityCalldata {
    pub a: [String; 2],
    pub b: [[String; 2]; 2],
    pub c: [String; 2],
    pub public_signals: Vec<String>,
}

fn field_err(name: &'static str) -> impl Fn(FieldError) -> VerifierError {
    move |e| match e {
        FieldError::NonCanonical => VerifierError::NonCanonical(name),
        FieldError::InvalidHex(_) | FieldError::TooLong(_) => VerifierError::Hex(name),
    }
}

impl SolidityCalldata {
    pub fn decode(&self) -> Result<(Proof, Vec<Fr>), VerifierError> {
        let fq = |s: &str, name| hex_to_fq(s).map_err(field_err(name));
        let a = g1_from_coords(fq(&self.a[0], "A.x")?, fq(&self.a[1], "A.y")?, "A")?;
        let b = g2_from_coords(
            [
                [fq(&self.b[0][0], "B.x.c1")?, fq(&self.b[0][1], "B.x.c0")?],
                [fq(&self.b[1][0], "B.y.c1")?, fq(&self.b[1][1], "B.y.c0")?],
            ],
            "B",
        )?;
        let c = g1_from_coords(fq(&self.c[0], "C.x")?, fq(&self.c[1], "C.y")?, "C")?;
        let signals = self
            .public_signals
            .iter()
            .map(|s| hex_to_fr(s).map_err(field_err("public signal")))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((Proof { a, b, c }, signals))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ec::CurveGroup;
    use ark_ff::UniformRand;
    use ark_std::rand::{rngs::StdRng, SeedableRng};

    fn random_proof() -> Proof {
        let mut rng = StdRng::seed_from_u64(42);
        Proof {
            a: (G1Affine::generator() * Fr::rand(&mut rng)).into_affine(),
            b: (G2Affine::generator() * Fr::rand(&mut rng)).into_affine(),
            c: (G1Affine::generator() * Fr::rand(&mut rng)).into_affine(),
        }
    }

    #[test]
    fn test_bytes_roundtrip() {
        let proof = random_proof();
        let bytes = proof.to_bytes();
        assert_eq!(Proof::from_bytes(&bytes).unwrap(), proof);
    }

    #[test]
    fn test_identity_encodes_as_zeros() {
        let proof = Proof {
            c: G1Affine::zero(),
            ..random_proof()
        };
        let bytes = proof.to_bytes();
        assert!(bytes[192..].iter().all(|b| *b == 0));
        assert_eq!(Proof::from_bytes(&bytes).unwrap(), proof);
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(
            Proof::from_bytes(&[0u8; 255]),
            Err(VerifierError::Length {
                expected: 256,
                actual: 255
            })
        );
    }

    #[test]
    fn test_rejects_off_curve_point() {
        let mut bytes = random_proof().to_bytes();
        bytes[63] ^= 1;
        assert_eq!(Proof::from_bytes(&bytes), Err(VerifierError::NotOnCurve("A")));
    }

    #[test]
    fn test_rejects_non_canonical_coordinate() {
        let mut bytes = random_proof().to_bytes();
        bytes[192..224].copy_from_slice(&[0xff; 32]);
        assert_eq!(Proof::from_bytes(&bytes), Err(VerifierError::NonCanonical("C.x")));
    }

    /// A point on the twist curve outside the prime-order subgroup.
    fn twist_point_outside_subgroup() -> G2Affine {
        (1u64..)
            .filter_map(|i| G2Affine::get_point_from_x_unchecked(Fq2::new(Fq::from(i), Fq::from(0u64)), false))
            .find(|p| p.is_on_curve() && !p.is_in_correct_subgroup_assuming_on_curve())
            .unwrap()
    }

    #[test]
    fn test_rejects_b_outside_subgroup() {
        let proof = Proof {
            b: twist_point_outside_subgroup(),
            ..random_proof()
        };
        assert_eq!(
            Proof::from_bytes(&proof.to_bytes()),
            Err(VerifierError::NotInSubgroup("B"))
        );
        assert_eq!(proof.validate(), Err(VerifierError::NotInSubgroup("B")));

        let calldata = proof.to_calldata(&[Fr::from(1u64)]);
        assert_eq!(calldata.decode(), Err(VerifierError::NotInSubgroup("B")));
    }

    #[test]
    fn test_calldata_roundtrip_through_json() {
        let proof = random_proof();
        let signals = vec![Fr::from(5u64), Fr::from(70u64), Fr::from(1000u64)];
        let calldata = proof.to_calldata(&signals);
        assert_eq!(calldata.public_signals[1], format!("0x{:064x}", 70));

        let json = serde_json::to_string(&calldata).unwrap();
        let back: SolidityCalldata = serde_json::from_str(&json).unwrap();
        assert_eq!(back.decode().unwrap(), (proof, signals));
    }

    #[test]
    fn test_calldata_matches_bytes() {
        let proof = random_proof();
        let calldata = proof.to_calldata(&[]);
        let bytes = proof.to_bytes();
        assert_eq!(calldata.b[0][0], format!("0x{}", hex_encode(&bytes[64..96])));
        assert_eq!(calldata.c[1], format!("0x{}", hex_encode(&bytes[224..256])));
    }

    fn hex_encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}
