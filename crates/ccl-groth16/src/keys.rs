// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use ark_bn254::{Bn254, G1Affine, G2Affine};
use ark_ec::pairing::Pairing;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

type G2Prepared = <Bn254 as Pairing>::G2Prepared;

/// `ic[0]` commits to the constant wire, `ic[i]` to public signal `i`.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct VerificationKey {
    pub alpha_g1: G1Affine,
    pub beta_g2: G2Affine,
    pub gamma_g2: G2Affine,
    pub delta_g2: G2Affine,
    pub ic: Vec<G1Affine>,
}

impl VerificationKey {
    pub fn num_public(&self) -> usize {
        self.ic.len().saturating_sub(1)
    }

    pub fn prepare(&self) -> PreparedVerificationKey {
        PreparedVerificationKey::from(self.clone())
    }
}

/// Query vectors are indexed by wire (`a_query`, `b_*_query`), by private
/// wire (`l_query`) or by power of tau (`h_query`).
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct ProvingKey {
    pub vk: VerificationKey,
    pub beta_g1: G1Affine,
    pub delta_g1: G1Affine,
    pub a_query: Vec<G1Affine>,
    pub b_g1_query: Vec<G1Affine>,
    pub b_g2_query: Vec<G2Affine>,
    pub h_query: Vec<G1Affine>,
    pub l_query: Vec<G1Affine>,
}

impl ProvingKey {
    pub fn verification_key(&self) -> &VerificationKey {
        &self.vk
    }

    pub fn num_wires(&self) -> usize {
        self.a_query.len()
    }
}

/// Verification key with `-alpha` and the G2 line coefficients precomputed.
#[derive(Clone, Debug)]
pub struct PreparedVerificationKey {
    vk: VerificationKey,
    pub(crate) neg_alpha_g1: G1Affine,
    pub(crate) beta_g2: G2Prepared,
    pub(crate) gamma_g2: G2Prepared,
    pub(crate) delta_g2: G2Prepared,
}

impl PreparedVerificationKey {
    pub fn vk(&self) -> &VerificationKey {
        &self.vk
    }
}

impl From<VerificationKey> for PreparedVerificationKey {
    fn from(vk: VerificationKey) -> Self {
        Self {
            neg_alpha_g1: -vk.alpha_g1,
            beta_g2: G2Prepared::from(vk.beta_g2),
            gamma_g2: G2Prepared::from(vk.gamma_g2),
            delta_g2: G2Prepared::from(vk.delta_g2),
            vk,
        }
    }
}
